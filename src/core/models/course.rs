//! Course record model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credit accounting system a course was recorded under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditSystem {
    /// Semester hours (the target system; no conversion)
    Semester,
    /// Quarter hours, converted at 0.67 per hour
    Quarter,
    /// Trimester hours, converted at 0.75 per hour
    Trimester,
}

impl FromStr for CreditSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "semester" => Ok(Self::Semester),
            "quarter" => Ok(Self::Quarter),
            "trimester" => Ok(Self::Trimester),
            _ => Err(format!("Unknown credit system: {s}")),
        }
    }
}

impl fmt::Display for CreditSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semester => write!(f, "semester"),
            Self::Quarter => write!(f, "quarter"),
            Self::Trimester => write!(f, "trimester"),
        }
    }
}

/// Classification of a course for institutional policy purposes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    /// Required/foundational coursework
    #[default]
    Core,
    /// Elective coursework (may be excluded by policy)
    Elective,
    /// Honors coursework (eligible for bonus points)
    Honors,
    /// Advanced Placement coursework (eligible for bonus points)
    Ap,
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "elective" => Ok(Self::Elective),
            "honors" => Ok(Self::Honors),
            "ap" => Ok(Self::Ap),
            _ => Err(format!("Unknown course type: {s}")),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Elective => write!(f, "elective"),
            Self::Honors => write!(f, "honors"),
            Self::Ap => write!(f, "ap"),
        }
    }
}

/// A single course/grade record submitted for GPA calculation
///
/// Transfer-only fields (`original_credits`, `credit_system`,
/// `institution_name`, `rigor_rating`) are ignored by the engine when
/// `is_transfer` is false; they may be present without altering output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Opaque identifier, unique within one calculation request
    pub id: String,

    /// Course display name (e.g., "Organic Chemistry I")
    pub name: String,

    /// Credit value in the current institution's accounting
    pub credits: f64,

    /// Grade label; a key into the active grading scale's point table
    pub grade: String,

    /// Term the course was taken in (display only; not used in calculation)
    pub semester: String,

    /// Whether this course transferred in from another institution
    #[serde(default)]
    pub is_transfer: bool,

    /// Credits as recorded at the originating institution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_credits: Option<f64>,

    /// Credit system the originating institution used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_system: Option<CreditSystem>,

    /// Course classification for bonus/filter policies
    #[serde(default)]
    pub course_type: CourseType,

    /// Originating institution name (transfer courses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,

    /// Subjective rigor score in [1, 5] for the originating institution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigor_rating: Option<f64>,
}

impl CourseRecord {
    /// Create a new institutional (non-transfer) course record
    #[must_use]
    pub fn new(id: &str, name: &str, credits: f64, grade: &str, semester: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            credits,
            grade: grade.to_string(),
            semester: semester.to_string(),
            is_transfer: false,
            original_credits: None,
            credit_system: None,
            course_type: CourseType::Core,
            institution_name: None,
            rigor_rating: None,
        }
    }

    /// Mark this record as a transfer course from the named institution
    #[must_use]
    pub fn as_transfer(
        mut self,
        institution: &str,
        original_credits: f64,
        credit_system: CreditSystem,
        rigor_rating: f64,
    ) -> Self {
        self.is_transfer = true;
        self.institution_name = Some(institution.to_string());
        self.original_credits = Some(original_credits);
        self.credit_system = Some(credit_system);
        self.rigor_rating = Some(rigor_rating);
        self
    }

    /// Set the course classification
    #[must_use]
    pub const fn with_type(mut self, course_type: CourseType) -> Self {
        self.course_type = course_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = CourseRecord::new("1", "Discrete Structures", 4.0, "A-", "Fall 2024");

        assert_eq!(course.name, "Discrete Structures");
        assert_eq!(course.grade, "A-");
        assert!((course.credits - 4.0).abs() < f64::EPSILON);
        assert!(!course.is_transfer);
        assert_eq!(course.course_type, CourseType::Core);
        assert!(course.rigor_rating.is_none());
    }

    #[test]
    fn test_transfer_builder() {
        let course = CourseRecord::new("2", "Calculus II", 4.0, "B", "Spring 2023").as_transfer(
            "Foothill College",
            4.0,
            CreditSystem::Quarter,
            4.0,
        );

        assert!(course.is_transfer);
        assert_eq!(course.institution_name.as_deref(), Some("Foothill College"));
        assert_eq!(course.credit_system, Some(CreditSystem::Quarter));
        assert_eq!(course.original_credits, Some(4.0));
    }

    #[test]
    fn test_course_type_parsing() {
        assert_eq!("AP".parse::<CourseType>(), Ok(CourseType::Ap));
        assert_eq!("elective".parse::<CourseType>(), Ok(CourseType::Elective));
        assert!("seminar".parse::<CourseType>().is_err());
    }

    #[test]
    fn test_credit_system_parsing() {
        assert_eq!("Quarter".parse::<CreditSystem>(), Ok(CreditSystem::Quarter));
        assert_eq!(
            "trimester".parse::<CreditSystem>(),
            Ok(CreditSystem::Trimester)
        );
        assert!("yearly".parse::<CreditSystem>().is_err());
    }

    #[test]
    fn test_serde_uses_original_field_names() {
        let course = CourseRecord::new("3", "Physics I", 3.0, "B+", "Fall 2024");
        let json = serde_json::to_string(&course).expect("serialize course");

        assert!(json.contains("\"isTransfer\":false"));
        assert!(json.contains("\"courseType\":\"core\""));
        // Absent transfer fields stay off the wire
        assert!(!json.contains("originalCredits"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // Optional fields default the way the web intake supplied them
        let json = r#"{"id":"1","name":"Lab","credits":1.5,"grade":"A","semester":"Fall 2024"}"#;
        let course: CourseRecord = serde_json::from_str(json).expect("parse course");

        assert!(!course.is_transfer);
        assert_eq!(course.course_type, CourseType::Core);
        assert!(course.credit_system.is_none());
    }
}
