//! Foreign transcript conversion
//!
//! Converts a record from an institution on a different grading system
//! onto the standardized 4.0 scale, with a rigor-based adjustment for the
//! originating institution. Table-driven and deterministic; credential
//! narratives and OCR belong to collaborators, not here.

use crate::core::engine::round2;
use crate::core::models::CourseRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Rigor divisor: a rating of 4 is treated as par for the 4.0 scale.
const RIGOR_BASELINE: f64 = 4.0;

/// Upper bound on the rigor multiplier.
const RIGOR_MULTIPLIER_CEILING: f64 = 1.2;

/// Ceiling for converted GPA figures.
const TARGET_SCALE_MAX: f64 = 4.0;

/// Grading system a foreign institution reports under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingSystem {
    /// 10-point CGPA (common in Indian institutions)
    #[serde(rename = "10-point CGPA")]
    TenPointCgpa,
    /// Standard US 4.0 GPA
    #[serde(rename = "4.0 GPA")]
    FourPointGpa,
    /// UK-style class honours
    #[serde(rename = "Class Honours")]
    ClassHonours,
    /// Plain letter grades
    #[serde(rename = "Letter Grades")]
    LetterGrades,
    /// Percentage bands
    #[serde(rename = "Percentage")]
    Percentage,
}

impl FromStr for GradingSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10-point CGPA" => Ok(Self::TenPointCgpa),
            "4.0 GPA" => Ok(Self::FourPointGpa),
            "Class Honours" => Ok(Self::ClassHonours),
            "Letter Grades" => Ok(Self::LetterGrades),
            "Percentage" => Ok(Self::Percentage),
            _ => Err(format!("Unknown grading system: {s}")),
        }
    }
}

impl fmt::Display for GradingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TenPointCgpa => write!(f, "10-point CGPA"),
            Self::FourPointGpa => write!(f, "4.0 GPA"),
            Self::ClassHonours => write!(f, "Class Honours"),
            Self::LetterGrades => write!(f, "Letter Grades"),
            Self::Percentage => write!(f, "Percentage"),
        }
    }
}

/// Profile of the originating institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionProfile {
    /// Institution name
    pub name: String,
    /// Grading system the transcript was issued under
    pub grading_system: GradingSystem,
    /// Rigor score in [1, 5]
    pub rigor: f64,
    /// CGPA/GPA as printed on the transcript, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_cgpa: Option<f64>,
}

/// One course's grade converted onto the 4.0 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseConversion {
    /// Course name
    pub course: String,
    /// Grade label as issued
    pub original_grade: String,
    /// Points on the 4.0 scale (rounded)
    pub converted_grade: f64,
    /// `converted_grade * credits` (rounded)
    pub quality_points: f64,
}

/// Result of converting a foreign transcript onto the 4.0 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEvaluation {
    /// GPA on the 4.0 scale before rigor adjustment; `None` on zero credits
    pub converted_gpa: Option<f64>,
    /// Rigor-adjusted GPA, capped at 4.0; `None` on zero credits
    pub rigor_adjusted_gpa: Option<f64>,
    /// Rigor multiplier that was applied
    pub rigor_multiplier: f64,
    /// Per-course conversions, in input order
    pub course_conversions: Vec<CourseConversion>,
    /// Total credits on the transcript
    pub total_credits: f64,
    /// Number of courses on the transcript
    pub total_courses: usize,
}

/// Conversion table for a grading system: grade label → points
///
/// 10-point values are stored as issued and folded onto 4.0 during
/// evaluation.
#[must_use]
pub fn conversion_table(system: GradingSystem) -> BTreeMap<String, f64> {
    let entries: &[(&str, f64)] = match system {
        GradingSystem::TenPointCgpa => &[
            ("AA", 10.0),
            ("AB", 9.0),
            ("BB", 8.0),
            ("BC", 7.0),
            ("CC", 6.0),
            ("CD", 5.0),
            ("DD", 4.0),
            ("O", 10.0),
            ("A+", 10.0),
            ("A", 9.0),
            ("A-", 8.0),
            ("B+", 7.0),
            ("B", 6.0),
            ("B-", 5.0),
            ("C+", 4.0),
            ("C", 3.0),
            ("D", 2.0),
            ("F", 0.0),
        ],
        GradingSystem::FourPointGpa | GradingSystem::LetterGrades => &[
            ("A", 4.0),
            ("A-", 3.7),
            ("B+", 3.3),
            ("B", 3.0),
            ("B-", 2.7),
            ("C+", 2.3),
            ("C", 2.0),
            ("C-", 1.7),
            ("D+", 1.3),
            ("D", 1.0),
            ("F", 0.0),
        ],
        GradingSystem::ClassHonours => &[
            ("First", 4.0),
            ("2:1", 3.5),
            ("2:2", 3.0),
            ("Third", 2.5),
            ("Pass", 2.0),
            ("Fail", 0.0),
        ],
        GradingSystem::Percentage => &[
            ("90-100", 4.0),
            ("80-89", 3.5),
            ("70-79", 3.0),
            ("60-69", 2.5),
            ("50-59", 2.0),
            ("40-49", 1.0),
            ("0-39", 0.0),
        ],
    };

    entries
        .iter()
        .map(|(label, points)| ((*label).to_string(), *points))
        .collect()
}

/// Convert a foreign institution's course records onto the 4.0 scale.
///
/// Grades are looked up in the institution's conversion table (unknown
/// labels score 0), 10-point values are folded onto 4.0, and the base GPA
/// is scaled by a rigor multiplier of `min(rigor / 4, 1.2)` with the
/// adjusted figure capped at 4.0.
#[must_use]
pub fn evaluate_transcript(
    courses: &[CourseRecord],
    institution: &InstitutionProfile,
) -> TranscriptEvaluation {
    let table = conversion_table(institution.grading_system);

    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    let mut course_conversions = Vec::with_capacity(courses.len());

    for course in courses {
        let mut grade_points = table.get(&course.grade).copied().unwrap_or(0.0);

        // Fold 10-point values onto the 4.0 scale
        if institution.grading_system == GradingSystem::TenPointCgpa && grade_points > 4.0 {
            grade_points = (grade_points / 10.0) * 4.0;
        }

        let quality_points = grade_points * course.credits;
        total_points += quality_points;
        total_credits += course.credits;

        course_conversions.push(CourseConversion {
            course: course.name.clone(),
            original_grade: course.grade.clone(),
            converted_grade: round2(grade_points),
            quality_points: round2(quality_points),
        });
    }

    let rigor_multiplier = (institution.rigor / RIGOR_BASELINE).min(RIGOR_MULTIPLIER_CEILING);

    let base_gpa = (total_credits > 0.0).then(|| total_points / total_credits);
    let converted_gpa = base_gpa.map(round2);
    let rigor_adjusted_gpa =
        base_gpa.map(|gpa| round2((gpa * rigor_multiplier).min(TARGET_SCALE_MAX)));

    TranscriptEvaluation {
        converted_gpa,
        rigor_adjusted_gpa,
        rigor_multiplier,
        course_conversions,
        total_credits,
        total_courses: courses.len(),
    }
}
