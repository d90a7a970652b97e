//! Calculation result models

use super::course::CourseRecord;
use serde::{Deserialize, Serialize};

/// Credit and quality-point totals for the three GPA buckets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpaBreakdown {
    /// Credits feeding the cumulative GPA
    pub total_credits: f64,
    /// Credits in the transfer bucket
    pub transfer_credits: f64,
    /// Credits in the institutional bucket
    pub institutional_credits: f64,
    /// Quality points feeding the cumulative GPA (rounded)
    pub quality_points: f64,
    /// Quality points in the transfer bucket (rounded)
    pub transfer_quality_points: f64,
    /// Quality points in the institutional bucket (rounded)
    pub institutional_quality_points: f64,
}

/// One course's computed contribution to the calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    /// The input course, echoed back
    #[serde(flatten)]
    pub course: CourseRecord,
    /// Credits after credit-system normalization
    pub converted_credits: f64,
    /// Grade points after bonuses, rigor adjustment, and the cap (rounded)
    pub adjusted_grade_points: f64,
    /// `adjusted_grade_points * converted_credits` (rounded)
    pub quality_points: f64,
}

/// Full output of the conversion and aggregation engine
///
/// A GPA field is `None` when its bucket holds zero credits; a computed
/// zero over non-zero credits stays `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// GPA over institutional credits only
    pub institutional: Option<f64>,
    /// GPA over transfer credits only
    pub transfer: Option<f64>,
    /// Blended GPA per institutional policy
    pub cumulative: Option<f64>,
    /// Credit/quality-point totals per bucket
    pub breakdown: GpaBreakdown,
    /// Per-course computed contributions, in input order
    pub course_details: Vec<CourseDetail>,
    /// Ordered, human-readable policy-effect warnings
    pub warnings: Vec<String>,
}

/// One course's contribution in the simple (no-transfer-policy) calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleCourseDetail {
    /// The input course, echoed back
    #[serde(flatten)]
    pub course: CourseRecord,
    /// Scale points for the course grade (unknown grade scores 0)
    pub grade_points: f64,
    /// `grade_points * credits` (rounded)
    pub quality_points: f64,
}

/// Output of the simple single-bucket calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleCalculation {
    /// GPA over all credits, `None` when no credits were supplied
    pub gpa: Option<f64>,
    /// Sum of course credits
    pub total_credits: f64,
    /// Sum of quality points (rounded)
    pub total_quality_points: f64,
    /// Per-course contributions, in input order
    pub course_details: Vec<SimpleCourseDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_detail_flattens_course_fields() {
        let detail = CourseDetail {
            course: CourseRecord::new("1", "Statics", 3.0, "B", "Fall 2024"),
            converted_credits: 3.0,
            adjusted_grade_points: 3.0,
            quality_points: 9.0,
        };

        let json = serde_json::to_string(&detail).expect("serialize detail");
        // Matches the original wire shape: course fields spread inline
        assert!(json.contains("\"name\":\"Statics\""));
        assert!(json.contains("\"convertedCredits\":3.0"));
        assert!(!json.contains("\"course\":"));
    }

    #[test]
    fn test_null_gpa_serializes_as_null() {
        let result = CalculationResult {
            institutional: None,
            transfer: None,
            cumulative: Some(3.5),
            breakdown: GpaBreakdown::default(),
            course_details: Vec::new(),
            warnings: Vec::new(),
        };

        let json = serde_json::to_string(&result).expect("serialize result");
        assert!(json.contains("\"institutional\":null"));
        assert!(json.contains("\"cumulative\":3.5"));
    }
}
