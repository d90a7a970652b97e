//! Report generation for calculation results
//!
//! Renders a `CalculationResult` into downloadable formats (CSV,
//! Markdown). Reports are built deterministically from the result data;
//! narrative insight text is a collaborator's concern and never appears
//! here.

pub mod formats;

pub use formats::{CsvReporter, MarkdownReporter, ReportFormat};

use crate::core::models::CalculationResult;
use std::error::Error;
use std::path::Path;

/// Data context for report generation
///
/// Aggregates everything needed to render one report, providing a single
/// source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student the calculation was run for, when known
    pub student: Option<&'a str>,
    /// Display name of the grading scale used
    pub scale_name: &'a str,
    /// The computed result being reported
    pub result: &'a CalculationResult,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        student: Option<&'a str>,
        scale_name: &'a str,
        result: &'a CalculationResult,
    ) -> Self {
        Self {
            student,
            scale_name,
            result,
        }
    }

    /// Student display name, or a generic label
    #[must_use]
    pub fn student_name(&self) -> &str {
        self.student.unwrap_or("Student")
    }
}

/// Format an optional GPA figure for display
#[must_use]
pub fn format_gpa(gpa: Option<f64>) -> String {
    gpa.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

/// Trait for rendering reports in different formats
pub trait ReportGenerator {
    /// Render the report and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Render the report to a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_gpa_handles_both_cases() {
        assert_eq!(format_gpa(Some(3.456)), "3.46");
        assert_eq!(format_gpa(Some(0.0)), "0.00");
        assert_eq!(format_gpa(None), "N/A");
    }
}
