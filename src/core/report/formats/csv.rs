//! CSV report generator
//!
//! Produces a spreadsheet-importable report: summary statistics, course
//! details as table rows, and any policy warnings.

use crate::core::report::{format_gpa, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// CSV report generator
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_report(ctx: &ReportContext) -> String {
        let result = ctx.result;
        let breakdown = &result.breakdown;
        let mut out = String::new();

        let _ = writeln!(out, "Section,Field,Value");
        let _ = writeln!(out, "Summary,Student,{}", escape(ctx.student_name()));
        let _ = writeln!(out, "Summary,Grading Scale,{}", escape(ctx.scale_name));
        let _ = writeln!(
            out,
            "Summary,Cumulative GPA,{}",
            format_gpa(result.cumulative)
        );
        let _ = writeln!(
            out,
            "Summary,Institutional GPA,{}",
            format_gpa(result.institutional)
        );
        let _ = writeln!(out, "Summary,Transfer GPA,{}", format_gpa(result.transfer));
        let _ = writeln!(out, "Summary,Total Credits,{}", breakdown.total_credits);
        let _ = writeln!(
            out,
            "Summary,Institutional Credits,{}",
            breakdown.institutional_credits
        );
        let _ = writeln!(
            out,
            "Summary,Transfer Credits,{}",
            breakdown.transfer_credits
        );
        let _ = writeln!(out, "Summary,Quality Points,{}", breakdown.quality_points);
        out.push('\n');

        let _ = writeln!(
            out,
            "Course,Name,Semester,Grade,Credits,Converted Credits,Adjusted Grade Points,Quality Points,Transfer"
        );
        for detail in &result.course_details {
            let course = &detail.course;
            let _ = writeln!(
                out,
                "Course,{},{},{},{},{},{},{},{}",
                escape(&course.name),
                escape(&course.semester),
                escape(&course.grade),
                course.credits,
                detail.converted_credits,
                detail.adjusted_grade_points,
                detail.quality_points,
                if course.is_transfer {
                    course
                        .institution_name
                        .as_deref()
                        .unwrap_or("yes")
                        .to_string()
                } else {
                    "no".to_string()
                }
            );
        }

        if !result.warnings.is_empty() {
            out.push('\n');
            let _ = writeln!(out, "Warning,Message");
            for warning in &result.warnings {
                let _ = writeln!(out, "Warning,{}", escape(warning));
            }
        }

        out
    }
}

/// Quote a CSV cell when it contains separators or quotes
fn escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_report(ctx))
    }
}
