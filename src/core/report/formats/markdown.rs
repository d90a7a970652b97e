//! Markdown report generator
//!
//! Generates GPA reports in Markdown format. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{format_gpa, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let result = ctx.result;
        let breakdown = &result.breakdown;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Substitute header metadata
        output = output.replace("{{student}}", ctx.student_name());
        output = output.replace("{{scale_name}}", ctx.scale_name);

        // Substitute GPA summary
        output = output.replace("{{cumulative_gpa}}", &format_gpa(result.cumulative));
        output = output.replace("{{institutional_gpa}}", &format_gpa(result.institutional));
        output = output.replace("{{transfer_gpa}}", &format_gpa(result.transfer));

        // Substitute credit breakdown
        output = output.replace("{{total_credits}}", &format!("{:.1}", breakdown.total_credits));
        output = output.replace(
            "{{institutional_credits}}",
            &format!("{:.1}", breakdown.institutional_credits),
        );
        output = output.replace(
            "{{transfer_credits}}",
            &format!("{:.1}", breakdown.transfer_credits),
        );
        output = output.replace(
            "{{quality_points}}",
            &format!("{:.2}", breakdown.quality_points),
        );
        output = output.replace(
            "{{institutional_quality_points}}",
            &format!("{:.2}", breakdown.institutional_quality_points),
        );
        output = output.replace(
            "{{transfer_quality_points}}",
            &format!("{:.2}", breakdown.transfer_quality_points),
        );

        // Generate course details table
        let course_table = Self::generate_course_table(ctx);
        output = output.replace("{{course_table}}", &course_table);

        // Generate warnings section
        let warnings_section = Self::generate_warnings_section(ctx);
        output = output.replace("{{warnings_section}}", &warnings_section);

        output
    }

    /// Generate the per-course details table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Course | Semester | Grade | Credits | Adjusted Points | Quality Points | Source |\n");
        table.push_str("|---|---|---|---|---|---|---|\n");

        for detail in &ctx.result.course_details {
            let course = &detail.course;
            let source = if course.is_transfer {
                course.institution_name.as_deref().unwrap_or("Transfer")
            } else {
                "Institutional"
            };

            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.1} | {:.2} | {:.2} | {} |",
                course.name,
                course.semester,
                course.grade,
                detail.converted_credits,
                detail.adjusted_grade_points,
                detail.quality_points,
                source
            );
        }

        table
    }

    /// Generate the warnings section, empty when there are none
    fn generate_warnings_section(ctx: &ReportContext) -> String {
        if ctx.result.warnings.is_empty() {
            return String::new();
        }

        let mut section = String::from("## Warnings\n\n");
        for warning in &ctx.result.warnings {
            let _ = writeln!(section, "- {warning}");
        }

        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
