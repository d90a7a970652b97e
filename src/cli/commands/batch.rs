//! Batch command handler

use super::calc::resolve_scale;
use gradepoint::config::Config;
use gradepoint::core::engine::compute_gpa;
use gradepoint::core::history::{HistoryEntry, HistoryStore, InMemoryHistory};
use gradepoint::core::intake::{parse_batch_csv, BatchStudent};
use gradepoint::core::models::CalculationResult;
use gradepoint::core::report::{
    format_gpa, CsvReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Run the batch command for a multi-student transcript CSV.
pub fn run(input_file: &Path, scale_name: Option<&str>, report: Option<&str>, config: &Config) {
    if let Err(err) = process(input_file, scale_name, report, config) {
        error!("Batch failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

fn process(
    input_file: &Path,
    scale_name: Option<&str>,
    report: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let scale = resolve_scale(scale_name, config)?;

    let report_format: Option<ReportFormat> = match report {
        Some(format_str) => Some(
            format_str
                .parse()
                .map_err(|e: String| format!("✗ {e} (expected csv or markdown)"))?,
        ),
        None => None,
    };

    let students = parse_batch_csv(input_file).map_err(|e| {
        error!("Failed to load batch {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    if students.is_empty() {
        return Err("✗ No student rows found in the batch file".to_string());
    }

    let settings = config.calculation.institutional_settings();
    let mut history = InMemoryHistory::new();

    println!("\n=== Batch GPA Results ({}) ===\n", scale.name);

    for student in &students {
        let result = compute_gpa(&student.courses, &scale, &settings);

        println!(
            "{} ({}): cumulative {} over {:.1} credits",
            student.student_name,
            student.student_id,
            format_gpa(result.cumulative),
            result.breakdown.total_credits
        );

        for warning in &result.warnings {
            println!("  ⚠ {warning}");
        }

        if let Some(format) = report_format {
            let path = write_student_report(&result, &scale.name, student, format, config)?;
            info!("Report generated: {}", path.display());
        }

        history.record(HistoryEntry {
            student: Some(student.student_name.clone()),
            result,
        });
    }

    println!("\n✓ Processed {} student(s)", history.len());
    Ok(())
}

fn write_student_report(
    result: &CalculationResult,
    scale_name: &str,
    student: &BatchStudent,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir)
        .map_err(|e| format!("✗ Failed to create {}: {e}", reports_dir.display()))?;

    let path = reports_dir.join(format!(
        "{}.{}",
        student.student_id.replace(' ', "_"),
        format.extension()
    ));

    let ctx = ReportContext::new(Some(&student.student_name), scale_name, result);
    let generated = match format {
        ReportFormat::Csv => CsvReporter::new().generate(&ctx, &path),
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &path),
    };

    generated.map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
    Ok(path)
}
