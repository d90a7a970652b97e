//! Calc command handler

use gradepoint::config::Config;
use gradepoint::core::engine::{compute_gpa, compute_simple_gpa};
use gradepoint::core::intake::{parse_courses_csv, validate_courses};
use gradepoint::core::models::{CalculationResult, GradingScale};
use gradepoint::core::report::{
    format_gpa, CsvReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gradepoint::core::scales;
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Run the calc command for a course CSV file.
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn run(
    input_file: &Path,
    scale_name: Option<&str>,
    student: Option<&str>,
    report: Option<&str>,
    output: Option<&Path>,
    simple: bool,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = calculate(
        input_file, scale_name, student, report, output, simple, config, verbose,
    ) {
        error!("Calc failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
fn calculate(
    input_file: &Path,
    scale_name: Option<&str>,
    student: Option<&str>,
    report: Option<&str>,
    output: Option<&Path>,
    simple: bool,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let scale = resolve_scale(scale_name, config)?;

    let courses = parse_courses_csv(input_file).map_err(|e| {
        error!("Failed to load courses {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    let validation_errors = validate_courses(&courses);
    if !validation_errors.is_empty() {
        for problem in &validation_errors {
            eprintln!("✗ {problem}");
        }
        return Err(format!(
            "✗ {} validation problem(s); fix the input and retry",
            validation_errors.len()
        ));
    }

    if verbose {
        println!(
            "✓ Loaded {} course(s) from: {}",
            courses.len(),
            input_file.display()
        );
    } else {
        info!("Courses loaded: {}", input_file.display());
    }

    if simple {
        let result = compute_simple_gpa(&courses, &scale);
        println!("\n=== GPA ({}) ===\n", scale.name);
        println!("GPA:            {}", format_gpa(result.gpa));
        println!("Total credits:  {:.1}", result.total_credits);
        println!("Quality points: {:.2}", result.total_quality_points);
        return Ok(());
    }

    let settings = config.calculation.institutional_settings();
    let result = compute_gpa(&courses, &scale, &settings);

    print_result(&result, &scale, verbose);

    if let Some(format_str) = report {
        let report_path = write_report(&result, &scale, student, format_str, output, config)?;
        println!("✓ Report generated: {}", report_path.display());
    }

    Ok(())
}

/// Resolve the grading scale by CLI argument, falling back to config.
pub fn resolve_scale(scale_name: Option<&str>, config: &Config) -> Result<GradingScale, String> {
    let name = scale_name.unwrap_or(&config.calculation.scale);

    scales::find(name).ok_or_else(|| {
        let available: Vec<String> = scales::all().into_iter().map(|s| s.name).collect();
        format!(
            "✗ Unknown grading scale '{name}'. Available: {}",
            available.join(", ")
        )
    })
}

fn print_result(result: &CalculationResult, scale: &GradingScale, verbose: bool) {
    let breakdown = &result.breakdown;

    println!("\n=== GPA Results ({}) ===\n", scale.name);
    println!("Cumulative GPA:    {}", format_gpa(result.cumulative));
    println!("Institutional GPA: {}", format_gpa(result.institutional));
    println!("Transfer GPA:      {}", format_gpa(result.transfer));
    println!();
    println!(
        "Credits: {:.1} total ({:.1} institutional, {:.1} transfer)",
        breakdown.total_credits, breakdown.institutional_credits, breakdown.transfer_credits
    );
    println!("Quality points: {:.2}", breakdown.quality_points);

    if verbose {
        println!();
        for detail in &result.course_details {
            let course = &detail.course;
            println!(
                "  {} [{}] {:.2} points × {:.1} credits = {:.2} quality points",
                course.name,
                course.grade,
                detail.adjusted_grade_points,
                detail.converted_credits,
                detail.quality_points
            );
        }
    }

    if !result.warnings.is_empty() {
        println!();
        for warning in &result.warnings {
            println!("⚠ {warning}");
        }
    }
}

/// Write a report for `result`, returning the path written to.
fn write_report(
    result: &CalculationResult,
    scale: &GradingScale,
    student: Option<&str>,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format: ReportFormat = format_str
        .parse()
        .map_err(|e: String| format!("✗ {e} (expected csv or markdown)"))?;

    let report_path = output.map_or_else(
        || {
            let reports_dir = PathBuf::from(&config.paths.reports_dir);
            let stem = student.unwrap_or("gpa-report").replace(' ', "_");
            reports_dir.join(format!("{stem}.{}", format.extension()))
        },
        Path::to_path_buf,
    );

    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("✗ Failed to create {}: {e}", parent.display()))?;
    }

    let ctx = ReportContext::new(student, &scale.name, result);
    let generated = match format {
        ReportFormat::Csv => CsvReporter::new().generate(&ctx, &report_path),
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &report_path),
    };

    generated.map_err(|e| format!("✗ Failed to write {}: {e}", report_path.display()))?;
    Ok(report_path)
}
