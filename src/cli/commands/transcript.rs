//! Transcript command handler

use gradepoint::core::intake::parse_courses_csv;
use gradepoint::core::report::format_gpa;
use gradepoint::core::transcript::{evaluate_transcript, GradingSystem, InstitutionProfile};
use logger::error;
use std::path::Path;

/// Run the transcript command: convert a foreign record onto the 4.0 scale.
pub fn run(input_file: &Path, institution: &str, system: &str, rigor: f64, verbose: bool) {
    if let Err(err) = convert(input_file, institution, system, rigor, verbose) {
        error!("Transcript conversion failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

fn convert(
    input_file: &Path,
    institution: &str,
    system: &str,
    rigor: f64,
    verbose: bool,
) -> Result<(), String> {
    let grading_system: GradingSystem = system.parse().map_err(|_| {
        format!(
            "✗ Unknown grading system '{system}'. Available: \
             10-point CGPA, 4.0 GPA, Class Honours, Letter Grades, Percentage"
        )
    })?;

    let courses = parse_courses_csv(input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;

    let profile = InstitutionProfile {
        name: institution.to_string(),
        grading_system,
        rigor,
        original_cgpa: None,
    };

    let evaluation = evaluate_transcript(&courses, &profile);

    println!("\n=== Transcript Conversion ===\n");
    println!("Institution:       {institution} ({grading_system})");
    println!("Rigor rating:      {rigor:.1}/5.0");
    println!(
        "Converted GPA:     {}",
        format_gpa(evaluation.converted_gpa)
    );
    println!(
        "Rigor-adjusted:    {} ({:.2}x)",
        format_gpa(evaluation.rigor_adjusted_gpa),
        evaluation.rigor_multiplier
    );
    println!(
        "Courses/credits:   {} / {:.1}",
        evaluation.total_courses, evaluation.total_credits
    );

    if verbose {
        println!();
        for conversion in &evaluation.course_conversions {
            println!(
                "  {}: {} → {:.2} ({:.2} quality points)",
                conversion.course,
                conversion.original_grade,
                conversion.converted_grade,
                conversion.quality_points
            );
        }
    }

    Ok(())
}
