//! Integration tests for CSV intake feeding the engine

use gradepoint::core::engine::compute_gpa;
use gradepoint::core::intake::{parse_batch_csv, parse_courses_csv, validate_courses};
use gradepoint::core::models::InstitutionalSettings;
use gradepoint::core::scales;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to write CSV content into a temp file
fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write csv fixture");
    path
}

#[test]
fn course_file_parses_and_computes() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "courses.csv",
        "name,credits,grade,semester,transfer,institution,original_credits,credit_system,course_type,rigor\n\
         Biology,3,A,Fall 2024,,,,,,\n\
         Calculus,4,B,Fall 2023,yes,Foothill College,4,quarter,core,3\n",
    );

    let courses = parse_courses_csv(&path).expect("parse course file");
    assert_eq!(courses.len(), 2);
    assert!(validate_courses(&courses).is_empty());

    let result = compute_gpa(
        &courses,
        &scales::standard_four_point(),
        &InstitutionalSettings::default(),
    );

    // 3cr of A institutional, 2.7cr of B transfer
    assert_eq!(result.institutional, Some(4.0));
    assert_eq!(result.transfer, Some(3.0));
    assert!((result.breakdown.total_credits - 5.7).abs() < f64::EPSILON);
}

#[test]
fn missing_file_is_an_error() {
    let err = parse_courses_csv("no/such/file.csv").expect_err("missing file");
    assert!(!err.to_string().is_empty());
}

#[test]
fn batch_file_groups_students_and_computes_each() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "batch.csv",
        "university_name,program_name,student_id,student_name,term/semester,course_code,course_name,credits,grade\n\
         State U,Biology BS,s1,Avery,Fall 2024,BIO101,Intro Biology,3,A\n\
         State U,Biology BS,s1,Avery,Fall 2024,CHM101,Intro Chemistry,4,B\n\
         State U,Physics BS,s2,Sam,Fall 2024,PHY101,Mechanics,3,A-\n",
    );

    let students = parse_batch_csv(&path).expect("parse batch file");
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].student_name, "Avery");
    assert_eq!(students[0].courses.len(), 2);
    assert_eq!(students[1].program_name, "Physics BS");

    let scale = scales::standard_four_point();
    let settings = InstitutionalSettings::default();

    let avery = compute_gpa(&students[0].courses, &scale, &settings);
    // (4.0*3 + 3.0*4) / 7 = 3.43
    assert_eq!(avery.cumulative, Some(3.43));

    let sam = compute_gpa(&students[1].courses, &scale, &settings);
    assert_eq!(sam.cumulative, Some(3.7));
}

#[test]
fn batch_file_with_missing_headers_reports_them() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "bad.csv",
        "university_name,student_id,student_name,credits,grade\nState U,s1,Avery,3,A\n",
    );

    let err = parse_batch_csv(&path).expect_err("incomplete header");
    let message = err.to_string();
    assert!(message.starts_with("Missing required fields: "));
    assert!(message.contains("course_name"));
    assert!(message.contains("term/semester"));
}

#[test]
fn validation_blocks_bad_rows_before_the_engine() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "invalid.csv",
        "name,credits,grade\nBiology,0,A\nChemistry,3,\n",
    );

    let courses = parse_courses_csv(&path).expect("parse course file");
    let errors = validate_courses(&courses);

    assert_eq!(
        errors,
        vec![
            "Course 1: Credits must be greater than 0".to_string(),
            "Course 2: Grade is required".to_string(),
        ]
    );
}
