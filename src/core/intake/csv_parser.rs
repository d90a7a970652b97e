//! CSV parsers for course and batch transcript data

use crate::core::models::{CourseRecord, CourseType, CreditSystem};
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Credits assumed when a course row has an unparseable credit value
const FALLBACK_CREDITS: f64 = 3.0;

/// Term assumed when a course row omits one
const FALLBACK_SEMESTER: &str = "Fall 2024";

/// Headers a batch transcript CSV must carry
const REQUIRED_BATCH_FIELDS: [&str; 9] = [
    "university_name",
    "program_name",
    "student_id",
    "student_name",
    "term/semester",
    "course_code",
    "course_name",
    "credits",
    "grade",
];

/// One student's rows from a batch transcript CSV
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStudent {
    /// Student identifier from the sheet
    pub student_id: String,
    /// Student display name
    pub student_name: String,
    /// University the sheet was issued by
    pub university_name: String,
    /// Program/degree name
    pub program_name: String,
    /// The student's course records, in sheet order
    pub courses: Vec<CourseRecord>,
}

/// Parse a course CSV file into course records
///
/// # Errors
/// Returns an error if the file cannot be read or the header row is
/// missing a required column.
pub fn parse_courses_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_courses_str(&content)
}

/// Parse course CSV content into course records
///
/// Expected header columns: `name`, `credits`, `grade`, and optionally
/// `semester`, `transfer`, `institution`, `original_credits`,
/// `credit_system`, `course_type`, `rigor`. Blank lines are skipped and
/// malformed numeric cells fall back to defaults; structural problems
/// (missing required columns) are errors.
///
/// # Errors
/// Returns an error when the content is empty or a required column is
/// absent from the header row.
pub fn parse_courses_str(content: &str) -> Result<Vec<CourseRecord>, Box<dyn Error>> {
    let mut lines = content.lines();
    let header_line = lines.next().ok_or("Empty CSV input")?;
    let headers = parse_csv_line(header_line);

    for required in ["name", "credits", "grade"] {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(required)) {
            return Err(format!("Missing required column: {required}").into());
        }
    }

    let mut courses = Vec::new();

    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let name = get_field(line, "name", &headers).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let credits = get_field(line, "credits", &headers)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(FALLBACK_CREDITS);
        let grade = get_field(line, "grade", &headers).unwrap_or_default();
        let semester = get_field(line, "semester", &headers)
            .filter(|v| !v.is_empty())
            .unwrap_or(FALLBACK_SEMESTER);

        // Row number doubles as the request-scoped course id
        let mut course = CourseRecord::new(&(idx + 1).to_string(), name, credits, grade, semester);

        if get_field(line, "transfer", &headers).is_some_and(parse_bool) {
            course.is_transfer = true;
            course.institution_name = get_field(line, "institution", &headers)
                .filter(|v| !v.is_empty())
                .map(String::from);
            course.original_credits =
                get_field(line, "original_credits", &headers).and_then(|v| v.parse::<f64>().ok());
            course.credit_system = get_field(line, "credit_system", &headers)
                .and_then(|v| v.parse::<CreditSystem>().ok());
            course.rigor_rating =
                get_field(line, "rigor", &headers).and_then(|v| v.parse::<f64>().ok());
        }

        if let Some(course_type) =
            get_field(line, "course_type", &headers).and_then(|v| v.parse::<CourseType>().ok())
        {
            course.course_type = course_type;
        }

        courses.push(course);
    }

    Ok(courses)
}

/// Validate course records the way the entry form does
///
/// Returns one message per problem: missing name, non-positive credits,
/// missing grade. An empty result means the records are fit for the
/// engine.
#[must_use]
pub fn validate_courses(courses: &[CourseRecord]) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, course) in courses.iter().enumerate() {
        let ordinal = index + 1;
        if course.name.trim().is_empty() {
            errors.push(format!("Course {ordinal}: Name is required"));
        }
        if course.credits <= 0.0 {
            errors.push(format!("Course {ordinal}: Credits must be greater than 0"));
        }
        if course.grade.is_empty() {
            errors.push(format!("Course {ordinal}: Grade is required"));
        }
    }

    errors
}

/// Parse a batch transcript CSV file into per-student course groups
///
/// # Errors
/// Returns an error if the file cannot be read or required headers are
/// missing.
pub fn parse_batch_csv<P: AsRef<Path>>(path: P) -> Result<Vec<BatchStudent>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_batch_str(&content)
}

/// Parse batch transcript CSV content into per-student course groups
///
/// The header row must carry every required field
/// (`university_name`, `program_name`, `student_id`, `student_name`,
/// `term/semester`, `course_code`, `course_name`, `credits`, `grade`).
/// Rows group by `student_id` in first-seen order.
///
/// # Errors
/// Returns a "Missing required fields: …" error when the header row is
/// incomplete, or an error when the content is empty.
pub fn parse_batch_str(content: &str) -> Result<Vec<BatchStudent>, Box<dyn Error>> {
    let mut lines = content.lines();
    let header_line = lines.next().ok_or("Empty CSV input")?;
    let headers = parse_csv_line(header_line);

    let missing: Vec<&str> = REQUIRED_BATCH_FIELDS
        .iter()
        .filter(|field| !headers.iter().any(|h| h.eq_ignore_ascii_case(field)))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(format!("Missing required fields: {}", missing.join(", ")).into());
    }

    let mut students: Vec<BatchStudent> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let student_id = get_field(line, "student_id", &headers)
            .unwrap_or_default()
            .to_string();
        if student_id.is_empty() {
            continue;
        }

        let position = *index_by_id.entry(student_id.clone()).or_insert_with(|| {
            students.push(BatchStudent {
                student_id: student_id.clone(),
                student_name: get_field(line, "student_name", &headers)
                    .unwrap_or_default()
                    .to_string(),
                university_name: get_field(line, "university_name", &headers)
                    .unwrap_or_default()
                    .to_string(),
                program_name: get_field(line, "program_name", &headers)
                    .unwrap_or_default()
                    .to_string(),
                courses: Vec::new(),
            });
            students.len() - 1
        });

        let code = get_field(line, "course_code", &headers).unwrap_or_default();
        let name = get_field(line, "course_name", &headers).unwrap_or_default();
        let credits = get_field(line, "credits", &headers)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);
        let grade = get_field(line, "grade", &headers).unwrap_or_default();
        let semester = get_field(line, "term/semester", &headers).unwrap_or_default();

        students[position]
            .courses
            .push(CourseRecord::new(code, name, credits, grade, semester));
    }

    Ok(students)
}

/// Parse a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}

/// Get a field value from a CSV line by header name
fn get_field<'a>(line: &'a str, header_name: &str, headers: &[String]) -> Option<&'a str> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .copied()
}

/// Interpret a CSV cell as a boolean flag
fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "y" | "1")
}
