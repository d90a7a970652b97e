//! Intake layer: parsing and caller-side validation
//!
//! Shape errors are this layer's responsibility; records that reach the
//! engine are assumed well-typed.

pub mod csv_parser;

pub use csv_parser::{
    parse_batch_csv, parse_batch_str, parse_courses_csv, parse_courses_str, validate_courses,
    BatchStudent,
};
