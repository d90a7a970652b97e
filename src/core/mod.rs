//! Core module for the GPA conversion and aggregation engine

pub mod config;
pub mod engine;
pub mod history;
pub mod intake;
pub mod models;
pub mod report;
pub mod scales;
pub mod transcript;

/// Returns the current version of the `gradepoint` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
