//! CLI command handlers

pub mod batch;
pub mod calc;
pub mod config;
pub mod scales;
pub mod transcript;
