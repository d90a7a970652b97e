//! Built-in grading scale registry
//!
//! The three scales the calculator ships with. A registry scale always has
//! a non-empty grade table, satisfying the engine's cap contract.

use crate::core::models::{GradingScale, ScaleType};

/// The standard 4.0 letter scale
#[must_use]
pub fn standard_four_point() -> GradingScale {
    GradingScale::new("4.0 Scale (Standard)".to_string(), ScaleType::FourPoint)
        .with_grade("A", 4.0)
        .with_grade("A-", 3.7)
        .with_grade("B+", 3.3)
        .with_grade("B", 3.0)
        .with_grade("B-", 2.7)
        .with_grade("C+", 2.3)
        .with_grade("C", 2.0)
        .with_grade("C-", 1.7)
        .with_grade("D+", 1.3)
        .with_grade("D", 1.0)
        .with_grade("F", 0.0)
}

/// The weighted 5.0 letter scale
#[must_use]
pub fn weighted_five_point() -> GradingScale {
    GradingScale::new("5.0 Scale (Weighted)".to_string(), ScaleType::FivePoint)
        .with_grade("A", 5.0)
        .with_grade("A-", 4.7)
        .with_grade("B+", 4.3)
        .with_grade("B", 4.0)
        .with_grade("B-", 3.7)
        .with_grade("C+", 3.3)
        .with_grade("C", 3.0)
        .with_grade("C-", 2.7)
        .with_grade("D+", 2.3)
        .with_grade("D", 2.0)
        .with_grade("F", 0.0)
}

/// The percentage-band scale, mapped onto 4.0 points
#[must_use]
pub fn percentage() -> GradingScale {
    GradingScale::new("Percentage Scale".to_string(), ScaleType::Percentage)
        .with_grade("90-100", 4.0)
        .with_grade("80-89", 3.0)
        .with_grade("70-79", 2.0)
        .with_grade("60-69", 1.0)
        .with_grade("0-59", 0.0)
}

/// All built-in scales, in presentation order
#[must_use]
pub fn all() -> Vec<GradingScale> {
    vec![standard_four_point(), weighted_five_point(), percentage()]
}

/// Find a built-in scale by name
///
/// Matches the exact display name first, then falls back to a
/// case-insensitive prefix match (so `--scale "5.0"` works).
#[must_use]
pub fn find(name: &str) -> Option<GradingScale> {
    let scales = all();

    if let Some(scale) = scales.iter().find(|s| s.name == name) {
        return Some(scale.clone());
    }

    let lower = name.to_lowercase();
    scales
        .into_iter()
        .find(|s| s.name.to_lowercase().starts_with(&lower))
}
