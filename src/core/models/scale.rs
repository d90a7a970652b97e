//! Grading scale model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Broad family a grading scale belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleType {
    /// Standard 4.0 scale
    #[serde(rename = "4.0")]
    FourPoint,
    /// Weighted 5.0 scale
    #[serde(rename = "5.0")]
    FivePoint,
    /// Percentage-band scale
    #[serde(rename = "percentage")]
    Percentage,
    /// Letter-grade scale
    #[serde(rename = "letter")]
    Letter,
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FourPoint => write!(f, "4.0"),
            Self::FivePoint => write!(f, "5.0"),
            Self::Percentage => write!(f, "percentage"),
            Self::Letter => write!(f, "letter"),
        }
    }
}

/// A grading scale: a named, uniquely-keyed map from grade label to points
///
/// Labels are stored ordered so listings and serialized output are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingScale {
    /// Display label (e.g., "4.0 Scale (Standard)")
    pub name: String,
    /// Scale family
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    /// Grade label → point value
    pub grades: BTreeMap<String, f64>,
}

impl GradingScale {
    /// Create an empty scale
    #[must_use]
    pub const fn new(name: String, scale_type: ScaleType) -> Self {
        Self {
            name,
            scale_type,
            grades: BTreeMap::new(),
        }
    }

    /// Add a grade label to the point table (builder style)
    #[must_use]
    pub fn with_grade(mut self, label: &str, points: f64) -> Self {
        self.grades.insert(label.to_string(), points);
        self
    }

    /// Look up the point value for a grade label
    #[must_use]
    pub fn points_for(&self, grade: &str) -> Option<f64> {
        self.grades.get(grade).copied()
    }

    /// The scale's nominal ceiling: the highest point value in the table
    ///
    /// Returns `None` for an empty table so degenerate scales never
    /// produce a `-inf` ceiling.
    #[must_use]
    pub fn max_points(&self) -> Option<f64> {
        self.grades
            .values()
            .copied()
            .fold(None, |best: Option<f64>, v| {
                Some(best.map_or(v, |b| b.max(v)))
            })
    }
}
