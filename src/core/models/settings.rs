//! Institutional policy settings

use serde::{Deserialize, Serialize};

const fn default_include_transfer() -> bool {
    true
}

const fn default_honors_bonus() -> f64 {
    0.5
}

const fn default_ap_bonus() -> f64 {
    1.0
}

const fn default_rigor_adjustment() -> f64 {
    1.0
}

/// Institutional policy knobs applied during GPA calculation
///
/// All fields are assumed present with sane numeric ranges (e.g.,
/// `rigor_adjustment` typically in [0.5, 1.5]); range limits are the
/// caller's concern, and out-of-range values propagate arithmetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalSettings {
    /// Whether transfer quality points/credits feed the cumulative total
    #[serde(default = "default_include_transfer")]
    pub include_transfer_in_gpa: bool,

    /// When true, electives are excluded entirely from all totals
    #[serde(default)]
    pub core_subjects_only: bool,

    /// Additive bonus applied to honors course grade points
    #[serde(default = "default_honors_bonus")]
    pub honors_bonus_points: f64,

    /// Additive bonus applied to AP course grade points
    #[serde(default = "default_ap_bonus")]
    pub ap_bonus_points: f64,

    /// Multiplier factor combined with a transfer course's rigor rating
    #[serde(default = "default_rigor_adjustment")]
    pub rigor_adjustment: f64,
}

impl Default for InstitutionalSettings {
    fn default() -> Self {
        Self {
            include_transfer_in_gpa: default_include_transfer(),
            core_subjects_only: false,
            honors_bonus_points: default_honors_bonus(),
            ap_bonus_points: default_ap_bonus(),
            rigor_adjustment: default_rigor_adjustment(),
        }
    }
}
