use serde::{Deserialize, Serialize};

/// Coefficients applied to each normalised signal when scoring a contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Multiplies `1/range_km`; closer contacts score higher.
    pub w_range_inv: f64,
    pub w_closing: f64,
    /// Multiplies the log-compressed radar cross-section.
    pub w_rcs: f64,
    pub w_iff_friend: f64,
    pub w_iff_unknown: f64,
    pub w_iff_foe: f64,
    pub w_alt_low: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            w_range_inv: 60.0,
            w_closing: 1.0,
            w_rcs: 1.0,
            w_iff_friend: -40.0,
            w_iff_unknown: 15.0,
            w_iff_foe: 30.0,
            w_alt_low: 0.004,
        }
    }
}

/// Fixed decision thresholds for engagement recommendations. Compared against raw
/// contact fields, never against normalised signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementPolicy {
    pub intercept_min_score: f64,
    pub intercept_max_range_km: f64,
    pub intercept_min_closing_mps: f64,
    pub elevated_min_score: f64,
    pub elevated_max_range_km: f64,
}

impl Default for EngagementPolicy {
    fn default() -> Self {
        Self {
            intercept_min_score: 120.0,
            intercept_max_range_km: 25.0,
            intercept_min_closing_mps: 100.0,
            elevated_min_score: 80.0,
            elevated_max_range_km: 50.0,
        }
    }
}

/// Immutable configuration for one triage run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    pub weights: Weights,
    pub policy: EngagementPolicy,
}
