use super::super::domain::{Contact, Identity};
use super::config::Weights;
use serde::{Deserialize, Serialize};

/// Ranges at or below this are treated as point-blank to keep `1/range` bounded.
const MIN_RANGE_KM: f64 = 0.05;
const POINT_BLANK_INV_RANGE: f64 = 20.0;
const CLOSING_FULL_SCALE_MPS: f64 = 400.0;
const MIN_RCS_M2: f64 = 0.01;
const ALTITUDE_CEILING_M: f64 = 20_000.0;

/// Weighted contribution of each input dimension to a contact's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub range: f64,
    pub closing: f64,
    pub rcs: f64,
    pub altitude: f64,
    pub identity: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.range + self.closing + self.rcs + self.altitude + self.identity
    }
}

pub fn score_breakdown(contact: &Contact, weights: &Weights) -> ScoreBreakdown {
    let inv_range = if contact.range_km > MIN_RANGE_KM {
        1.0 / contact.range_km
    } else {
        POINT_BLANK_INV_RANGE
    };

    // 0..100 across 0..400 m/s; receding contacts contribute nothing.
    let closing_norm = (contact.closing_mps / CLOSING_FULL_SCALE_MPS).clamp(0.0, 1.0) * 100.0;

    // log10 maps 0.01..100 m^2 onto -2..2, shifted and stretched onto 0..100.
    let rcs_norm = (contact.rcs_m2.max(MIN_RCS_M2).log10() + 2.0) * 25.0;

    let altitude_norm =
        (ALTITUDE_CEILING_M - contact.altitude_m.clamp(0.0, ALTITUDE_CEILING_M)) / 200.0;

    let identity = match contact.identity {
        Identity::Friend => weights.w_iff_friend,
        Identity::Unknown => weights.w_iff_unknown,
        Identity::Foe => weights.w_iff_foe,
    };

    ScoreBreakdown {
        range: weights.w_range_inv * inv_range,
        closing: weights.w_closing * closing_norm,
        rcs: weights.w_rcs * rcs_norm,
        altitude: weights.w_alt_low * altitude_norm,
        identity,
    }
}

/// Unbounded risk score; only meaningful relative to other contacts scored with the
/// same weights.
pub fn score(contact: &Contact, weights: &Weights) -> f64 {
    score_breakdown(contact, weights).total()
}
