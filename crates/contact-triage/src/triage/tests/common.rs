use crate::triage::domain::{Contact, Identity};
use crate::triage::evaluation::{TriageConfig, TriageEngine};

pub(super) fn contact(
    id: &str,
    identity: Identity,
    range_km: f64,
    closing_mps: f64,
    altitude_m: f64,
    rcs_m2: f64,
) -> Contact {
    Contact {
        id: id.to_string(),
        identity,
        range_km,
        closing_mps,
        altitude_m,
        rcs_m2,
    }
}

/// Inbound foe at medium range, used as the baseline for single-field variations.
pub(super) fn hostile(id: &str) -> Contact {
    contact(id, Identity::Foe, 10.0, 150.0, 1000.0, 5.0)
}

pub(super) fn engine() -> TriageEngine {
    TriageEngine::new(TriageConfig::default())
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
