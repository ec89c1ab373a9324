use super::super::domain::{Contact, Identity};
use super::config::EngagementPolicy;
use serde::{Deserialize, Serialize};

/// Engagement recommendation attached to every ranked contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    IgnoreFriend,
    Intercept,
    ElevatedMonitor,
    Monitor,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::IgnoreFriend => "IGNORE (FRIEND)",
            Self::Intercept => "INTERCEPT",
            Self::ElevatedMonitor => "ELEVATED MONITOR",
            Self::Monitor => "MONITOR",
        }
    }
}

/// First matching rule wins. Friendly identity overrides every other signal.
pub fn recommend(contact: &Contact, score: f64, policy: &EngagementPolicy) -> Recommendation {
    if contact.identity == Identity::Friend {
        return Recommendation::IgnoreFriend;
    }

    if score > policy.intercept_min_score
        && contact.range_km < policy.intercept_max_range_km
        && contact.closing_mps > policy.intercept_min_closing_mps
    {
        return Recommendation::Intercept;
    }

    if score > policy.elevated_min_score && contact.range_km < policy.elevated_max_range_km {
        return Recommendation::ElevatedMonitor;
    }

    Recommendation::Monitor
}
