use serde::{Deserialize, Serialize};

/// Range substituted when the reported range cannot be parsed. Large enough that the
/// range term contributes next to nothing.
pub const DEFAULT_RANGE_KM: f64 = 1e9;
pub const DEFAULT_CLOSING_MPS: f64 = 0.0;
pub const DEFAULT_ALTITUDE_M: f64 = 0.0;
pub const DEFAULT_RCS_M2: f64 = 1.0;

/// Identification friend-or-foe classification reported for a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    Friend,
    Foe,
    Unknown,
}

impl Identity {
    /// Parses an IFF token, ignoring case. Accepts the long names plus the
    /// `F`, `H`/`HOSTILE` and `U` shorthands.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "FRIEND" | "F" => Some(Self::Friend),
            "FOE" | "HOSTILE" | "H" => Some(Self::Foe),
            "UNKNOWN" | "U" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Friend => "FRIEND",
            Self::Foe => "FOE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A single sensor report that survived parsing.
///
/// Every numeric field holds a finite value; unparseable inputs are replaced with the
/// `DEFAULT_*` constants before a `Contact` is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub identity: Identity,
    pub range_km: f64,
    /// Positive when the contact is approaching.
    pub closing_mps: f64,
    pub altitude_m: f64,
    pub rcs_m2: f64,
}
