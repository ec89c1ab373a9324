mod config;
mod policy;
mod rules;

pub use config::{EngagementPolicy, TriageConfig, Weights};
pub use policy::{recommend, Recommendation};
pub use rules::{score, score_breakdown, ScoreBreakdown};

use super::domain::Contact;
use serde::Serialize;

/// Stateless evaluator that applies one immutable configuration to every contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriageEngine {
    config: TriageConfig,
}

impl TriageEngine {
    pub fn new(config: TriageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn evaluate(&self, contact: Contact) -> ScoredContact {
        let breakdown = score_breakdown(&contact, &self.config.weights);
        let score = breakdown.total();

        ScoredContact {
            contact,
            score,
            breakdown,
        }
    }

    /// Scores every contact and orders them by descending score. Equal scores keep their
    /// input order, and ranks are assigned by position starting at 1.
    pub fn rank(&self, contacts: Vec<Contact>) -> Vec<RankedContact> {
        let mut scored: Vec<ScoredContact> = contacts
            .into_iter()
            .map(|contact| self.evaluate(contact))
            .collect();

        // `sort_by` is stable, which keeps ties in input order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        scored
            .into_iter()
            .enumerate()
            .map(|(index, scored)| {
                let recommendation =
                    recommend(&scored.contact, scored.score, &self.config.policy);
                RankedContact {
                    rank: index + 1,
                    contact: scored.contact,
                    score: scored.score,
                    breakdown: scored.breakdown,
                    recommendation,
                }
            })
            .collect()
    }
}

/// A contact paired with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredContact {
    pub contact: Contact,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedContact {
    pub rank: usize,
    pub contact: Contact,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub recommendation: Recommendation,
}
