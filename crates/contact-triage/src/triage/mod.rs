//! Contact ingestion, risk scoring, ranking and engagement recommendations.

pub mod domain;
pub mod evaluation;
pub mod parser;

#[cfg(test)]
mod tests;

pub use domain::{Contact, Identity};
pub use evaluation::{
    recommend, score, score_breakdown, EngagementPolicy, RankedContact, Recommendation,
    ScoreBreakdown, ScoredContact, TriageConfig, TriageEngine, Weights,
};
pub use parser::{parse_records, ParseReport, ParsedLine, RecordParser, RejectReason, RejectedRow};

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open contact source '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read contact source: {0}")]
    Read(#[from] std::io::Error),
    #[error("no contacts loaded ({rejected} row(s) rejected)")]
    NoContacts { rejected: usize },
}

/// Outcome of a successful run: the ranking plus whatever was dropped on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageRun {
    pub ranked: Vec<RankedContact>,
    pub rejected: Vec<RejectedRow>,
    pub header_skipped: bool,
}

/// Drives parse, score, rank and recommend over a single batch of records.
pub struct ContactImporter;

impl ContactImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &TriageEngine,
    ) -> Result<TriageRun, IngestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_buf_reader(BufReader::new(file), engine)
    }

    pub fn from_reader<R: Read>(reader: R, engine: &TriageEngine) -> Result<TriageRun, IngestError> {
        Self::from_buf_reader(BufReader::new(reader), engine)
    }

    pub fn from_text(input: &str, engine: &TriageEngine) -> Result<TriageRun, IngestError> {
        Self::from_buf_reader(input.as_bytes(), engine)
    }

    fn from_buf_reader<R: BufRead>(
        reader: R,
        engine: &TriageEngine,
    ) -> Result<TriageRun, IngestError> {
        let report = parse_records(reader)?;
        info!(
            accepted = report.contacts.len(),
            rejected = report.rejected.len(),
            "contact ingestion complete"
        );

        if report.contacts.is_empty() {
            return Err(IngestError::NoContacts {
                rejected: report.rejected.len(),
            });
        }

        Ok(TriageRun {
            ranked: engine.rank(report.contacts),
            rejected: report.rejected,
            header_skipped: report.header_skipped,
        })
    }
}
