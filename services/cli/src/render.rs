use contact_triage::triage::{RankedContact, RejectedRow, ScoreBreakdown, TriageRun};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 10 + 12 + 10 + 12 + 14 + 12 + 10 + 12 + 11;

pub(crate) fn write_table<W: Write>(
    out: &mut W,
    ranked: &[RankedContact],
    explain: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:<12}{:<10}{:<12}{:<14}{:<12}{:<10}{:<12}SUGGESTION",
        "RANK", "ID", "IFF", "RANGE(km)", "CLOSING(m/s)", "ALT(m)", "RCS(m^2)", "SCORE"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for row in ranked {
        let contact = &row.contact;
        writeln!(
            out,
            "{:<10}{:<12}{:<10}{:<12.1}{:<14.0}{:<12.0}{:<10.2}{:<12.1}{}",
            row.rank,
            contact.id,
            contact.identity.label(),
            contact.range_km,
            contact.closing_mps,
            contact.altitude_m,
            contact.rcs_m2,
            row.score,
            row.recommendation.label()
        )?;

        if explain {
            let terms = &row.breakdown;
            writeln!(
                out,
                "{:<10}range {:.1} | closing {:.1} | rcs {:.1} | altitude {:.1} | iff {:.1}",
                "", terms.range, terms.closing, terms.rcs, terms.altitude, terms.identity
            )?;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct RankingView<'a> {
    source: String,
    header_skipped: bool,
    contacts: Vec<RankedRowView<'a>>,
    rejected: &'a [RejectedRow],
}

#[derive(Debug, Serialize)]
struct RankedRowView<'a> {
    rank: usize,
    id: &'a str,
    identity: &'static str,
    range_km: f64,
    closing_mps: f64,
    altitude_m: f64,
    rcs_m2: f64,
    score: f64,
    recommendation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
}

impl<'a> RankedRowView<'a> {
    fn new(row: &'a RankedContact, explain: bool) -> Self {
        Self {
            rank: row.rank,
            id: &row.contact.id,
            identity: row.contact.identity.label(),
            range_km: row.contact.range_km,
            closing_mps: row.contact.closing_mps,
            altitude_m: row.contact.altitude_m,
            rcs_m2: row.contact.rcs_m2,
            score: row.score,
            recommendation: row.recommendation.label(),
            breakdown: explain.then_some(row.breakdown),
        }
    }
}

pub(crate) fn write_json<W: Write>(
    out: &mut W,
    source: &Path,
    run: &TriageRun,
    explain: bool,
) -> Result<(), serde_json::Error> {
    let view = RankingView {
        source: source.display().to_string(),
        header_skipped: run.header_skipped,
        contacts: run
            .ranked
            .iter()
            .map(|row| RankedRowView::new(row, explain))
            .collect(),
        rejected: &run.rejected,
    };

    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out).map_err(serde_json::Error::io)
}
