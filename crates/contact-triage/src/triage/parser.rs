use super::domain::{
    Contact, Identity, DEFAULT_ALTITUDE_M, DEFAULT_CLOSING_MPS, DEFAULT_RANGE_KM, DEFAULT_RCS_M2,
};
use serde::Serialize;
use std::io::BufRead;
use tracing::{debug, warn};

/// Minimum column count: id, iff, range_km, closing_mps, altitude_m, rcs_m2.
pub const FIELD_COUNT: usize = 6;

const RANGE_COLUMN: &str = "range_km";
const CLOSING_COLUMN: &str = "closing_mps";

/// Why a row was dropped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    #[error("expected at least 6 fields, found {found}")]
    TooFewFields { found: usize },
    #[error("unrecognised IFF token '{token}'")]
    UnknownIdentity { token: String },
    #[error("contact id is empty")]
    EmptyId,
}

/// Row dropped during ingestion, kept for operator diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    /// 1-based physical line number in the source.
    pub line: usize,
    pub raw: String,
    pub reason: RejectReason,
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Blank,
    Comment,
    Header,
    Contact(Contact),
    Rejected(RejectReason),
}

/// Result of ingesting a whole source: accepted contacts in input order plus rejections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub contacts: Vec<Contact>,
    pub rejected: Vec<RejectedRow>,
    pub header_skipped: bool,
}

/// Line-at-a-time contact parser.
///
/// Header detection is a heuristic applied to the first line that is neither blank nor a
/// comment: if it has at least six fields and either the IFF column does not parse or the
/// range/closing columns carry their literal column names, the line is treated as a header.
/// The check runs once. A genuine data row in that position with a bad IFF token is
/// therefore swallowed as a header instead of being reported as rejected.
#[derive(Debug, Clone)]
pub struct RecordParser {
    header_pending: bool,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser {
    pub fn new() -> Self {
        Self {
            header_pending: true,
        }
    }

    pub fn parse_line(&mut self, raw: &str) -> ParsedLine {
        let line = raw.trim();
        if line.is_empty() {
            return ParsedLine::Blank;
        }
        if line.starts_with('#') {
            return ParsedLine::Comment;
        }

        let fields = split_fields(line);

        if std::mem::take(&mut self.header_pending) && looks_like_header(&fields) {
            return ParsedLine::Header;
        }

        if fields.len() < FIELD_COUNT {
            return ParsedLine::Rejected(RejectReason::TooFewFields {
                found: fields.len(),
            });
        }

        let Some(identity) = Identity::parse(&fields[1]) else {
            return ParsedLine::Rejected(RejectReason::UnknownIdentity {
                token: fields[1].clone(),
            });
        };

        if fields[0].is_empty() {
            return ParsedLine::Rejected(RejectReason::EmptyId);
        }

        ParsedLine::Contact(Contact {
            id: fields[0].clone(),
            identity,
            range_km: parse_number(&fields[2], DEFAULT_RANGE_KM),
            closing_mps: parse_number(&fields[3], DEFAULT_CLOSING_MPS),
            altitude_m: parse_number(&fields[4], DEFAULT_ALTITUDE_M),
            rcs_m2: parse_number(&fields[5], DEFAULT_RCS_M2),
        })
    }
}

/// Reads every line from `reader`, absorbing row- and field-level problems.
///
/// Only I/O failures of the reader itself are returned as errors. Bytes that are not valid
/// UTF-8 are replaced rather than failing the read.
pub fn parse_records<R: BufRead>(mut reader: R) -> Result<ParseReport, std::io::Error> {
    let mut parser = RecordParser::new();
    let mut report = ParseReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let raw = String::from_utf8_lossy(&buf);

        match parser.parse_line(&raw) {
            ParsedLine::Blank | ParsedLine::Comment => {}
            ParsedLine::Header => {
                debug!(line = line_no, "skipping header row");
                report.header_skipped = true;
            }
            ParsedLine::Contact(contact) => report.contacts.push(contact),
            ParsedLine::Rejected(reason) => {
                let raw = raw.trim().to_string();
                warn!(line = line_no, %reason, row = %raw, "skipping malformed contact row");
                report.rejected.push(RejectedRow {
                    line: line_no,
                    raw,
                    reason,
                });
            }
        }
    }

    Ok(report)
}

/// Splits on every comma. Quotes carry no meaning and stay in the field text.
fn split_fields(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());
    let mut record = csv::StringRecord::new();

    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(|field| field.trim().to_string()).collect(),
        Ok(false) | Err(_) => Vec::new(),
    }
}

fn looks_like_header(fields: &[String]) -> bool {
    fields.len() >= FIELD_COUNT
        && (Identity::parse(&fields[1]).is_none()
            || fields[2] == RANGE_COLUMN
            || fields[3] == CLOSING_COLUMN)
}

fn parse_number(field: &str, default: f64) -> f64 {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}
