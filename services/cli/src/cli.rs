use crate::render;
use clap::Parser;
use contact_triage::config::{AppConfig, OutputFormat};
use contact_triage::error::AppError;
use contact_triage::telemetry;
use contact_triage::triage::{ContactImporter, TriageConfig, TriageEngine};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "contact-triage",
    about = "Rank airborne contacts by risk score and recommend an engagement posture",
    version
)]
struct Cli {
    /// Contact CSV to ingest (defaults to TRIAGE_INPUT, then data/contacts.csv)
    input: Option<PathBuf>,
    /// Output format for the ranking: table or json
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
    /// Override the configured log level/filter
    #[arg(long)]
    log_level: Option<String>,
    /// Include the per-term score breakdown for every contact
    #[arg(long)]
    explain: bool,
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse::<OutputFormat>().map_err(|err| err.to_string())
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(log_level) = cli.log_level {
        config.telemetry.log_level = log_level;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    telemetry::init(&config.telemetry)?;

    let path = cli
        .input
        .unwrap_or_else(|| config.input.default_path.clone());
    info!(path = %path.display(), format = ?config.output.format, "ranking contacts");

    let engine = TriageEngine::new(TriageConfig::default());
    let run = ContactImporter::from_path(&path, &engine).map_err(|err| {
        error!(path = %path.display(), %err, "contact triage aborted");
        AppError::from(err)
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output.format {
        OutputFormat::Table => render::write_table(&mut out, &run.ranked, cli.explain)?,
        OutputFormat::Json => render::write_json(&mut out, &path, &run, cli.explain)?,
    }
    out.flush()?;

    Ok(())
}
