mod config;
mod decode;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use wistia_core::{Record, RecordKind};

use crate::config::{Config, LogFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Account,
    Project,
    Media,
}

impl From<Kind> for RecordKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Account => RecordKind::Account,
            Kind::Project => RecordKind::Project,
            Kind::Media => RecordKind::Media,
        }
    }
}

#[derive(Parser)]
#[command(name = "wistia-rs", version, about = "Decode Wistia API payloads into typed records")]
struct Cli {
    /// JSON payload files (an object, a list of objects, or either wrapped in {"data": ...})
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Record type the payloads hold
    #[arg(short, long, value_enum, default_value_t = Kind::Media)]
    kind: Kind,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exit with an error if any file yields no records
    #[arg(long)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let t_total = std::time::Instant::now();

    let config = match config::find_config_path(cli.config.as_deref()) {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    init_logging(config.logging.format);

    let strict = cli.strict || config.output.strict;
    let pretty = cli.pretty || config.output.pretty;
    let kind = RecordKind::from(cli.kind);

    info!("Decoding {} file(s) as {}", cli.files.len(), kind);
    let outcomes = decode::decode_files(&cli.files, kind, !cli.no_progress);
    let summary = decode::summarize(&outcomes);

    for outcome in &outcomes {
        if matches!(&outcome.result, Ok(records) if records.is_empty()) {
            warn!("{} held no valid {} records", outcome.path.display(), kind);
        }
    }

    let records: Vec<&Record> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .flatten()
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = if pretty {
        serde_json::to_writer_pretty(&mut out, &records)
    } else {
        serde_json::to_writer(&mut out, &records)
    };
    written.context("Failed to write records")?;
    writeln!(out).context("Failed to write records")?;

    info!(
        "Done! {} files, {} records, {} failed ({:.2}s)",
        summary.files,
        summary.records,
        summary.failures,
        t_total.elapsed().as_secs_f64()
    );

    if strict && summary.failures > 0 {
        anyhow::bail!("{} of {} files could not be decoded", summary.failures, summary.files);
    }

    Ok(())
}
