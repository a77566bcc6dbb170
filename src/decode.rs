use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, warn};
use wistia_core::{payload, Record, RecordKind, Showable};

/// What came out of one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Vec<Record>>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub records: usize,
    pub failures: usize,
}

/// Read and decode a single payload file.
pub fn decode_file(path: &Path, kind: RecordKind) -> Result<Vec<Record>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    let records = payload::decode(kind, &value)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    for record in &records {
        match record {
            Record::Media(m) => debug!(path = %m.show_path(), assets = m.assets.len(), "decoded media"),
            Record::Project(p) => debug!(
                path = %p.show_path(),
                medias = p.medias.as_ref().map_or(0, Vec::len),
                "decoded project"
            ),
            Record::Account(a) => debug!(account_id = a.account_id, "decoded account"),
        }
    }

    Ok(records)
}

/// Decode every file in parallel. Outcomes come back in input order.
pub fn decode_files(paths: &[PathBuf], kind: RecordKind, show_progress: bool) -> Vec<FileOutcome> {
    let pb = if show_progress {
        let pb = ProgressBar::new(paths.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} decoding payloads") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<FileOutcome> = paths
        .par_iter()
        .map(|path| {
            let result = decode_file(path, kind);
            if let Err(e) = &result {
                warn!("{:#}", e);
            }
            pb.inc(1);
            FileOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect();

    pb.finish_and_clear();
    outcomes
}

pub fn summarize(outcomes: &[FileOutcome]) -> Summary {
    let mut summary = Summary {
        files: outcomes.len(),
        ..Summary::default()
    };
    for outcome in outcomes {
        match &outcome.result {
            Ok(records) if !records.is_empty() => summary.records += records.len(),
            _ => summary.failures += 1,
        }
    }
    summary
}
