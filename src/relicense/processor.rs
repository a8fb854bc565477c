/*!
# Batch Processor

Runs the header pipeline over every candidate file: extract the file's
header, score it against the source exemplar, and when the score clears
the threshold render the target exemplar's body in the file's own style
and splice it in. Files are processed one at a time, each to completion.
*/

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::collector::{collect_candidates, ensure_directory};
use super::config::RelicenseConfig;
use super::filter::PreFilter;
use crate::core::fs_utils::{read_text_file, trim_trailing_whitespace, write_text_file};
use crate::core::{ExemplarRole, LicenseSwapError, Result};
use crate::header::{extract_header, format_header, replace_header, Header};
use crate::similarity::similarity;

/// Headers of the "old" and "new" exemplar files
#[derive(Debug, Clone)]
pub struct Exemplars {
    pub source: Header,
    pub target: Header,
}

impl Exemplars {
    /// Read both exemplar files and extract their headers
    pub fn load(source_path: &Path, target_path: &Path) -> Result<Self> {
        let source_text = read_text_file(source_path)?;
        let target_text = read_text_file(target_path)?;

        let source = extract_header(&source_text).ok_or_else(|| {
            LicenseSwapError::MissingExemplarHeader {
                role: ExemplarRole::Source,
                path: source_path.to_path_buf(),
            }
        })?;
        let target = extract_header(&target_text).ok_or_else(|| {
            LicenseSwapError::MissingExemplarHeader {
                role: ExemplarRole::Target,
                path: target_path.to_path_buf(),
            }
        })?;

        Ok(Self { source, target })
    }
}

/// Decision for a single file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Pre-filter marker not present
    MarkerAbsent,
    /// No leading comment header
    NoHeader,
    /// Header not similar enough to the source exemplar
    BelowThreshold { score: f64 },
    /// Header matched but the file already carries the new header
    AlreadyCurrent { score: f64 },
    /// Header replaced; `text` is the new file content
    Rewritten { score: f64, text: String },
}

/// Receives per-file events while a run is in progress
pub trait RunObserver {
    fn file_updated(&mut self, _path: &Path, _dry_run: bool) {}
}

/// Observer that ignores every event
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// Counters of a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub scanned: usize,
    pub changed: usize,
    pub updated: Vec<PathBuf>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done. Scanned={}, Changed={}", self.scanned, self.changed)
    }
}

pub struct Relicenser {
    config: RelicenseConfig,
    exemplars: Exemplars,
    filter: PreFilter,
}

impl Relicenser {
    pub fn new(config: RelicenseConfig, exemplars: Exemplars) -> Self {
        let filter = PreFilter::new(config.marker.clone());
        Self {
            config,
            exemplars,
            filter,
        }
    }

    /// Decide what happens to a buffer, without touching the file system
    pub fn process_text(&self, text: &str) -> FileOutcome {
        if !self.filter.accepts(text) {
            return FileOutcome::MarkerAbsent;
        }

        let header = match extract_header(text) {
            Some(header) => header,
            None => return FileOutcome::NoHeader,
        };

        let score = similarity(&header.body, &self.exemplars.source.body);
        if score < self.config.threshold {
            return FileOutcome::BelowThreshold { score };
        }

        let new_header = format_header(&self.exemplars.target.body, header.style);
        let mut rewritten = replace_header(text, &new_header);
        if self.config.trim_trailing_whitespace {
            rewritten = trim_trailing_whitespace(&rewritten);
        }
        if rewritten == text {
            return FileOutcome::AlreadyCurrent { score };
        }

        FileOutcome::Rewritten {
            score,
            text: rewritten,
        }
    }

    /// Process one file. Returns `true` when it was (or would be) changed.
    pub fn process_file(&self, path: &Path) -> Result<bool> {
        let text = read_text_file(path)?;

        match self.process_text(&text) {
            FileOutcome::MarkerAbsent => {
                debug!("Skipping {}: marker not found", path.display());
                Ok(false)
            }
            FileOutcome::NoHeader => {
                debug!("Skipping {}: no leading comment header", path.display());
                Ok(false)
            }
            FileOutcome::BelowThreshold { score } => {
                debug!(
                    "Skipping {}: similarity {:.3} below threshold {:.3}",
                    path.display(),
                    score,
                    self.config.threshold
                );
                Ok(false)
            }
            FileOutcome::AlreadyCurrent { score } => {
                debug!(
                    "Skipping {}: header already up to date (similarity {:.3})",
                    path.display(),
                    score
                );
                Ok(false)
            }
            FileOutcome::Rewritten { score, text } => {
                debug!("Rewriting {} (similarity {:.3})", path.display(), score);
                if !self.config.dry_run {
                    write_text_file(path, &text)?;
                }
                Ok(true)
            }
        }
    }

    /// Process every candidate under `dir`
    pub fn run(&self, dir: &Path, observer: &mut dyn RunObserver) -> Result<RunSummary> {
        ensure_directory(dir)?;
        let candidates = collect_candidates(dir, self.config.recursive, &self.config.extensions)?;
        info!(
            "Scanning {} candidate file(s) in {} (threshold {:.2})",
            candidates.len(),
            dir.display(),
            self.config.threshold
        );

        let mut summary = RunSummary::default();
        for path in candidates {
            summary.scanned += 1;
            if self.process_file(&path)? {
                summary.changed += 1;
                observer.file_updated(&path, self.config.dry_run);
                summary.updated.push(path);
            }
        }

        info!("{}", summary);
        Ok(summary)
    }
}
