//! Аргументы командной строки license-swap

use clap::Parser;
use std::path::PathBuf;

use crate::core::Result;
use crate::relicense::RelicenseConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "license-swap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace license headers in source files using exemplar headers"
)]
pub struct CliArgs {
    /// Directory with source files
    #[arg(long)]
    pub dir: PathBuf,

    /// File with the OLD license header
    #[arg(long = "source-exemplar")]
    pub source_exemplar: PathBuf,

    /// File with the NEW license header
    #[arg(long = "target-exemplar")]
    pub target_exemplar: PathBuf,

    /// Recurse into subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Similarity threshold [0..1] (default: 0.75)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// TOML file with default settings; explicit flags win
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File extensions to process, comma separated (default: c)
    #[arg(long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Only score files containing this literal text
    #[arg(long)]
    pub marker: Option<String>,

    /// Strip trailing spaces and tabs from rewritten files
    #[arg(long)]
    pub trim_trailing_whitespace: bool,

    /// Report files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Собирает конфигурацию запуска: сначала файл, затем флаги
    pub fn to_config(&self) -> Result<RelicenseConfig> {
        let mut config = match &self.config {
            Some(path) => RelicenseConfig::load_from_file(path)?,
            None => RelicenseConfig::default(),
        };

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if self.recursive {
            config.recursive = true;
        }
        let extensions: Vec<String> = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        if !extensions.is_empty() {
            config.extensions = extensions;
        }
        if self.marker.is_some() {
            config.marker = self.marker.clone();
        }
        if self.trim_trailing_whitespace {
            config.trim_trailing_whitespace = true;
        }
        if self.dry_run {
            config.dry_run = true;
        }

        Ok(config)
    }
}
