/*!
# Relicense Module

Batch orchestration: run configuration, candidate discovery, the optional
marker pre-filter and the per-file processor.
*/

pub mod collector;
pub mod config;
pub mod filter;
pub mod processor;

pub use collector::{collect_candidates, ensure_directory};
pub use config::{RelicenseConfig, DEFAULT_THRESHOLD};
pub use filter::PreFilter;
pub use processor::{Exemplars, FileOutcome, Relicenser, RunObserver, RunSummary, SilentObserver};
