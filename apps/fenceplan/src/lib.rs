//! fenceplan core library.
//!
//! This crate exposes programmatic APIs for classifying the lines of a script
//! and rendering a grouped "fence plan" report of its declarations and entry
//! points. It matches lines lexically and never parses the scanned language.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `classify`: Rule table and the per-line classifier.
//! - `source`: Target expansion and the permissive single read.
//! - `report`: Grouping classified lines into a report.
//! - `output`: Human/JSON printers.
//! - `models`: Data models for lines, matches, and reports.
//! - `error`: Fatal error type.
//! - `utils`: Supporting helpers.
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod source;
pub mod utils;

use crate::classify::Rule;
use crate::config::Effective;
use crate::error::FenceError;
use crate::models::Report;

/// Read every effective target and build one report per file.
///
/// All reads complete before any report exists, so a missing input aborts
/// the run without partial output.
pub fn run_scan(eff: &Effective, rules: &[Rule]) -> Result<Vec<Report>, FenceError> {
    let files = source::read_targets(&eff.targets, &eff.repo_root)?;
    Ok(files
        .iter()
        .map(|f| report::build_report(f, rules, eff.width))
        .collect())
}
