//! Report builder: classify every line of a file and group matches.
//!
//! Lines are classified independently, so the work fans out over rayon.
//! The indexed `collect` keeps results in line order, which is what makes
//! each section strictly increasing by line number.

use crate::classify::{classify, Rule};
use crate::models::{Report, SourceFile};
use rayon::prelude::*;
use tracing::debug;

/// Build the grouped report for one decoded file.
pub fn build_report(file: &SourceFile, rules: &[Rule], width: usize) -> Report {
    let per_line: Vec<_> = file
        .lines
        .par_iter()
        .map(|line| classify(line, rules, width))
        .collect();

    let mut report = Report::new(file.path.clone(), file.display.clone(), file.lines.len());
    for m in per_line.into_iter().flatten() {
        report.push(m);
    }
    for (cat, matches) in &report.sections {
        debug!(category = cat.key(), matches = matches.len(), "classified");
    }
    report
}
