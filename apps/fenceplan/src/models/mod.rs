//! Shared data models for classification results and reports.

pub mod source;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use source::{SourceFile, SourceLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Fixed set of line categories. Variant order is the report display order.
pub enum Category {
    Declaration,
    FunctionDefinition,
    EventListener,
    LifecycleMarker,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Declaration,
        Category::FunctionDefinition,
        Category::EventListener,
        Category::LifecycleMarker,
    ];

    /// Section heading printed above this category's matches.
    pub fn title(self) -> &'static str {
        match self {
            Category::Declaration => "Top-level declarations (const/let/var ... =)",
            Category::FunctionDefinition => "Function definitions",
            Category::EventListener => "Event listeners / DOMContentLoaded",
            Category::LifecycleMarker => "Other helpful markers (init/boot/render)",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Declaration => "declaration",
            Category::FunctionDefinition => "function-definition",
            Category::EventListener => "event-listener",
            Category::LifecycleMarker => "lifecycle-marker",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One line tagged with one category.
pub struct Match {
    pub category: Category,
    pub line_number: usize,
    pub snippet: String,
}

#[derive(Debug, Clone)]
/// Per-file classification result consumed once by the printers.
pub struct Report {
    /// Resolved absolute path of the scanned file.
    pub file_path: PathBuf,
    /// Path shown in the title line (relative to the repository root when possible).
    pub display_path: String,
    pub total_lines: usize,
    /// Always holds every category, possibly with an empty sequence.
    pub sections: BTreeMap<Category, Vec<Match>>,
}

impl Report {
    pub fn new(file_path: PathBuf, display_path: String, total_lines: usize) -> Self {
        let sections = Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        Report {
            file_path,
            display_path,
            total_lines,
            sections,
        }
    }

    /// Append a match to its category. Callers feed lines top to bottom.
    pub fn push(&mut self, m: Match) {
        self.sections.entry(m.category).or_default().push(m);
    }

    pub fn matches(&self, category: Category) -> &[Match] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_has_every_category() {
        let r = Report::new(PathBuf::from("/x/app.js"), "app.js".into(), 0);
        assert_eq!(r.sections.len(), 4);
        for c in Category::ALL {
            assert!(r.matches(c).is_empty());
        }
    }

    #[test]
    fn category_order_is_display_order() {
        let mut sorted = Category::ALL.to_vec();
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, Category::ALL.to_vec());
    }
}
