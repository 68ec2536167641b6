//! Output rendering for scan reports.
//!
//! Supports `human` (default) and `json` outputs. Both show at most `limit`
//! matches per section; the JSON form also reports the full per-section total.
//! Report text goes to stdout uncolored so repeated runs are byte-identical.

use crate::config::OutputMode;
use crate::models::{Category, Report};
use serde_json::json;
use serde_json::Value as JsonVal;

pub const TOOL_TITLE: &str = "OpenClaw Fence Plan";

const NONE_PLACEHOLDER: &str = "  (none)";

/// Print every report in the requested format.
pub fn print_reports(reports: &[Report], output: OutputMode, limit: usize) {
    match output {
        OutputMode::Json => println!("{:#}", compose_json(reports, limit)),
        OutputMode::Human => {
            let rendered: Vec<String> = reports.iter().map(|r| render_human(r, limit)).collect();
            print!("{}", rendered.join("\n"));
        }
    }
}

/// Render one report as plain text, every line newline-terminated.
pub fn render_human(report: &Report, limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", TOOL_TITLE, report.display_path));
    out.push_str(&format!("File: {}\n", report.file_path.display()));
    out.push_str(&format!("Total lines: {}\n", report.total_lines));
    for cat in Category::ALL {
        render_section(&mut out, report, cat, limit);
    }
    out
}

fn render_section(out: &mut String, report: &Report, cat: Category, limit: usize) {
    out.push('\n');
    out.push_str(cat.title());
    out.push('\n');
    let matches = report.matches(cat);
    if matches.is_empty() {
        out.push_str(NONE_PLACEHOLDER);
        out.push('\n');
        return;
    }
    for m in matches.iter().take(limit) {
        out.push_str(&format!("  L{:>5}  {}\n", m.line_number, m.snippet));
    }
}

/// Compose the JSON object for one report (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report, limit: usize) -> JsonVal {
    let sections: Vec<_> = Category::ALL
        .iter()
        .map(|cat| {
            let matches = report.matches(*cat);
            let shown: Vec<_> = matches
                .iter()
                .take(limit)
                .map(|m| json!({"line": m.line_number, "snippet": m.snippet}))
                .collect();
            json!({
                "category": cat.key(),
                "title": cat.title(),
                "total": matches.len(),
                "shown": shown.len(),
                "matches": shown,
            })
        })
        .collect();
    json!({
        "file": report.file_path.to_string_lossy(),
        "display": report.display_path,
        "total_lines": report.total_lines,
        "sections": sections,
    })
}

/// Single report → its object; several → `{"reports": [...]}`.
pub fn compose_json(reports: &[Report], limit: usize) -> JsonVal {
    match reports {
        [one] => compose_report_json(one, limit),
        many => json!({
            "reports": many.iter().map(|r| compose_report_json(r, limit)).collect::<Vec<_>>()
        }),
    }
}
