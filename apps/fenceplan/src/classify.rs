//! Line classifier: an ordered table of named rules applied to one line.
//!
//! Every rule receives the whole `SourceLine` and is evaluated independently,
//! so a line can land in several categories. Declarations and function
//! definitions are anchored at the start of the line; listener detection is a
//! plain substring search and lifecycle markers need a whole-word keyword.
//! There is no awareness of comments or string literals.

use crate::models::{Category, Match, SourceLine};
use crate::utils::truncate_chars;
use regex::Regex;
use std::sync::LazyLock;

/// Default snippet cap, in characters, for capped rules.
pub const DEFAULT_WIDTH: usize = 120;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(const|let|var)\s+[A-Za-z_$][\w$]*\s*=").expect("declaration regex")
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^function\s+([A-Za-z_$][\w$]*)\s*\(").expect("function regex")
});

static LIFECYCLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(init|boot|render)\b").expect("lifecycle regex"));

const LISTENER_CALL: &str = "addEventListener(";
const LISTENER_EVENT: &str = "DOMContentLoaded";

#[derive(Clone, Copy)]
/// A named predicate over one source line.
///
/// `capture` sees both the raw and trimmed text and returns the display text
/// when the rule fires. When `capped` is
/// set the classifier truncates that text to the configured width.
pub struct Rule {
    pub category: Category,
    pub name: &'static str,
    pub capped: bool,
    pub capture: fn(&SourceLine) -> Option<String>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("category", &self.category)
            .field("name", &self.name)
            .field("capped", &self.capped)
            .finish()
    }
}

/// Built-in rules in display order.
pub static DEFAULT_RULES: [Rule; 4] = [
    Rule {
        category: Category::Declaration,
        name: "top-level-declaration",
        capped: false,
        capture: capture_declaration,
    },
    Rule {
        category: Category::FunctionDefinition,
        name: "function-definition",
        capped: false,
        capture: capture_function,
    },
    Rule {
        category: Category::EventListener,
        name: "event-listener",
        capped: true,
        capture: capture_listener,
    },
    Rule {
        category: Category::LifecycleMarker,
        name: "lifecycle-marker",
        capped: true,
        capture: capture_lifecycle,
    },
];

/// `const|let|var <ident> =` at the start of the line; captures the whole line.
pub fn capture_declaration(line: &SourceLine) -> Option<String> {
    let trimmed = line.trimmed.as_str();
    DECLARATION
        .is_match(trimmed)
        .then(|| trimmed.to_string())
}

/// `function <ident>(` at the start of the line; captures a normalized label.
pub fn capture_function(line: &SourceLine) -> Option<String> {
    let caps = FUNCTION.captures(&line.trimmed)?;
    Some(format!("function {}(", &caps[1]))
}

/// Listener registration call or the DOM ready event name, anywhere in the line.
pub fn capture_listener(line: &SourceLine) -> Option<String> {
    let trimmed = line.trimmed.as_str();
    (trimmed.contains(LISTENER_CALL) || trimmed.contains(LISTENER_EVENT))
        .then(|| trimmed.to_string())
}

/// Whole-word `init`, `boot` or `render`, case-insensitive.
pub fn capture_lifecycle(line: &SourceLine) -> Option<String> {
    let trimmed = line.trimmed.as_str();
    LIFECYCLE
        .is_match(trimmed)
        .then(|| trimmed.to_string())
}

/// Classify one line against `rules`, in table order.
///
/// Never fails; an empty or unremarkable line yields an empty vector.
pub fn classify(line: &SourceLine, rules: &[Rule], width: usize) -> Vec<Match> {
    rules
        .iter()
        .filter_map(|rule| {
            let text = (rule.capture)(line)?;
            let snippet = if rule.capped {
                truncate_chars(&text, width)
            } else {
                text
            };
            Some(Match {
                category: rule.category,
                line_number: line.index,
                snippet,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Match> {
        classify(&SourceLine::new(1, text), &DEFAULT_RULES, DEFAULT_WIDTH)
    }

    fn categories(text: &str) -> Vec<Category> {
        run(text).into_iter().map(|m| m.category).collect()
    }

    #[test]
    fn declaration_captures_full_trimmed_line() {
        let m = run("  const x = 5;");
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].category, Category::Declaration);
        assert_eq!(m[0].snippet, "const x = 5;");
    }

    #[test]
    fn declaration_accepts_dollar_and_underscore_identifiers() {
        assert_eq!(categories("let $el=qs('#a');"), vec![Category::Declaration]);
        assert_eq!(categories("var _tmp = 0"), vec![Category::Declaration]);
    }

    #[test]
    fn declaration_requires_assignment_and_anchor() {
        assert!(categories("let pending;").is_empty());
        assert!(categories("export const x = 1;").is_empty());
        assert!(categories("const { a, b } = obj;").is_empty());
        assert!(categories("constant = 1").is_empty());
    }

    #[test]
    fn function_definition_snippet_is_synthesized() {
        let m = run("function foo(a, b) {");
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].category, Category::FunctionDefinition);
        assert_eq!(m[0].snippet, "function foo(");
    }

    #[test]
    fn function_definition_normalizes_spacing() {
        let m = run("function   bar  (x) {}");
        assert_eq!(m[0].snippet, "function bar(");
        assert!(categories("async function baz() {").is_empty());
        assert!(categories("const f = function () {};") == vec![Category::Declaration]);
    }

    #[test]
    fn listener_matches_call_substring() {
        let m = run("el.addEventListener('click', onClick);");
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].category, Category::EventListener);
        assert_eq!(m[0].snippet, "el.addEventListener('click', onClick);");
    }

    #[test]
    fn dom_ready_with_boot_is_listener_and_marker() {
        assert_eq!(
            categories("window.addEventListener('DOMContentLoaded', boot);"),
            vec![Category::EventListener, Category::LifecycleMarker]
        );
    }

    #[test]
    fn listener_is_unaware_of_comments() {
        assert_eq!(
            categories("// fires on DOMContentLoaded"),
            vec![Category::EventListener]
        );
    }

    #[test]
    fn lifecycle_requires_whole_word() {
        assert!(categories("// reinitialization logic").is_empty());
        assert!(categories("const rebooted = true;") == vec![Category::Declaration]);
        assert!(categories("renderer.draw();").is_empty());
    }

    #[test]
    fn lifecycle_is_case_insensitive() {
        assert_eq!(categories("// INIT phase"), vec![Category::LifecycleMarker]);
        assert_eq!(categories("Render();"), vec![Category::LifecycleMarker]);
    }

    #[test]
    fn line_can_match_three_categories() {
        assert_eq!(
            categories("function init() { document.addEventListener('x', f); }"),
            vec![
                Category::FunctionDefinition,
                Category::EventListener,
                Category::LifecycleMarker
            ]
        );
    }

    #[test]
    fn capped_rules_truncate_by_characters() {
        let long = format!("render('{}');", "é".repeat(300));
        let m = run(&long);
        assert_eq!(m[0].category, Category::LifecycleMarker);
        assert_eq!(m[0].snippet.chars().count(), DEFAULT_WIDTH);
    }

    #[test]
    fn declarations_are_not_capped() {
        let long = format!("const big = '{}';", "x".repeat(500));
        let m = run(&long);
        assert_eq!(m[0].snippet, long);
    }

    #[test]
    fn empty_and_blank_lines_yield_nothing() {
        assert!(run("").is_empty());
        assert!(run("   \t ").is_empty());
    }

    fn capture_indented(line: &SourceLine) -> Option<String> {
        line.text
            .starts_with(char::is_whitespace)
            .then(|| line.text.clone())
    }

    #[test]
    fn custom_rule_can_inspect_raw_text() {
        let rules = [Rule {
            category: Category::Declaration,
            name: "indented",
            capped: true,
            capture: capture_indented,
        }];
        let m = classify(&SourceLine::new(3, "    let inner = 1;"), &rules, 6);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].snippet, "    le");
        assert!(classify(&SourceLine::new(4, "let outer = 1;"), &rules, 6).is_empty());
    }

    #[test]
    fn alternative_rule_table_is_honoured() {
        let only_functions = [DEFAULT_RULES[1]];
        let line = SourceLine::new(7, "function boot() {");
        let m = classify(&line, &only_functions, DEFAULT_WIDTH);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].line_number, 7);
        assert_eq!(m[0].category, Category::FunctionDefinition);
    }
}
