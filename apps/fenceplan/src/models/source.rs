//! Decoded source text split into numbered lines.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single line of the scanned file. `index` is 1-based.
pub struct SourceLine {
    pub index: usize,
    pub text: String,
    pub trimmed: String,
}

impl SourceLine {
    pub fn new(index: usize, text: &str) -> Self {
        SourceLine {
            index,
            text: text.to_string(),
            trimmed: text.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// A target file after the single read pass.
pub struct SourceFile {
    pub path: PathBuf,
    pub display: String,
    pub lines: Vec<SourceLine>,
}

impl SourceFile {
    /// Build from already-decoded text, splitting with [`split_lines`].
    pub fn from_text(path: PathBuf, display: String, text: &str) -> Self {
        let lines = split_lines(text)
            .into_iter()
            .enumerate()
            .map(|(i, l)| SourceLine::new(i + 1, l))
            .collect();
        SourceFile {
            path,
            display,
            lines,
        }
    }
}

/// Split on line terminators: `\r\n`, `\n`, `\r`, vertical tab, form feed,
/// the file/group/record separators, NEL, U+2028 and U+2029. A trailing
/// terminator does not open an extra empty line, and empty input has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_terminator(c) {
            continue;
        }
        out.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some((j, '\n')) = chars.peek().copied() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
