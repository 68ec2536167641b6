//! Target resolution and the single read pass.
//!
//! Each target is read exactly once with `fs::read`; the handle is released
//! before decoding. Invalid UTF-8 is replaced with U+FFFD rather than
//! rejected, so files of mixed or unknown encoding can still be scanned.

use crate::error::FenceError;
use crate::models::SourceFile;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

pub(crate) fn is_glob(spec: &str) -> bool {
    spec.contains(['*', '?', '['])
}

/// Expand one target spec into concrete file paths.
///
/// Plain paths, and existing files whose names contain glob characters,
/// are returned untouched (existence is checked by the read); other glob
/// patterns expand to their matching files in sorted order.
pub fn expand_target(spec: &str) -> Result<Vec<PathBuf>, FenceError> {
    if !is_glob(spec) || Path::new(spec).exists() {
        return Ok(vec![PathBuf::from(spec)]);
    }
    let entries = glob::glob(spec).map_err(|source| FenceError::InvalidPattern {
        pattern: spec.to_string(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(pattern = spec, error = %e, "skipping unreadable glob entry");
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(FenceError::NoMatches {
            pattern: spec.to_string(),
        });
    }
    debug!(pattern = spec, files = paths.len(), "expanded glob");
    Ok(paths)
}

/// Decode bytes permissively: each invalid sequence becomes U+FFFD.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Title path: relative to `repo_root` when the file lives under it,
/// otherwise the absolute path.
pub fn display_path(abs: &Path, repo_root: &Path) -> String {
    match pathdiff::diff_paths(abs, repo_root) {
        Some(rel)
            if !rel.as_os_str().is_empty()
                && !rel.components().any(|c| matches!(c, Component::ParentDir)) =>
        {
            rel.to_string_lossy().to_string()
        }
        _ => abs.to_string_lossy().to_string(),
    }
}

/// Read one file into numbered lines.
pub fn read_source(path: &Path, repo_root: &Path) -> Result<SourceFile, FenceError> {
    let bytes = fs::read(path).map_err(|source| FenceError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_lossy(&bytes);
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let display = display_path(&abs, repo_root);
    let file = SourceFile::from_text(abs, display, &text);
    info!(
        file = %file.path.display(),
        bytes = bytes.len(),
        lines = file.lines.len(),
        "read source"
    );
    Ok(file)
}

/// Resolve and read every target, in order. Fails on the first missing
/// input so that nothing is printed for a partially readable set.
pub fn read_targets(targets: &[String], repo_root: &Path) -> Result<Vec<SourceFile>, FenceError> {
    let mut files = Vec::new();
    for spec in targets {
        for path in expand_target(spec)? {
            files.push(read_source(&path, repo_root)?);
        }
    }
    Ok(files)
}
