//! Configuration discovery and effective settings resolution.
//!
//! fenceplan reads `fenceplan.toml|yaml|yml` from the repository root (the
//! closest ancestor holding such a file or a `.git` directory) and merges it
//! with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `targets`: `app/app.js` (relative to the repository root)
//! - `output`: `human`
//! - `limit`: 200 matches displayed per section
//! - `width`: 120 characters per capped snippet
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::classify::DEFAULT_WIDTH;
use crate::error::FenceError;
use crate::source::is_glob;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_TARGET: &str = "app/app.js";
pub const DEFAULT_LIMIT: usize = 200;

const CONFIG_NAMES: [&str; 3] = ["fenceplan.toml", "fenceplan.yaml", "fenceplan.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `fenceplan.toml|yaml`.
pub struct FenceConfig {
    pub targets: Option<Vec<String>>,
    pub output: Option<String>,
    pub limit: Option<usize>,
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn parse(s: &str) -> Result<Self, FenceError> {
        match s {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            other => Err(FenceError::InvalidOutput {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    /// Paths or glob patterns, already anchored where needed.
    pub targets: Vec<String>,
    pub output: OutputMode,
    pub limit: usize,
    pub width: usize,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `fenceplan.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `FenceConfig` from the first config file present under `root`.
pub fn load_config(root: &Path) -> Result<Option<FenceConfig>, FenceError> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| FenceError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<FenceConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<FenceConfig>(&s).map_err(|e| e.to_string())
        };
        let cfg = parsed.map_err(|message| FenceError::ConfigParse {
            path: path.clone(),
            message,
        })?;
        debug!(config = %path.display(), "loaded config");
        return Ok(Some(cfg));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// CLI targets are kept as given (relative to the working directory); config
/// and default targets are anchored at the repository root.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_targets: &[String],
    cli_output: Option<&str>,
    cli_limit: Option<usize>,
    cli_width: Option<usize>,
) -> Result<Effective, FenceError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let targets = if !cli_targets.is_empty() {
        cli_targets.to_vec()
    } else {
        cfg.targets
            .unwrap_or_else(|| vec![DEFAULT_TARGET.to_string()])
            .iter()
            .map(|t| anchor(&repo_root, t))
            .collect()
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let output = OutputMode::parse(&output)?;

    let limit = cli_limit.or(cfg.limit).unwrap_or(DEFAULT_LIMIT);
    if limit == 0 {
        return Err(FenceError::InvalidLimit);
    }
    let width = cli_width.or(cfg.width).unwrap_or(DEFAULT_WIDTH);

    Ok(Effective {
        repo_root,
        config_found,
        targets,
        output,
        limit,
        width,
    })
}

/// Join a config/default target onto the root. When the target is a glob,
/// the root is escaped so its own `[`, `?` or `*` stay literal.
fn anchor(root: &Path, target: &str) -> String {
    if Path::new(target).is_absolute() {
        target.to_string()
    } else if is_glob(target) {
        let escaped = glob::Pattern::escape(&root.to_string_lossy());
        Path::new(&escaped).join(target).to_string_lossy().to_string()
    } else {
        root.join(target).to_string_lossy().to_string()
    }
}
