//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fenceplan",
    version,
    about = "Fence plan: line-level map of a script's declarations and entry points",
    long_about = "fenceplan — scan a script line by line and list its top-level declarations, function definitions, event listeners, and init/boot/render markers.\n\nConfiguration precedence: CLI > fenceplan.toml > defaults.",
    after_help = "Examples:\n  fenceplan scan\n  fenceplan scan web/app.js --output json\n  fenceplan scan 'src/**/*.js' --limit 50\n  fenceplan rules",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current fenceplan version.")]
    Version,
    /// Scan files and print the grouped report
    #[command(
        about = "Scan files and print a fence plan",
        long_about = "Classify every line of each target and print matches grouped by category. Without targets, scans the configured targets or app/app.js under the repository root.",
        after_help = "Examples:\n  fenceplan scan\n  fenceplan scan app/app.js\n  fenceplan scan 'app/*.js' --output json"
    )]
    Scan {
        #[arg(help = "Files or glob patterns (default: config targets, else app/app.js)")]
        targets: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Maximum matches shown per section (default: 200)")]
        limit: Option<usize>,
        #[arg(long, help = "Snippet width in characters for capped sections (default: 120)")]
        width: Option<usize>,
    },
    /// List the built-in classification rules
    #[command(
        about = "List built-in rules",
        long_about = "Print each built-in rule with its category and report section title."
    )]
    Rules,
}
