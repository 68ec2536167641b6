//! fenceplan CLI binary entry point.
//! Resolves configuration, runs the scan and prints reports.

use clap::Parser;
use fenceplan::classify::DEFAULT_RULES;
use fenceplan::cli::{Cli, Commands};
use fenceplan::config;
use fenceplan::output::print_reports;
use fenceplan::utils::{error_prefix, note_prefix};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Rules => {
            for rule in DEFAULT_RULES.iter() {
                println!(
                    "{:<22} {:<20} {}",
                    rule.name,
                    rule.category.key(),
                    rule.category.title()
                );
            }
        }
        Commands::Scan {
            targets,
            repo_root,
            output,
            limit,
            width,
        } => {
            let eff = match config::resolve_effective(
                repo_root.as_deref(),
                &targets,
                output.as_deref(),
                limit,
                width,
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(2);
                }
            };
            // Friendly note when falling back to the conventional target
            if targets.is_empty() && !eff.config_found {
                eprintln!(
                    "{} No fenceplan.toml found; scanning {}",
                    note_prefix(),
                    config::DEFAULT_TARGET
                );
            }
            debug!(root = %eff.repo_root.display(), targets = ?eff.targets, "effective config");
            match fenceplan::run_scan(&eff, &DEFAULT_RULES) {
                Ok(reports) => print_reports(&reports, eff.output, eff.limit),
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
    }
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
