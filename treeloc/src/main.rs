//! # treeloc
//!
//! A CLI tool that inventories a source tree: how many files, and how many
//! blank, comment and code lines, live under each top-level directory.
//!
//! ## Overview
//!
//! treeloc is built on top of treeloclib. Files directly under the analyzed
//! root are grouped into a `root` bucket; everything else is grouped by the
//! top-level directory it lives in, however deeply nested.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the current directory
//! treeloc
//!
//! # Analyze another tree, output as JSON
//! treeloc ../project --output json
//!
//! # Narrow the scope with glob patterns (relative to the root)
//! treeloc . --exclude "**/generated/**" --include "src/**"
//!
//! # Show the 20 most common file types, with debug logging
//! treeloc . --top 20 -vv
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;
use treeloclib::{analyze, FilterConfig, Report, ReportTable, ScanOptions, DEFAULT_TOP_EXTENSIONS};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("treeloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Per-directory line statistics (blank / comment / code) for a source tree")
        .arg(
            Arg::new("path")
                .help("Path to analyze (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Only count files matching glob pattern (relative to the root)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip files matching glob pattern (relative to the root)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_parser(value_parser!(usize))
                .help("Number of file types to rank [default: 10]"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .action(ArgAction::SetTrue)
                .help("Walk top-level directories one at a time"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let top = matches
        .get_one::<usize>("top")
        .copied()
        .unwrap_or(DEFAULT_TOP_EXTENSIONS);
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let root = std::fs::canonicalize(path).unwrap_or_else(|_| std::path::PathBuf::from(path));

    let options = ScanOptions::new()
        .filter(build_filter(matches)?)
        .parallel(!matches.get_flag("sequential"));

    let result = analyze(&root, options)?;
    let report = Report::from_result(&result, top);
    info!(
        buckets = report.buckets.len(),
        files = report.totals.files,
        lines = report.totals.lines,
        "analysis complete"
    );

    match output {
        "json" => {
            let json = serde_json::to_string_pretty(&report)
                .context("failed to serialize report")?;
            Ok(format!("{}\n", json))
        }
        _ => Ok(render::render_table(&ReportTable::from_report(&report))),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_build_filter() {
        let matches = build_command()
            .try_get_matches_from(["treeloc", ".", "-e", "**/gen/**", "-i", "src/**"])
            .unwrap();
        let filter = build_filter(&matches).unwrap();

        assert_eq!(filter.include.len(), 1);
        assert_eq!(filter.exclude.len(), 1);
    }

    #[test]
    fn test_build_filter_invalid_glob() {
        let matches = build_command()
            .try_get_matches_from(["treeloc", "-e", "[oops"])
            .unwrap();

        assert!(build_filter(&matches).is_err());
    }

    #[test]
    fn test_defaults() {
        let matches = build_command().try_get_matches_from(["treeloc"]).unwrap();

        assert_eq!(matches.get_one::<String>("path").unwrap(), ".");
        assert_eq!(matches.get_one::<String>("output").unwrap(), "table");
        assert!(matches.get_one::<usize>("top").is_none());
        assert!(!matches.get_flag("sequential"));
        assert_eq!(matches.get_count("verbose"), 0);
    }
}
