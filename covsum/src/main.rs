//! # covsum
//!
//! A CLI tool for summarizing Go coverage profiles per file.
//!
//! ## Overview
//!
//! covsum is built on top of covsumlib. It reads the profile written by
//! `go test -coverprofile`, prints block and statement coverage for every
//! file plus a total, and lets you drop generated or vendored packages from
//! the numbers.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize a profile, files sorted by name
//! covsum coverage.out
//!
//! # Show names relative to the module root
//! covsum coverage.out --root github.com/acme/widget
//!
//! # Leave packages out (prefix match, so subpackages go too)
//! covsum coverage.out --root github.com/acme/widget --exclude internal/mocks --exclude cmd
//!
//! # Worst files first
//! covsum coverage.out --sort missing-stmts --order desc
//!
//! # Output as JSON
//! covsum coverage.out --output json
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `-v` for debug output.

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use covsumlib::{generate_report_with, ReportTable};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("covsum")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Per-file coverage summary for Go cover profiles")
        .arg(
            Arg::new("profile")
                .required(true)
                .help("Coverage profile written by `go test -coverprofile`"),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .default_value("")
                .help("Prefix stripped (with its trailing '/') from every file name"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files whose name starts with this prefix (can be specified multiple times)"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .default_value("filename")
                .help("Sort column: filename, block, stmt, missing-blocks or missing-stmts"),
        )
        .arg(
            Arg::new("order")
                .short('o')
                .long("order")
                .default_value("asc")
                .help("Sort direction: asc or desc"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored table output"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Get a string argument that has a default value
fn string_arg<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_default()
}

/// Extract exclusion prefixes from matches
fn extract_exclusions(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("exclude")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Generate the report and render it in the requested format
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let profile = string_arg(matches, "profile");
    let exclusions = extract_exclusions(matches);
    debug!(profile, exclusions = ?exclusions, "generating report");

    let report = generate_report_with(
        profile,
        string_arg(matches, "root"),
        &exclusions,
        string_arg(matches, "sort"),
        string_arg(matches, "order"),
    )?;

    match string_arg(matches, "output") {
        "json" => Ok(serde_json::to_string_pretty(&report)?),
        _ => {
            let color = !matches.get_flag("no-color") && console::colors_enabled();
            Ok(render::render_table(&ReportTable::from_report(&report), color))
        }
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
