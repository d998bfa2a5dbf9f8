//! # standings
//!
//! An interactive viewer for season standings and team results.
//!
//! ## Overview
//!
//! standings is built on top of standingslib. It loads a season folder once
//! and then answers menu selections until the user quits:
//!
//! - **s**: league standings ranked by win percent
//! - **t**: one team's results, game by game, with its overall record
//! - **q**: quit
//!
//! ## Usage
//!
//! ```bash
//! # Folder must contain teams.dat and games.dat
//! standings data/2024
//!
//! # Show loader diagnostics on stderr
//! RUST_LOG=debug standings data/2024
//! ```

mod menu;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use standingslib::{load_season, LoadOptions};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use menu::{Session, Theme};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("standings")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Season standings and team results from flat data files")
        .arg(
            Arg::new("folder")
                .help("Folder containing teams.dat and games.dat")
                .required(true),
        )
}

/// Log to stderr so stdout only carries the tables and prompts.
fn init_logging() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let folder = matches
        .get_one::<String>("folder")
        .map(|s| s.as_str())
        .context("missing data folder")?;

    let season = load_season(folder, &LoadOptions::new())
        .with_context(|| format!("failed to load season from '{}'", folder))?;
    info!(
        teams = season.teams.len(),
        games = season.games.len(),
        "season loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&season)
        .theme(Theme::colored())
        .run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
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
    fn test_folder_is_required() {
        let result = build_command().try_get_matches_from(["standings"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_folder_argument() {
        let matches = build_command()
            .try_get_matches_from(["standings", "data/2024"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("folder").map(|s| s.as_str()),
            Some("data/2024")
        );
    }

    #[test]
    fn test_run_reports_missing_folder() {
        let matches = build_command()
            .try_get_matches_from(["standings", "/nonexistent/season"])
            .unwrap();
        let err = run(&matches).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed to load season"));
        assert!(message.contains("path does not exist"));
    }
}
