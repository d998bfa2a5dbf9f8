//! # standingslib
//!
//! Season standings and per-team game logs computed from two flat files:
//! a list of teams and a chronological list of game results.
//!
//! ## Overview
//!
//! The library is a small pipeline:
//!
//! - **Data**: `Team`, `Teams`, `GameResult` and the loader that reads them
//!   from `teams.dat` / `games.dat`
//! - **Query**: `compute_standings` ranks every team by win percent, and
//!   `team_log` builds one team's chronological results with a running record
//! - **Output**: fixed-width text tables for both views
//!
//! Every query is a pure function of the loaded season. Nothing is cached, so
//! repeated queries never observe stale data.
//!
//! ## Example
//!
//! ```rust
//! use standingslib::{compute_standings, load_season, render_standings, team_log, LoadOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("teams.dat"), "Alpha:A\nBeta:B\n").unwrap();
//! fs::write(dir.path().join("games.dat"), "2024-01-01:A:B:3:2\n").unwrap();
//!
//! let season = load_season(dir.path(), &LoadOptions::new()).unwrap();
//!
//! let standings = compute_standings(&season.teams, &season.games);
//! assert_eq!(standings[0].code, "A");
//! assert_eq!(standings[0].win_percent, 1.0);
//! assert!(render_standings(&standings).starts_with("TEAM"));
//!
//! let report = team_log(&season.games, &season.teams, "B").unwrap();
//! assert_eq!(report.rows[0].opponent_label, "at A");
//! assert_eq!(report.record.to_string(), "0-1-0");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;

pub use data::{load_season, GameResult, LoadOptions, Season, Team, Teams};
pub use error::StandingsError;
pub use output::{render_standings, render_team_report};
pub use query::{
    compute_standings, standings_records, team_log, GameOutcome, StandingsRow, TeamLogRow,
    TeamRecord, TeamReport,
};

/// Result type for standingslib operations
pub type Result<T> = std::result::Result<T, StandingsError>;
