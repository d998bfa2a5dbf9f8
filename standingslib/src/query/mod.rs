//! Query processing: standings and team logs.
//!
//! This module handles the second stage of the pipeline - deriving views from
//! a loaded season. Every query recomputes from the raw games. It provides:
//!
//! - **Records**: `TeamRecord` and per-game `GameOutcome`
//! - **Standings**: `compute_standings`, ranked by win percent
//! - **Team log**: `team_log`, one team's games in season order
//!
//! ## Example
//!
//! ```rust,ignore
//! use standingslib::query::{compute_standings, team_log};
//!
//! let standings = compute_standings(&season.teams, &season.games);
//! let report = team_log(&season.games, &season.teams, "STL")?;
//! ```

pub mod record;
pub mod standings;
pub mod team_log;

pub use record::{GameOutcome, TeamRecord};
pub use standings::{compute_standings, standings_records, StandingsRow};
pub use team_log::{team_log, TeamLogRow, TeamReport};
