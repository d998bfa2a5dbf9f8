//! Output formatting: present query results as text tables.
//!
//! This module handles the last stage of the pipeline. It is a pure
//! presentation layer - it only formats values into strings; all aggregation
//! and sorting happens in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use standingslib::output::render_standings;
//!
//! let standings = compute_standings(&season.teams, &season.games);
//! print!("{}", render_standings(&standings));
//! ```

pub mod table;

pub use table::{render_standings, render_team_report};
