//! Data loading: the season model and the flat-file reader.
//!
//! This module handles the first stage of the pipeline - turning the two data
//! files into typed, immutable values. It provides:
//!
//! - **Model**: `Team`, `Teams` (ordered by file position) and `GameResult`
//! - **Loader**: `load_season`, which reads `teams.dat` and `games.dat`
//!
//! ## Example
//!
//! ```rust,ignore
//! use standingslib::data::{load_season, LoadOptions};
//!
//! let season = load_season("data/2024", &LoadOptions::new())?;
//! println!("{} teams, {} games", season.teams.len(), season.games.len());
//! ```

pub mod loader;
pub mod model;

pub use loader::{load_season, parse_games, parse_teams, LoadOptions, Season};
pub use model::{GameResult, Team, Teams};
