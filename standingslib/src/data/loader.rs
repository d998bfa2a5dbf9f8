//! Flat-file season loader.
//!
//! Reads a data folder containing two colon-separated files:
//!
//! - `teams.dat`: `name:code`, one team per line
//! - `games.dat`: `date:code1:code2:score1:score2`, one game per line
//!
//! A malformed line aborts the whole load. Only whitespace-only lines are
//! skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::StandingsError;
use crate::Result;

use super::model::{GameResult, Team, Teams};

const TEAM_FIELDS: usize = 2;
const GAME_FIELDS: usize = 5;

/// Options for loading a season folder.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File name of the teams file, relative to the folder
    pub teams_file: String,
    /// File name of the games file, relative to the folder
    pub games_file: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            teams_file: "teams.dat".to_string(),
            games_file: "games.dat".to_string(),
        }
    }
}

impl LoadOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the teams file name.
    pub fn teams_file(mut self, name: impl Into<String>) -> Self {
        self.teams_file = name.into();
        self
    }

    /// Set the games file name.
    pub fn games_file(mut self, name: impl Into<String>) -> Self {
        self.games_file = name.into();
        self
    }
}

/// A loaded season: the read-only input to every query.
#[derive(Debug, Clone, Default)]
pub struct Season {
    /// Teams in file order
    pub teams: Teams,
    /// Games in chronological (file) order
    pub games: Vec<GameResult>,
}

/// Load the teams and games files from a folder.
///
/// # Example
///
/// ```rust
/// use standingslib::{load_season, LoadOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("teams.dat"), "Arizona:ARI\nAtlanta:ATL\n").unwrap();
/// fs::write(dir.path().join("games.dat"), "2024-04-01:ARI:ATL:5:3\n").unwrap();
///
/// let season = load_season(dir.path(), &LoadOptions::new()).unwrap();
/// assert_eq!(season.teams.len(), 2);
/// assert_eq!(season.games[0].first_score, 5);
/// ```
pub fn load_season(folder: impl AsRef<Path>, options: &LoadOptions) -> Result<Season> {
    let folder = folder.as_ref();

    if !folder.exists() {
        return Err(StandingsError::PathNotFound(folder.to_path_buf()));
    }

    let teams_path = folder.join(&options.teams_file);
    let teams = parse_teams(&teams_path, &read_file(&teams_path)?)?;

    let games_path = folder.join(&options.games_file);
    let games = parse_games(&games_path, &read_file(&games_path)?)?;

    debug!(
        teams = teams.len(),
        games = games.len(),
        folder = %folder.display(),
        "loaded season"
    );

    for game in &games {
        for code in [&game.first_team, &game.second_team] {
            if !teams.contains(code) {
                warn!(code = %code, date = %game.date, "game references unknown team code");
            }
        }
    }

    Ok(Season { teams, games })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| StandingsError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Split a line into trimmed colon-separated fields, requiring an exact count.
fn split_fields<'a>(
    path: &Path,
    line_no: usize,
    line: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split(':').map(str::trim).collect();
    if fields.len() != expected {
        return Err(StandingsError::MalformedLine {
            path: path.to_path_buf(),
            line: line_no,
            message: format!("expected {} fields, found {}", expected, fields.len()),
        });
    }
    if let Some(pos) = fields.iter().position(|f| f.is_empty()) {
        return Err(StandingsError::MalformedLine {
            path: path.to_path_buf(),
            line: line_no,
            message: format!("field {} is empty", pos + 1),
        });
    }
    Ok(fields)
}

/// Iterate non-blank lines with 1-based line numbers.
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
}

/// Parse the contents of a teams file. `path` is only used for error messages.
pub fn parse_teams(path: impl AsRef<Path>, content: &str) -> Result<Teams> {
    let path = path.as_ref();
    let mut teams = Teams::new();

    for (line_no, line) in data_lines(content) {
        let fields = split_fields(path, line_no, line, TEAM_FIELDS)?;
        teams.insert(Team::new(fields[1], fields[0]))?;
    }

    Ok(teams)
}

/// Parse the contents of a games file. `path` is only used for error messages.
pub fn parse_games(path: impl AsRef<Path>, content: &str) -> Result<Vec<GameResult>> {
    let path = path.as_ref();
    let mut games = Vec::new();

    for (line_no, line) in data_lines(content) {
        let fields = split_fields(path, line_no, line, GAME_FIELDS)?;
        let first_score = parse_score(path, line_no, fields[3])?;
        let second_score = parse_score(path, line_no, fields[4])?;
        games.push(GameResult::new(
            fields[0],
            fields[1],
            fields[2],
            first_score,
            second_score,
        ));
    }

    Ok(games)
}

fn parse_score(path: &Path, line_no: usize, value: &str) -> Result<u32> {
    value.parse().map_err(|_| StandingsError::InvalidScore {
        path: path.to_path_buf(),
        line: line_no,
        value: value.to_string(),
    })
}
