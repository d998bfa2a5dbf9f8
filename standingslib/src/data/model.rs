//! Core data structures for a season.
//!
//! A season is two read-only inputs: the teams, keyed by their short code, and
//! the games, in the chronological order they were recorded. There is no
//! explicit home/away field; by convention the first team of a game is the
//! home side.

use std::collections::HashMap;

use crate::error::StandingsError;
use crate::Result;

/// A team from the teams file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Short unique identifier (e.g. "ARI")
    pub code: String,
    /// Display name
    pub name: String,
}

impl Team {
    /// Create a new team.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Teams keyed by code, iterated in insertion (file) order.
///
/// The iteration order is what standings fall back to when two teams have
/// the same win percent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teams {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl Teams {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a team. Fails if its code is already present.
    pub fn insert(&mut self, team: Team) -> Result<()> {
        if self.index.contains_key(&team.code) {
            return Err(StandingsError::DuplicateTeamCode(team.code));
        }
        self.index.insert(team.code.clone(), self.teams.len());
        self.teams.push(team);
        Ok(())
    }

    /// Look up a team by code.
    pub fn get(&self, code: &str) -> Option<&Team> {
        self.index.get(code).map(|&i| &self.teams[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Teams in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl<'a> IntoIterator for &'a Teams {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}

/// The outcome of one game, as recorded in the games file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Game date, kept verbatim from the file
    pub date: String,
    /// Code of the first-listed (home) team
    pub first_team: String,
    /// Code of the second-listed (away) team
    pub second_team: String,
    /// Points scored by the first team
    pub first_score: u32,
    /// Points scored by the second team
    pub second_score: u32,
}

impl GameResult {
    /// Create a new game result.
    pub fn new(
        date: impl Into<String>,
        first_team: impl Into<String>,
        second_team: impl Into<String>,
        first_score: u32,
        second_score: u32,
    ) -> Self {
        Self {
            date: date.into(),
            first_team: first_team.into(),
            second_team: second_team.into(),
            first_score,
            second_score,
        }
    }

    /// Whether the given team played in this game.
    pub fn involves(&self, code: &str) -> bool {
        self.first_team == code || self.second_team == code
    }
}
