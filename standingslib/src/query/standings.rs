//! League standings.
//!
//! Every game adds one win and one loss, or two ties, to the per-team
//! accumulator. Rows are then built for each known team in file order and
//! ranked by win percent.

use std::collections::HashMap;

use tracing::debug;

use crate::data::model::{GameResult, Teams};

use super::record::{GameOutcome, TeamRecord};

/// One line of the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    /// Team code
    pub code: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Wins plus half of ties, over games played; 0 with no games
    pub win_percent: f64,
}

impl StandingsRow {
    fn new(code: &str, record: TeamRecord) -> Self {
        Self {
            code: code.to_string(),
            wins: record.wins,
            losses: record.losses,
            ties: record.ties,
            win_percent: record.win_percent(),
        }
    }
}

/// Accumulate a record for every team code that appears in `games`.
///
/// Codes missing from the teams file are included too.
pub fn standings_records(games: &[GameResult]) -> HashMap<String, TeamRecord> {
    let mut records: HashMap<String, TeamRecord> = HashMap::new();

    for game in games {
        let outcome = GameOutcome::from_scores(game.first_score, game.second_score);
        records
            .entry(game.first_team.clone())
            .or_default()
            .record(outcome);
        records
            .entry(game.second_team.clone())
            .or_default()
            .record(outcome.reversed());
    }

    records
}

/// Compute standings for every known team, best win percent first.
///
/// Teams without games get a zero record. The sort is stable, so teams with
/// equal win percent stay in their teams-file order.
pub fn compute_standings(teams: &Teams, games: &[GameResult]) -> Vec<StandingsRow> {
    let records = standings_records(games);

    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|team| {
            let record = records.get(&team.code).copied().unwrap_or_default();
            StandingsRow::new(&team.code, record)
        })
        .collect();

    rows.sort_by(|a, b| b.win_percent.total_cmp(&a.win_percent));

    debug!(teams = rows.len(), games = games.len(), "computed standings");

    rows
}
