//! One team's season, game by game.
//!
//! The games file has no home/away column. A team listed second in a game
//! played at the first team's venue, so its opponent is labelled `at XXX`.

use tracing::debug;

use crate::data::model::{GameResult, Team, Teams};
use crate::error::StandingsError;
use crate::Result;

use super::record::{GameOutcome, TeamRecord};

/// One game in a team's log, seen from that team's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLogRow {
    pub date: String,
    /// Opponent code, prefixed with `at ` for away games
    pub opponent_label: String,
    pub team_score: u32,
    pub opponent_score: u32,
    pub result: GameOutcome,
}

/// A team's chronological results and overall record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamReport {
    /// The queried team
    pub team: Team,
    /// Games in season order
    pub rows: Vec<TeamLogRow>,
    /// Totals across `rows`
    pub record: TeamRecord,
}

/// Build the game log for `team_code`.
///
/// Returns `StandingsError::InvalidTeamCode` when the code is not in `teams`.
///
/// # Example
///
/// ```rust
/// use standingslib::{team_log, GameOutcome, GameResult, StandingsError, Team, Teams};
///
/// let mut teams = Teams::new();
/// teams.insert(Team::new("A", "Alpha")).unwrap();
/// teams.insert(Team::new("B", "Beta")).unwrap();
/// let games = vec![GameResult::new("2024-01-01", "A", "B", 3, 2)];
///
/// let report = team_log(&games, &teams, "A").unwrap();
/// assert_eq!(report.rows[0].opponent_label, "B");
/// assert_eq!(report.rows[0].result, GameOutcome::Win);
///
/// let err = team_log(&games, &teams, "C").unwrap_err();
/// assert!(matches!(err, StandingsError::InvalidTeamCode(_)));
/// ```
pub fn team_log(games: &[GameResult], teams: &Teams, team_code: &str) -> Result<TeamReport> {
    let team = teams
        .get(team_code)
        .ok_or_else(|| StandingsError::InvalidTeamCode(team_code.to_string()))?;

    let mut record = TeamRecord::new();
    let rows: Vec<TeamLogRow> = games
        .iter()
        .filter_map(|game| log_row(game, team_code))
        .inspect(|row| record.record(row.result))
        .collect();

    debug!(team = team_code, games = rows.len(), "built team log");

    Ok(TeamReport {
        team: team.clone(),
        rows,
        record,
    })
}

fn log_row(game: &GameResult, team_code: &str) -> Option<TeamLogRow> {
    if !game.involves(team_code) {
        return None;
    }

    let (opponent_label, team_score, opponent_score) = if game.first_team == team_code {
        (
            game.second_team.clone(),
            game.first_score,
            game.second_score,
        )
    } else {
        (
            format!("at {}", game.first_team),
            game.second_score,
            game.first_score,
        )
    };

    Some(TeamLogRow {
        date: game.date.clone(),
        opponent_label,
        team_score,
        opponent_score,
        result: GameOutcome::from_scores(team_score, opponent_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_beta() -> Teams {
        let mut teams = Teams::new();
        teams.insert(Team::new("A", "Alpha")).unwrap();
        teams.insert(Team::new("B", "Beta")).unwrap();
        teams.insert(Team::new("C", "Gamma")).unwrap();
        teams
    }

    #[test]
    fn test_home_team_log() {
        let games = vec![GameResult::new("2024-01-01", "A", "B", 3, 2)];

        let report = team_log(&games, &alpha_beta(), "A").unwrap();

        assert_eq!(report.team.name, "Alpha");
        assert_eq!(
            report.rows,
            vec![TeamLogRow {
                date: "2024-01-01".to_string(),
                opponent_label: "B".to_string(),
                team_score: 3,
                opponent_score: 2,
                result: GameOutcome::Win,
            }]
        );
        assert_eq!(report.record.to_string(), "1-0-0");
    }

    #[test]
    fn test_away_team_log() {
        let games = vec![GameResult::new("2024-01-01", "A", "B", 3, 2)];

        let report = team_log(&games, &alpha_beta(), "B").unwrap();

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.opponent_label, "at A");
        assert_eq!(row.team_score, 2);
        assert_eq!(row.opponent_score, 3);
        assert_eq!(row.result, GameOutcome::Loss);
        assert_eq!(report.record.to_string(), "0-1-0");
    }

    #[test]
    fn test_log_keeps_season_order_and_totals() {
        let games = vec![
            GameResult::new("2024-04-01", "A", "B", 1, 1),
            GameResult::new("2024-04-02", "B", "C", 4, 0),
            GameResult::new("2024-04-03", "C", "A", 2, 5),
            GameResult::new("2024-04-04", "A", "C", 0, 6),
        ];

        let report = team_log(&games, &alpha_beta(), "A").unwrap();

        let dates: Vec<&str> = report.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-04-01", "2024-04-03", "2024-04-04"]);
        let results: Vec<GameOutcome> = report.rows.iter().map(|r| r.result).collect();
        assert_eq!(
            results,
            vec![GameOutcome::Tie, GameOutcome::Win, GameOutcome::Loss]
        );
        assert_eq!(report.rows[1].opponent_label, "at C");
        assert_eq!(report.record.to_string(), "1-1-1");
        assert_eq!(report.record.games() as usize, report.rows.len());
    }

    #[test]
    fn test_team_without_games() {
        let games = vec![GameResult::new("2024-04-01", "A", "B", 1, 0)];

        let report = team_log(&games, &alpha_beta(), "C").unwrap();

        assert!(report.rows.is_empty());
        assert_eq!(report.record, TeamRecord::new());
    }

    #[test]
    fn test_invalid_team_code() {
        let games = vec![GameResult::new("2024-04-01", "A", "XYZ", 1, 0)];

        // a code seen in games but not in the teams file is still unknown
        for code in ["XYZ", "", "a"] {
            let err = team_log(&games, &alpha_beta(), code).unwrap_err();
            assert!(matches!(err, StandingsError::InvalidTeamCode(ref c) if c == code));
            assert_eq!(err.to_string(), "Invalid team code");
        }
    }
}
