//! Win/loss/tie records and per-game outcomes.

use std::fmt;

/// Result of one game from a single team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

impl GameOutcome {
    /// Outcome for the team that scored `ours` against `theirs`.
    pub fn from_scores(ours: u32, theirs: u32) -> Self {
        if ours > theirs {
            GameOutcome::Win
        } else if ours < theirs {
            GameOutcome::Loss
        } else {
            GameOutcome::Tie
        }
    }

    /// The same game seen from the other side.
    pub fn reversed(self) -> Self {
        match self {
            GameOutcome::Win => GameOutcome::Loss,
            GameOutcome::Loss => GameOutcome::Win,
            GameOutcome::Tie => GameOutcome::Tie,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Win => "WIN",
            GameOutcome::Loss => "LOSS",
            GameOutcome::Tie => "TIE",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags apply in table rows
        f.pad(self.as_str())
    }
}

/// Wins, losses and ties for one team.
///
/// Displays as `W-L-T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl TeamRecord {
    /// Create a new record with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Tie => self.ties += 1,
        }
    }

    /// Total games played.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Wins plus half credit for ties, over games played.
    ///
    /// Zero when no games were played. Always within `[0, 1]`.
    pub fn win_percent(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / games as f64
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_scores() {
        assert_eq!(GameOutcome::from_scores(3, 2), GameOutcome::Win);
        assert_eq!(GameOutcome::from_scores(2, 3), GameOutcome::Loss);
        assert_eq!(GameOutcome::from_scores(0, 0), GameOutcome::Tie);
        assert_eq!(GameOutcome::Win.reversed(), GameOutcome::Loss);
        assert_eq!(GameOutcome::Tie.reversed(), GameOutcome::Tie);
    }

    #[test]
    fn test_outcome_display_pads() {
        assert_eq!(GameOutcome::Loss.to_string(), "LOSS");
        assert_eq!(format!("{:>7}", GameOutcome::Win), "    WIN");
    }

    #[test]
    fn test_record_default() {
        let record = TeamRecord::new();
        assert_eq!(record.games(), 0);
        assert_eq!(record.win_percent(), 0.0);
        assert_eq!(record.to_string(), "0-0-0");
    }

    #[test]
    fn test_record_win_percent() {
        let record = TeamRecord {
            wins: 3,
            losses: 1,
            ties: 0,
        };
        assert_eq!(record.win_percent(), 0.75);

        // ties count half
        let record = TeamRecord {
            wins: 1,
            losses: 2,
            ties: 1,
        };
        assert_eq!(record.win_percent(), 0.375);

        let record = TeamRecord {
            wins: 0,
            losses: 0,
            ties: 4,
        };
        assert_eq!(record.win_percent(), 0.5);
    }

    #[test]
    fn test_record_counts_outcomes() {
        let mut record = TeamRecord::new();
        record.record(GameOutcome::Win);
        record.record(GameOutcome::Tie);
        record.record(GameOutcome::Loss);
        record.record(GameOutcome::Win);

        assert_eq!(record.games(), 4);
        assert_eq!(record.to_string(), "2-1-1");
    }
}
