//! Interactive menu loop.
//!
//! The loop reads one selection per line, dispatches it, and writes the
//! result. It is generic over its input and output so it can be driven from
//! stdin/stdout or from in-memory buffers.

use std::io::{self, BufRead, Write};

use console::Style;
use standingslib::{compute_standings, render_standings, render_team_report, team_log, Season};
use tracing::debug;

const MENU: &str = "\n(s) Standings\n(t) Team results\n(q) Quit\n";
const SELECTION_PROMPT: &str = "What do you want to see: ";
const TEAM_PROMPT: &str = "Enter team code (e.g. ARI, ATL, CHC, CLE, STL): ";
const INVALID_SELECTION: &str = "Invalid value. Please select 's', 't', or 'q'.";

/// One parsed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Standings,
    TeamResults,
    Quit,
    /// Anything else, as typed
    Invalid(String),
}

impl MenuCommand {
    /// Parse a selection line. Surrounding whitespace and case are ignored.
    pub fn parse(line: &str) -> Self {
        let value = line.trim().to_lowercase();
        match value.as_str() {
            "s" => MenuCommand::Standings,
            "t" => MenuCommand::TeamResults,
            "q" => MenuCommand::Quit,
            _ => MenuCommand::Invalid(value),
        }
    }
}

/// Styles for user-facing messages.
#[derive(Debug, Clone)]
pub struct Theme {
    error: Style,
}

impl Theme {
    /// No styling at all.
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Red error messages. `console` drops the codes when stdout is not a terminal.
    pub fn colored() -> Self {
        Self {
            error: Style::new().red(),
        }
    }
}

/// A menu session over one loaded season.
pub struct Session<'a> {
    season: &'a Season,
    theme: Theme,
}

impl<'a> Session<'a> {
    pub fn new(season: &'a Season) -> Self {
        Self {
            season,
            theme: Theme::plain(),
        }
    }

    /// Set the message theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<()> {
        loop {
            output.write_all(MENU.as_bytes())?;
            let Some(line) = prompt(input, output, SELECTION_PROMPT)? else {
                break;
            };

            let command = MenuCommand::parse(&line);
            debug!(?command, "menu selection");

            match command {
                MenuCommand::Standings => self.show_standings(output)?,
                MenuCommand::TeamResults => {
                    let Some(code) = prompt(input, output, TEAM_PROMPT)? else {
                        break;
                    };
                    self.show_team(output, &code.trim().to_uppercase())?;
                }
                MenuCommand::Quit => break,
                MenuCommand::Invalid(_) => {
                    writeln!(output, "{}", self.theme.error.apply_to(INVALID_SELECTION))?;
                }
            }
        }

        output.flush()
    }

    fn show_standings<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let rows = compute_standings(&self.season.teams, &self.season.games);
        output.write_all(render_standings(&rows).as_bytes())
    }

    fn show_team<W: Write>(&self, output: &mut W, code: &str) -> io::Result<()> {
        match team_log(&self.season.games, &self.season.teams, code) {
            Ok(report) => output.write_all(render_team_report(&report).as_bytes()),
            Err(e) => writeln!(output, "{}", self.theme.error.apply_to(e)),
        }
    }
}

/// Write a prompt and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    output.write_all(text.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use standingslib::{GameResult, Team, Teams};
    use std::io::Cursor;

    fn sample_season() -> Season {
        let mut teams = Teams::new();
        teams.insert(Team::new("A", "Alpha")).unwrap();
        teams.insert(Team::new("B", "Beta")).unwrap();
        Season {
            teams,
            games: vec![GameResult::new("2024-01-01", "A", "B", 3, 2)],
        }
    }

    fn run_with_input(input: &str) -> String {
        let season = sample_season();
        let mut reader = Cursor::new(input.as_bytes());
        let mut output = Vec::new();
        Session::new(&season).run(&mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(MenuCommand::parse("s\n"), MenuCommand::Standings);
        assert_eq!(MenuCommand::parse("  T "), MenuCommand::TeamResults);
        assert_eq!(MenuCommand::parse("Q"), MenuCommand::Quit);
        assert_eq!(
            MenuCommand::parse("standings"),
            MenuCommand::Invalid("standings".to_string())
        );
        assert_eq!(MenuCommand::parse(""), MenuCommand::Invalid(String::new()));
    }

    #[test]
    fn test_quit_immediately() {
        let out = run_with_input("q\n");
        assert_eq!(
            out,
            "\n(s) Standings\n(t) Team results\n(q) Quit\nWhat do you want to see: "
        );
    }

    #[test]
    fn test_end_of_input_quits() {
        let out = run_with_input("");
        assert!(out.ends_with(SELECTION_PROMPT));
    }

    #[test]
    fn test_standings_selection() {
        let out = run_with_input("s\nq\n");
        assert!(out.contains("TEAM                   WINS LOSSES   TIES PERCENT\n"));
        assert!(out.contains("A                         1      0      0   1.000\n"));
        // menu shown again after the table
        assert_eq!(out.matches("(q) Quit").count(), 2);
    }

    #[test]
    fn test_team_selection_uppercases_code() {
        let out = run_with_input("t\n b \nq\n");
        assert!(out.contains(TEAM_PROMPT));
        assert!(out.contains("Team: Beta\n"));
        assert!(out.contains("2024-01-01        at A    2     3    LOSS\n"));
        assert!(out.contains("Overall Record: 0-1-0\n"));
    }

    #[test]
    fn test_invalid_team_code_continues() {
        let out = run_with_input("t\nZZ\ns\nq\n");
        assert!(out.contains("Invalid team code\n"));
        assert!(out.contains("PERCENT"));
    }

    #[test]
    fn test_invalid_selection_continues() {
        let out = run_with_input("x\nq\n");
        assert!(out.contains("Invalid value. Please select 's', 't', or 'q'.\n"));
        assert_eq!(out.matches(SELECTION_PROMPT).count(), 2);
    }

    #[test]
    fn test_end_of_input_at_team_prompt() {
        let out = run_with_input("t\n");
        assert!(out.ends_with(TEAM_PROMPT));
    }
}
