//! Fixed-width text tables.
//!
//! Column widths and the three-decimal win percent are part of the output
//! contract. Every line, including the last, ends with a newline. Dates in
//! team report rows are printed as recorded; only the `DATE` header is padded.
//!
//! Standings:
//!
//! ```text
//! TEAM                   WINS LOSSES   TIES PERCENT
//! -------------------- ------ ------ ------ -------
//! A                         1      0      0   1.000
//! ```
//!
//! Team report:
//!
//! ```text
//! Team: Beta
//!
//!       DATE    OPPONENT   US  THEM  RESULT
//! 2024-01-01        at A    2     3    LOSS
//!
//! Overall Record: 0-1-0
//! ```

use crate::query::standings::StandingsRow;
use crate::query::team_log::TeamReport;

const TEAM_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 6;
const PERCENT_WIDTH: usize = 7;

/// Header only; row dates are not padded
const DATE_WIDTH: usize = 10;
const OPPONENT_WIDTH: usize = 11;
const US_WIDTH: usize = 4;
const THEM_WIDTH: usize = 5;
const RESULT_WIDTH: usize = 7;

/// Render the standings table with a header and dashed separator.
pub fn render_standings(rows: &[StandingsRow]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<tw$} {:>cw$} {:>cw$} {:>cw$} {:>pw$}\n",
        "TEAM",
        "WINS",
        "LOSSES",
        "TIES",
        "PERCENT",
        tw = TEAM_WIDTH,
        cw = COUNT_WIDTH,
        pw = PERCENT_WIDTH,
    ));
    output.push_str(&format!(
        "{} {} {} {} {}\n",
        "-".repeat(TEAM_WIDTH),
        "-".repeat(COUNT_WIDTH),
        "-".repeat(COUNT_WIDTH),
        "-".repeat(COUNT_WIDTH),
        "-".repeat(PERCENT_WIDTH),
    ));

    for row in rows {
        output.push_str(&format!(
            "{:<tw$} {:>cw$} {:>cw$} {:>cw$} {:>pw$.3}\n",
            row.code,
            row.wins,
            row.losses,
            row.ties,
            row.win_percent,
            tw = TEAM_WIDTH,
            cw = COUNT_WIDTH,
            pw = PERCENT_WIDTH,
        ));
    }

    output
}

/// Render a team's game log followed by its overall record.
pub fn render_team_report(report: &TeamReport) -> String {
    let mut output = format!("Team: {}\n\n", report.team.name);

    output.push_str(&format!(
        "{:>dw$} {:>ow$} {:>uw$} {:>tw$} {:>rw$}\n",
        "DATE",
        "OPPONENT",
        "US",
        "THEM",
        "RESULT",
        dw = DATE_WIDTH,
        ow = OPPONENT_WIDTH,
        uw = US_WIDTH,
        tw = THEM_WIDTH,
        rw = RESULT_WIDTH,
    ));

    for row in &report.rows {
        output.push_str(&format!(
            "{} {:>ow$} {:>uw$} {:>tw$} {:>rw$}\n",
            row.date,
            row.opponent_label,
            row.team_score,
            row.opponent_score,
            row.result,
            ow = OPPONENT_WIDTH,
            uw = US_WIDTH,
            tw = THEM_WIDTH,
            rw = RESULT_WIDTH,
        ));
    }

    output.push_str(&format!("\nOverall Record: {}\n", report.record));
    output
}
