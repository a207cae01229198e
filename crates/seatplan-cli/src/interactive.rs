//! Line-driven session: the keyboard stands in for the form and seat clicks.
//!
//! Commands:
//!   gen [PEOPLE ROWS COLUMNS]   generate (repeats the last inputs if omitted)
//!   mode                        toggle delete mode
//!   click ROW-COL               delete or restore a seat (delete mode only)
//!   show | json                 print the current chart
//!   policy allow|protect        whether occupied seats may be deleted
//!   help | quit

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use seatplan_logic::render::{delete_mode_label, render_text, RenderOptions};
use seatplan_logic::seat::SeatId;
use seatplan_logic::session::{ClickOutcome, DeletionPolicy, IgnoreReason, Session};
use seatplan_logic::validation::RawInputs;

use crate::config::CliConfig;
use crate::make_rng;

const HELP: &str = "\
commands:
  gen [PEOPLE ROWS COLUMNS]   generate a chart
  mode                        toggle delete mode
  click ROW-COL               delete or restore a seat
  show | json                 print the current chart
  policy allow|protect        occupied-seat deletion policy
  help | quit";

enum Flow {
    Continue,
    Quit,
}

struct Repl {
    session: Session,
    rng: StdRng,
    /// Last typed form contents, valid or not.
    raw: RawInputs,
}

impl Repl {
    fn new(config: &CliConfig) -> Self {
        Self {
            session: Session::new(config.session.clone()),
            rng: make_rng(config.seed),
            raw: RawInputs::default(),
        }
    }

    fn chart_text(&self) -> String {
        match self.session.chart() {
            Some(chart) => render_text(chart, RenderOptions::default()),
            None => "no chart yet; run `gen`\n".to_string(),
        }
    }

    fn generate(&mut self) -> String {
        match self.session.generate(&self.raw, &mut self.rng) {
            Ok(chart) => {
                log::info!(
                    "generated {}x{} chart, {} unassigned",
                    chart.grid.rows,
                    chart.grid.columns,
                    chart.unassigned.len()
                );
                render_text(chart, RenderOptions::default())
            }
            Err(err) => {
                log::warn!("rejected input {:?}", self.raw);
                format!("{err}\n")
            }
        }
    }

    fn handle(&mut self, line: &str) -> Result<(Flow, String)> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok((Flow::Continue, String::new()));
        };
        let args: Vec<&str> = words.collect();

        let out = match (command, args.as_slice()) {
            ("gen" | "g", []) => self.generate(),
            ("gen" | "g", [people, rows, columns]) => {
                self.raw = RawInputs::new(*people, *rows, *columns);
                self.generate()
            }
            ("mode" | "m", []) => {
                let on = self.session.toggle_delete_mode();
                format!("{}\n", delete_mode_label(on))
            }
            ("click" | "c", [key]) => match key.parse::<SeatId>() {
                Ok(seat) => self.click(seat),
                Err(err) => format!("{err}\n"),
            },
            ("show" | "s", []) => self.chart_text(),
            ("json", []) => match self.session.chart() {
                Some(chart) => {
                    let mut text = serde_json::to_string_pretty(chart)
                        .context("serializing chart")?;
                    text.push('\n');
                    text
                }
                None => self.chart_text(),
            },
            ("policy", ["allow"]) => {
                self.session.set_deletion_policy(DeletionPolicy::AllowOccupied);
                "occupied seats may be deleted\n".to_string()
            }
            ("policy", ["protect"]) => {
                self.session
                    .set_deletion_policy(DeletionPolicy::ProtectOccupied);
                "occupied seats are protected\n".to_string()
            }
            ("help" | "h" | "?", _) => format!("{HELP}\n"),
            ("quit" | "q" | "exit", _) => return Ok((Flow::Quit, String::new())),
            _ => format!("unrecognized command: {line}\n{HELP}\n"),
        };
        Ok((Flow::Continue, out))
    }

    fn click(&mut self, seat: SeatId) -> String {
        match self.session.click_seat(seat, &mut self.rng) {
            ClickOutcome::Deleted(_) | ClickOutcome::Restored(_) => self.chart_text(),
            ClickOutcome::Ignored(reason) => {
                let why = match reason {
                    IgnoreReason::DeleteModeOff => "delete mode is off; use `mode`",
                    IgnoreReason::NotGenerated => "no chart yet; run `gen`",
                    IgnoreReason::OutsideGrid => "seat is outside the grid",
                    IgnoreReason::OccupiedSeat => "seat is occupied",
                };
                format!("{why}\n")
            }
        }
    }
}

/// Run a session until `quit` or end of input. Generates once with the
/// default inputs before reading the first command.
pub fn run<R: BufRead, W: Write>(config: &CliConfig, input: R, mut output: W) -> Result<()> {
    let mut repl = Repl::new(config);
    output.write_all(repl.generate().as_bytes())?;
    writeln!(output, "{}", delete_mode_label(repl.session.delete_mode()))?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        let (flow, text) = repl.handle(line.trim())?;
        output.write_all(text.as_bytes())?;
        output.flush()?;
        if let Flow::Quit = flow {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_output(script: &str) -> String {
        let config = CliConfig {
            seed: Some(9),
            ..CliConfig::default()
        };
        let mut out = Vec::new();
        run(&config, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn initial_chart_uses_defaults() {
        let out = session_output("");
        // 30 people on a 5x6 grid fill every seat
        assert!(!out.contains("空席"));
        assert!(!out.contains("未割り当て"));
        assert!(out.ends_with("削除モード: OFF\n"));
    }

    #[test]
    fn invalid_gen_shows_message() {
        let out = session_output("gen 0 3 3\n");
        assert!(out.contains("人数は1〜100の範囲で入力してください。"));
    }

    #[test]
    fn click_requires_delete_mode() {
        let out = session_output("click 0-0\n");
        assert!(out.contains("delete mode is off"));
        assert!(!out.contains("削除済"));
    }

    #[test]
    fn delete_and_overflow() {
        let out = session_output("gen 4 2 2\nmode\nclick 1-1\n");
        assert!(out.contains("削除モード: ON"));
        assert!(out.contains("削除済"));
        assert!(out.contains("未割り当て"));
    }

    #[test]
    fn protect_policy_blocks_occupied() {
        let out = session_output("gen 4 2 2\npolicy protect\nmode\nclick 0-0\n");
        assert!(out.contains("seat is occupied"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = session_output("quit\nmode\n");
        assert!(!out.contains("削除モード: ON"));
    }

    #[test]
    fn bad_seat_key() {
        let out = session_output("mode\nclick 11\n");
        assert!(out.contains("missing the '-' separator"));
    }
}
