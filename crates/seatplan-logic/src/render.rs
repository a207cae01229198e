//! Text rendering of a finished chart.
//!
//! Rendering is a stateless consumer: it reads a [`SeatingChart`] and produces
//! a string. It never decides who sits where.

use crate::assignment::{SeatState, SeatingChart};
use crate::constants::labels;
use crate::PersonId;

/// Cell interior width in terminal columns. Fits `削除済` and `100番`.
const CELL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix rows and columns with their zero-based index, so a user can
    /// name a seat to click as `row-col`.
    pub headers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { headers: true }
    }
}

pub fn person_label(person: PersonId) -> String {
    format!("{person}{}", labels::PERSON_SUFFIX)
}

pub fn seat_label(state: SeatState) -> String {
    match state {
        SeatState::Deleted => labels::DELETED.to_string(),
        SeatState::Occupied(p) => person_label(p),
        SeatState::Empty => labels::EMPTY.to_string(),
    }
}

pub fn delete_mode_label(on: bool) -> &'static str {
    if on {
        labels::DELETE_MODE_ON
    } else {
        labels::DELETE_MODE_OFF
    }
}

/// Labels of the unassigned people, in shuffle order.
pub fn unassigned_labels(chart: &SeatingChart) -> Vec<String> {
    chart.unassigned.iter().map(|&p| person_label(p)).collect()
}

/// Terminal width: ASCII is one column, everything else in our label set is
/// a full-width CJK character.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn center(label: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(label));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(pad - left))
}

/// Render the chart as a grid of bracketed cells, followed by the unassigned
/// line when anyone is left over.
pub fn render_text(chart: &SeatingChart, opts: RenderOptions) -> String {
    let row_label_width = chart.grid.rows.saturating_sub(1).to_string().len();
    let mut out = String::new();

    if opts.headers {
        out.push_str(&" ".repeat(row_label_width + 1));
        let header: Vec<String> = (0..chart.grid.columns)
            .map(|c| format!(" {} ", center(&c.to_string(), CELL_WIDTH)))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');
    }

    for (r, row) in chart.rows().enumerate() {
        if opts.headers {
            out.push_str(&format!("{r:>row_label_width$} "));
        }
        let cells: Vec<String> = row
            .iter()
            .map(|a| format!("[{}]", center(&seat_label(a.state), CELL_WIDTH)))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    if !chart.unassigned.is_empty() {
        out.push('\n');
        out.push_str(labels::UNASSIGNED_HEADING);
        out.push_str(": ");
        out.push_str(&unassigned_labels(chart).join(" "));
        out.push('\n');
    }

    out
}
