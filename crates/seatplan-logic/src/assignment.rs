//! Seat assignment over a shuffled person sequence.
//!
//! Seats are scanned row-major. A deleted seat consumes nobody; every other
//! seat takes the next person in shuffle order until people run out, after
//! which the rest are empty. People left after the scan are unassigned and
//! keep their shuffled order.
//!
//! The result is plain data: rendering reads a [`SeatingChart`] and never
//! feeds back into the assignment decision.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::seat::{Grid, SeatId};
use crate::PersonId;

/// Display state of one seat. `Deleted` is derived from the deletion set on
/// every assignment, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "person", rename_all = "snake_case")]
pub enum SeatState {
    Deleted,
    Occupied(PersonId),
    Empty,
}

impl SeatState {
    pub fn person(self) -> Option<PersonId> {
        match self {
            SeatState::Occupied(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_deleted(self) -> bool {
        matches!(self, SeatState::Deleted)
    }
}

/// One cell of a finished chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub seat: SeatId,
    #[serde(flatten)]
    pub state: SeatState,
}

/// A complete chart: every seat of the grid in scan order plus overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingChart {
    pub grid: Grid,
    /// One entry per grid cell, row-major.
    pub seats: Vec<SeatAssignment>,
    /// People who did not fit, in shuffle order.
    pub unassigned: Vec<PersonId>,
}

/// Assign `people` (already shuffled) to the non-deleted seats of `grid`.
///
/// Deleted ids outside the grid are ignored. Total over all inputs.
pub fn assign_seats(grid: Grid, deleted: &BTreeSet<SeatId>, people: &[PersonId]) -> SeatingChart {
    let mut seats = Vec::with_capacity(grid.total_seats());
    let mut cursor = 0usize;

    for seat in grid.seats() {
        let state = if deleted.contains(&seat) {
            SeatState::Deleted
        } else if let Some(&person) = people.get(cursor) {
            cursor += 1;
            SeatState::Occupied(person)
        } else {
            SeatState::Empty
        };
        seats.push(SeatAssignment { seat, state });
    }

    let unassigned = people[cursor..].to_vec();
    log::debug!(
        "assigned {} of {} people on {}x{} grid ({} deleted, {} unassigned)",
        cursor,
        people.len(),
        grid.rows,
        grid.columns,
        seats.iter().filter(|s| s.state.is_deleted()).count(),
        unassigned.len()
    );

    SeatingChart {
        grid,
        seats,
        unassigned,
    }
}

impl SeatingChart {
    /// State of `seat`, or `None` if it lies outside the grid.
    pub fn state(&self, seat: SeatId) -> Option<SeatState> {
        if !self.grid.contains(seat) {
            return None;
        }
        self.seats
            .get(seat.linear_index(self.grid.columns))
            .map(|a| a.state)
    }

    /// Seat occupied by `person`, if any.
    pub fn seat_of(&self, person: PersonId) -> Option<SeatId> {
        self.seats
            .iter()
            .find(|a| a.state == SeatState::Occupied(person))
            .map(|a| a.seat)
    }

    pub fn occupied_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|a| matches!(a.state, SeatState::Occupied(_)))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|a| a.state == SeatState::Empty)
            .count()
    }

    pub fn deleted_count(&self) -> usize {
        self.seats.iter().filter(|a| a.state.is_deleted()).count()
    }

    /// Seats that can take a person (total minus deleted).
    pub fn available_seats(&self) -> usize {
        self.seats.len() - self.deleted_count()
    }

    /// Seat → person for every occupied seat.
    pub fn assignments(&self) -> HashMap<SeatId, PersonId> {
        self.seats
            .iter()
            .filter_map(|a| a.state.person().map(|p| (a.seat, p)))
            .collect()
    }

    /// The chart one grid row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[SeatAssignment]> {
        // chunks() panics on zero; a zero-column grid has no seats anyway
        self.seats.chunks(self.grid.columns.max(1) as usize)
    }
}
