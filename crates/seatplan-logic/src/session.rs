//! Session state: deleted seats, delete mode, and the dimension-change reset.
//!
//! A [`Session`] carries everything that survives between front-end events.
//! Each event handler takes the session mutably plus an RNG and returns what
//! the front end should show; nothing is captured in globals, so a whole
//! sequence of clicks can be replayed in a test with a seeded RNG.
//!
//! # Event Flow
//!
//! 1. `generate` validates the three fields. On failure nothing changes.
//! 2. If the grid differs from the last generated grid, deletions are cleared.
//! 3. People are shuffled and assigned around the deleted seats.
//! 4. With delete mode on, `click_seat` toggles one seat's deletion and
//!    re-runs shuffle + assignment with the last valid inputs.
//!
//! Every regeneration re-shuffles everyone; no seat binding survives a click.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assignment::{assign_seats, SeatState, SeatingChart};
use crate::seat::{Grid, SeatId};
use crate::shuffle::shuffled_people;
use crate::validation::{validate, InputError, RawInputs, ValidInputs};

/// Whether a seat that currently holds someone may be deleted by a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionPolicy {
    /// Any seat may be deleted; its occupant is reshuffled elsewhere.
    #[default]
    AllowOccupied,
    /// Only empty seats may be deleted. Restoring is always allowed.
    ProtectOccupied,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub deletion_policy: DeletionPolicy,
}

/// Why a seat click changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    DeleteModeOff,
    NotGenerated,
    OutsideGrid,
    OccupiedSeat,
}

/// Result of a seat click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickOutcome {
    Deleted(SeatId),
    Restored(SeatId),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
    deleted: BTreeSet<SeatId>,
    /// Grid of the last successful generation.
    current_grid: Option<Grid>,
    inputs: Option<ValidInputs>,
    chart: Option<SeatingChart>,
    delete_mode: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn set_deletion_policy(&mut self, policy: DeletionPolicy) {
        self.config.deletion_policy = policy;
    }

    pub fn deleted_seats(&self) -> &BTreeSet<SeatId> {
        &self.deleted
    }

    pub fn chart(&self) -> Option<&SeatingChart> {
        self.chart.as_ref()
    }

    pub fn grid(&self) -> Option<Grid> {
        self.current_grid
    }

    /// Inputs of the last successful generation.
    pub fn inputs(&self) -> Option<ValidInputs> {
        self.inputs
    }

    pub fn delete_mode(&self) -> bool {
        self.delete_mode
    }

    pub fn is_initialized(&self) -> bool {
        self.chart.is_some()
    }

    /// Validate `raw` and build a fresh chart.
    ///
    /// Deletions persist unless the grid dimensions changed since the last
    /// successful generation. On a validation error the session is untouched.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        raw: &RawInputs,
        rng: &mut R,
    ) -> Result<&SeatingChart, InputError> {
        let inputs = validate(raw)?;

        if self.current_grid != Some(inputs.grid) {
            if !self.deleted.is_empty() {
                log::debug!(
                    "grid changed to {}x{}, clearing {} deleted seats",
                    inputs.grid.rows,
                    inputs.grid.columns,
                    self.deleted.len()
                );
            }
            self.deleted.clear();
            self.current_grid = Some(inputs.grid);
        }

        self.inputs = Some(inputs);
        Ok(self.rebuild(inputs, rng))
    }

    /// Re-shuffle with the stored inputs and deletions. `None` before the
    /// first successful generation.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&SeatingChart> {
        let inputs = self.inputs?;
        Some(self.rebuild(inputs, rng))
    }

    /// Flip delete mode and return the new value.
    pub fn toggle_delete_mode(&mut self) -> bool {
        self.delete_mode = !self.delete_mode;
        self.delete_mode
    }

    /// Toggle deletion of `seat` and re-run the assignment.
    pub fn click_seat<R: Rng + ?Sized>(&mut self, seat: SeatId, rng: &mut R) -> ClickOutcome {
        if !self.delete_mode {
            return ClickOutcome::Ignored(IgnoreReason::DeleteModeOff);
        }
        let (Some(inputs), Some(chart)) = (self.inputs, self.chart.as_ref()) else {
            return ClickOutcome::Ignored(IgnoreReason::NotGenerated);
        };
        if !inputs.grid.contains(seat) {
            return ClickOutcome::Ignored(IgnoreReason::OutsideGrid);
        }

        let outcome = if self.deleted.remove(&seat) {
            ClickOutcome::Restored(seat)
        } else {
            let occupied = matches!(chart.state(seat), Some(SeatState::Occupied(_)));
            if occupied && self.config.deletion_policy == DeletionPolicy::ProtectOccupied {
                return ClickOutcome::Ignored(IgnoreReason::OccupiedSeat);
            }
            self.deleted.insert(seat);
            ClickOutcome::Deleted(seat)
        };

        log::debug!("seat {seat} toggled: {outcome:?}");
        self.rebuild(inputs, rng);
        outcome
    }

    fn rebuild<R: Rng + ?Sized>(&mut self, inputs: ValidInputs, rng: &mut R) -> &SeatingChart {
        let people = shuffled_people(inputs.people, rng);
        let chart = assign_seats(inputs.grid, &self.deleted, &people);
        self.chart.insert(chart)
    }
}
