//! Seat identifiers and grid geometry.
//!
//! A seat is addressed either by its composite key `"row-col"` (what a front
//! end stores on the rendered cell) or by its linear index
//! `row * columns + col`. Both are zero-based. `SeatId` orders row-major, so a
//! `BTreeSet<SeatId>` iterates in the same order the assignment scan uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One grid cell, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SeatId {
    pub row: u32,
    pub col: u32,
}

impl SeatId {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Linear index in a grid with `columns` columns.
    pub fn linear_index(self, columns: u32) -> usize {
        self.row as usize * columns as usize + self.col as usize
    }

    /// Inverse of [`SeatId::linear_index`]. `columns` must be non-zero.
    pub fn from_linear_index(index: usize, columns: u32) -> Self {
        let columns = columns as usize;
        Self {
            row: (index / columns) as u32,
            col: (index % columns) as u32,
        }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// A composite seat key that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatIdParseError {
    #[error("seat key {0:?} is missing the '-' separator")]
    MissingSeparator(String),
    #[error("seat key {key:?} has a non-numeric {part}")]
    NotANumber { key: String, part: &'static str },
}

impl FromStr for SeatId {
    type Err = SeatIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let (row, col) = key
            .split_once('-')
            .ok_or_else(|| SeatIdParseError::MissingSeparator(key.to_string()))?;
        let row = row.parse().map_err(|_| SeatIdParseError::NotANumber {
            key: key.to_string(),
            part: "row",
        })?;
        let col = col.parse().map_err(|_| SeatIdParseError::NotANumber {
            key: key.to_string(),
            part: "column",
        })?;
        Ok(Self { row, col })
    }
}

impl From<SeatId> for String {
    fn from(seat: SeatId) -> Self {
        seat.to_string()
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Grid dimensions. Validated grids have both sides in `1..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub rows: u32,
    pub columns: u32,
}

impl Grid {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    pub fn total_seats(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        seat.row < self.rows && seat.col < self.columns
    }

    /// All seats in row-major scan order: row ascending, then column.
    pub fn seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| SeatId::new(row, col)))
    }
}
