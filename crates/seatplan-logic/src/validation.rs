//! Form-input parsing and range checks.
//!
//! Inputs arrive as the raw text of three form fields. Parsing is lenient in
//! the way browser number fields are read: leading whitespace and an optional
//! sign are accepted, then as many decimal digits as follow; anything after
//! the digits is ignored. A field with no leading digits is non-numeric.
//!
//! Checks run people → rows → columns and stop at the first failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    messages, MAX_COLUMNS, MAX_PEOPLE, MAX_ROWS, MIN_COLUMNS, MIN_PEOPLE, MIN_ROWS,
};
use crate::seat::Grid;

/// The one class of failure: a count is missing, non-numeric, or out of range.
/// `Display` is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{}", messages::INVALID_PEOPLE)]
    InvalidPeople,
    #[error("{}", messages::INVALID_ROWS)]
    InvalidRows,
    #[error("{}", messages::INVALID_COLUMNS)]
    InvalidColumns,
}

/// Unparsed field contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub people: String,
    pub rows: String,
    pub columns: String,
}

impl RawInputs {
    pub fn new(people: impl Into<String>, rows: impl Into<String>, columns: impl Into<String>) -> Self {
        Self {
            people: people.into(),
            rows: rows.into(),
            columns: columns.into(),
        }
    }
}

impl Default for RawInputs {
    fn default() -> Self {
        use crate::constants::defaults;
        Self::new(
            defaults::PEOPLE.to_string(),
            defaults::ROWS.to_string(),
            defaults::COLUMNS.to_string(),
        )
    }
}

/// Inputs that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidInputs {
    pub people: u32,
    pub grid: Grid,
}

/// Read a leading integer the way a browser's `parseInt(s, 10)` does.
///
/// Returns `None` when no digits follow the optional sign. Values too large
/// for `i64` saturate; they are out of range either way.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d - b'0'));
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn check(value: Option<i64>, min: i64, max: i64, err: InputError) -> Result<u32, InputError> {
    match value {
        Some(v) if (min..=max).contains(&v) => Ok(v as u32),
        _ => Err(err),
    }
}

/// Validate already-parsed counts. `None` stands for a non-numeric field.
pub fn validate_counts(
    people: Option<i64>,
    rows: Option<i64>,
    columns: Option<i64>,
) -> Result<ValidInputs, InputError> {
    let people = check(people, MIN_PEOPLE, MAX_PEOPLE, InputError::InvalidPeople)?;
    let rows = check(rows, MIN_ROWS, MAX_ROWS, InputError::InvalidRows)?;
    let columns = check(columns, MIN_COLUMNS, MAX_COLUMNS, InputError::InvalidColumns)?;
    Ok(ValidInputs {
        people,
        grid: Grid::new(rows, columns),
    })
}

/// Parse and validate the three form fields.
pub fn validate(raw: &RawInputs) -> Result<ValidInputs, InputError> {
    validate_counts(
        parse_int(&raw.people),
        parse_int(&raw.rows),
        parse_int(&raw.columns),
    )
}
