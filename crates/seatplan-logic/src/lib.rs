//! Pure seating-chart logic for SeatPlan.
//!
//! This crate contains everything that decides who sits where, independent of
//! any terminal, browser, or UI toolkit. Functions take plain data and return
//! results, so the whole flow (validate, shuffle, assign, toggle deletions)
//! can be driven and tested without a live front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`assignment`] | Row-major seat assignment over a shuffled person sequence |
//! | [`constants`] | Input bounds, messages, display labels, defaults |
//! | [`render`] | Stateless text rendering of a finished chart |
//! | [`seat`] | Seat identifiers and grid geometry |
//! | [`session`] | Deletion state, delete mode, dimension-change reset |
//! | [`shuffle`] | Fisher–Yates shuffle of the person sequence |
//! | [`validation`] | Form-input parsing and range checks |
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use seatplan_logic::session::Session;
//! use seatplan_logic::validation::RawInputs;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::default();
//! let chart = session
//!     .generate(&RawInputs::new("5", "2", "2"), &mut rng)
//!     .unwrap();
//! assert_eq!(chart.occupied_count(), 4);
//! assert_eq!(chart.unassigned.len(), 1);
//! ```

pub mod assignment;
pub mod constants;
pub mod render;
pub mod seat;
pub mod session;
pub mod shuffle;
pub mod validation;

/// A person's number, `1..=people`.
pub type PersonId = u32;
