//! Integration tests for the full event flow.
//!
//! Exercises: RawInputs → validation → dimension-change reset → shuffle
//! → assignment → seat-click toggling, all through `Session`.
//!
//! All tests are pure logic with a seeded RNG — no terminal, no rendering.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan_logic::assignment::{assign_seats, SeatState};
use seatplan_logic::seat::{Grid, SeatId};
use seatplan_logic::session::{ClickOutcome, Session};
use seatplan_logic::shuffle::shuffled_people;
use seatplan_logic::validation::{validate, InputError, RawInputs};

// ── Helpers ────────────────────────────────────────────────────────────

fn inputs(people: u32, rows: u32, columns: u32) -> RawInputs {
    RawInputs::new(people.to_string(), rows.to_string(), columns.to_string())
}

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ── Assignment properties ──────────────────────────────────────────────

#[test]
fn no_deletions_fills_prefix_in_shuffle_order() {
    for (people, rows, columns) in [(1, 1, 1), (5, 2, 3), (12, 3, 4), (30, 5, 6), (100, 20, 20)] {
        let grid = Grid::new(rows, columns);
        // Same seed as the session will use, so the shuffle is reproducible
        let expected_order = shuffled_people(people, &mut seeded(people as u64));

        let mut session = Session::default();
        let chart = session
            .generate(&inputs(people, rows, columns), &mut seeded(people as u64))
            .unwrap();

        let seated = (people as usize).min(grid.total_seats());
        for (i, cell) in chart.seats.iter().enumerate() {
            if i < seated {
                assert_eq!(cell.state, SeatState::Occupied(expected_order[i]));
            } else {
                assert_eq!(cell.state, SeatState::Empty);
            }
        }
        assert_eq!(chart.unassigned, expected_order[seated..].to_vec());
    }
}

#[test]
fn overflow_is_last_of_shuffle() {
    let expected_order = shuffled_people(5, &mut seeded(3));
    let mut session = Session::default();
    let chart = session.generate(&inputs(5, 2, 2), &mut seeded(3)).unwrap();

    assert_eq!(chart.occupied_count(), 4);
    assert_eq!(chart.unassigned, vec![expected_order[4]]);
}

#[test]
fn deletion_reduces_capacity() {
    let mut rng = seeded(11);
    let mut session = Session::default();
    session.generate(&inputs(4, 2, 2), &mut rng).unwrap();
    session.toggle_delete_mode();
    let outcome = session.click_seat(SeatId::new(0, 1), &mut rng);
    assert_eq!(outcome, ClickOutcome::Deleted(SeatId::new(0, 1)));

    let chart = session.chart().unwrap();
    assert_eq!(chart.occupied_count(), 3);
    assert_eq!(chart.unassigned.len(), 1);
}

#[test]
fn every_person_seated_at_most_once() {
    let mut rng = seeded(2024);
    let mut session = Session::default();
    session.generate(&inputs(40, 6, 6), &mut rng).unwrap();
    session.toggle_delete_mode();
    for seat in [SeatId::new(0, 0), SeatId::new(2, 3), SeatId::new(5, 5)] {
        session.click_seat(seat, &mut rng);
    }

    let chart = session.chart().unwrap();
    let mut everyone: Vec<u32> = chart
        .seats
        .iter()
        .filter_map(|a| a.state.person())
        .chain(chart.unassigned.iter().copied())
        .collect();
    everyone.sort_unstable();
    assert_eq!(everyone, (1..=40).collect::<Vec<_>>());
    assert_eq!(chart.available_seats(), 33);
    assert_eq!(chart.unassigned.len(), 7);
}

#[test]
fn deleting_every_seat_unassigns_everyone() {
    let grid = Grid::new(2, 3);
    let deleted: BTreeSet<_> = grid.seats().collect();
    let people = shuffled_people(4, &mut seeded(8));
    let chart = assign_seats(grid, &deleted, &people);
    assert_eq!(chart.unassigned, people);
}

// ── Deletion lifecycle ─────────────────────────────────────────────────

#[test]
fn dimension_change_clears_deletions() {
    let mut rng = seeded(1);
    let mut session = Session::default();
    session.generate(&inputs(5, 3, 3), &mut rng).unwrap();
    session.toggle_delete_mode();
    session.click_seat(SeatId::new(0, 0), &mut rng);
    assert_eq!(session.deleted_seats().len(), 1);

    session.generate(&inputs(5, 4, 3), &mut rng).unwrap();
    assert!(session.deleted_seats().is_empty());
    assert_eq!(session.chart().unwrap().deleted_count(), 0);
}

#[test]
fn unchanged_dimensions_preserve_deletions() {
    let mut rng = seeded(1);
    let mut session = Session::default();
    session.generate(&inputs(5, 3, 3), &mut rng).unwrap();
    session.toggle_delete_mode();
    session.click_seat(SeatId::new(1, 1), &mut rng);

    // A different people count alone does not reset the grid
    let chart = session.generate(&inputs(7, 3, 3), &mut rng).unwrap();
    assert_eq!(chart.state(SeatId::new(1, 1)), Some(SeatState::Deleted));
    assert!(session.deleted_seats().contains(&SeatId::new(1, 1)));
}

#[test]
fn swapped_dimensions_count_as_change() {
    let mut rng = seeded(1);
    let mut session = Session::default();
    session.generate(&inputs(5, 2, 3), &mut rng).unwrap();
    session.toggle_delete_mode();
    session.click_seat(SeatId::new(1, 0), &mut rng);

    session.generate(&inputs(5, 3, 2), &mut rng).unwrap();
    assert!(session.deleted_seats().is_empty());
}

#[test]
fn failed_generation_does_not_reset_deletions() {
    let mut rng = seeded(1);
    let mut session = Session::default();
    session.generate(&inputs(5, 3, 3), &mut rng).unwrap();
    session.toggle_delete_mode();
    session.click_seat(SeatId::new(2, 2), &mut rng);

    let err = session.generate(&inputs(5, 4, 0), &mut rng).unwrap_err();
    assert_eq!(err, InputError::InvalidColumns);
    assert!(session.deleted_seats().contains(&SeatId::new(2, 2)));
}

#[test]
fn toggling_off_delete_mode_freezes_deletions() {
    let mut rng = seeded(6);
    let mut session = Session::default();
    session.generate(&inputs(3, 2, 2), &mut rng).unwrap();
    assert!(session.toggle_delete_mode());
    session.click_seat(SeatId::new(0, 0), &mut rng);
    assert!(!session.toggle_delete_mode());

    let before = session.chart().cloned();
    session.click_seat(SeatId::new(0, 0), &mut rng);
    assert_eq!(session.chart().cloned(), before);
    assert_eq!(session.deleted_seats().len(), 1);
}

// ── Validation ─────────────────────────────────────────────────────────

#[test]
fn boundary_messages() {
    let cases = [
        (RawInputs::new("0", "3", "3"), "人数は1〜100の範囲で入力してください。"),
        (RawInputs::new("101", "3", "3"), "人数は1〜100の範囲で入力してください。"),
        (RawInputs::new("5", "21", "3"), "行数は1〜20の範囲で入力してください。"),
        (RawInputs::new("5", "3", "0"), "列数は1〜20の範囲で入力してください。"),
    ];
    for (raw, message) in cases {
        let err = validate(&raw).unwrap_err();
        assert_eq!(err.to_string(), message);
        // Re-validating gives the same answer
        assert_eq!(validate(&raw).unwrap_err(), err);
    }
}
