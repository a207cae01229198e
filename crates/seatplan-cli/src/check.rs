//! Headless self-check sweep.
//!
//! Re-runs the seating properties outside `cargo test`, against whatever
//! build is installed: validation boundaries, assignment coverage across every
//! grid size, shuffle uniformity, and the deletion lifecycle.

use std::collections::{BTreeSet, HashMap};

use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan_logic::assignment::{assign_seats, SeatState};
use seatplan_logic::constants::{MAX_COLUMNS, MAX_ROWS};
use seatplan_logic::seat::{Grid, SeatId};
use seatplan_logic::session::Session;
use seatplan_logic::shuffle::{shuffle, shuffled_people};
use seatplan_logic::validation::{validate, InputError, RawInputs};

struct CheckResult {
    name: String,
    passed: bool,
    detail: String,
}

/// Run every sweep, print a summary, and report whether all passed.
pub fn run(verbose: bool) -> bool {
    println!("=== SeatPlan Self-Check ===\n");

    let mut results = Vec::new();

    // 1. Validation boundaries and message order
    results.extend(check_validation());

    // 2. Assignment coverage across all grid sizes
    results.extend(check_assignment());

    // 3. Shuffle uniformity
    results.extend(check_shuffle(verbose));

    // 4. Deletion lifecycle through a session
    results.extend(check_deletions());

    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    failed == 0
}

// ── 1. Validation ──────────────────────────────────────────────────────

fn check_validation() -> Vec<CheckResult> {
    println!("--- Validation ---");
    let cases = [
        ("1", "1", "1", None),
        ("100", "20", "20", None),
        ("0", "3", "3", Some(InputError::InvalidPeople)),
        ("101", "3", "3", Some(InputError::InvalidPeople)),
        ("abc", "3", "3", Some(InputError::InvalidPeople)),
        ("5", "21", "3", Some(InputError::InvalidRows)),
        ("5", "3", "0", Some(InputError::InvalidColumns)),
        ("0", "0", "0", Some(InputError::InvalidPeople)),
    ];

    let mismatches: Vec<String> = cases
        .iter()
        .filter_map(|&(p, r, c, expected)| {
            let raw = RawInputs::new(p, r, c);
            let got = validate(&raw).err();
            let stable = validate(&raw).err() == got;
            (got != expected || !stable).then(|| format!("({p},{r},{c}) → {got:?}"))
        })
        .collect();

    vec![CheckResult {
        name: "validation_boundaries".into(),
        passed: mismatches.is_empty(),
        detail: if mismatches.is_empty() {
            format!("{} cases", cases.len())
        } else {
            mismatches.join(", ")
        },
    }]
}

// ── 2. Assignment ──────────────────────────────────────────────────────

fn check_assignment() -> Vec<CheckResult> {
    println!("--- Assignment ---");
    let mut rng = StdRng::seed_from_u64(1);
    let mut failures = Vec::new();
    let mut charts = 0;

    for rows in 1..=MAX_ROWS as u32 {
        for columns in 1..=MAX_COLUMNS as u32 {
            let grid = Grid::new(rows, columns);
            // Delete every seventh seat to exercise skipping
            let deleted: BTreeSet<SeatId> = grid
                .seats()
                .filter(|s| s.linear_index(columns) % 7 == 3)
                .collect();
            for people in [1u32, 17, 100] {
                let order = shuffled_people(people, &mut rng);
                let chart = assign_seats(grid, &deleted, &order);
                charts += 1;

                let available = grid.total_seats() - deleted.len();
                let seated = (people as usize).min(available);
                let in_order: Vec<u32> =
                    chart.seats.iter().filter_map(|a| a.state.person()).collect();
                let deleted_ok = chart
                    .seats
                    .iter()
                    .all(|a| a.state.is_deleted() == deleted.contains(&a.seat));
                let empties_trail = chart
                    .seats
                    .iter()
                    .filter(|a| !a.state.is_deleted())
                    .skip(seated)
                    .all(|a| a.state == SeatState::Empty);

                if in_order != order[..seated]
                    || chart.unassigned != order[seated..]
                    || !deleted_ok
                    || !empties_trail
                {
                    failures.push(format!("{rows}x{columns} p={people}"));
                }
            }
        }
    }

    vec![CheckResult {
        name: "assignment_row_major_bijection".into(),
        passed: failures.is_empty(),
        detail: if failures.is_empty() {
            format!("{charts} charts consistent")
        } else {
            format!("{} bad charts: {}", failures.len(), failures.join(", "))
        },
    }]
}

// ── 3. Shuffle ─────────────────────────────────────────────────────────

fn check_shuffle(verbose: bool) -> Vec<CheckResult> {
    println!("--- Shuffle ---");
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 48_000u32;
    let mut counts: HashMap<[u8; 4], u32> = HashMap::new();
    for _ in 0..trials {
        let mut items = [0u8, 1, 2, 3];
        shuffle(&mut items, &mut rng);
        *counts.entry(items).or_default() += 1;
    }

    let expected = f64::from(trials) / 24.0;
    let chi_square: f64 = counts
        .values()
        .map(|&c| (f64::from(c) - expected).powi(2) / expected)
        .sum();

    if verbose {
        let min = counts.values().min().copied().unwrap_or(0);
        let max = counts.values().max().copied().unwrap_or(0);
        println!("  permutation hits: min={min} max={max} expected={expected:.0}");
    }

    // 23 degrees of freedom; 49.7 is the 0.1% critical value
    vec![
        CheckResult {
            name: "shuffle_all_permutations".into(),
            passed: counts.len() == 24,
            detail: format!("{} of 24 permutations seen", counts.len()),
        },
        CheckResult {
            name: "shuffle_uniform".into(),
            passed: chi_square < 49.7,
            detail: format!("chi-square {chi_square:.1} (df=23)"),
        },
    ]
}

// ── 4. Deletion lifecycle ──────────────────────────────────────────────

fn check_deletions() -> Vec<CheckResult> {
    println!("--- Deletion Lifecycle ---");
    let mut rng = StdRng::seed_from_u64(3);
    let mut results = Vec::new();

    let mut session = Session::default();
    let generated = session
        .generate(&RawInputs::new("5", "3", "3"), &mut rng)
        .is_ok();
    session.toggle_delete_mode();
    session.click_seat(SeatId::new(1, 1), &mut rng);
    let kept = session
        .generate(&RawInputs::new("5", "3", "3"), &mut rng)
        .map(|chart| chart.state(SeatId::new(1, 1)) == Some(SeatState::Deleted))
        .unwrap_or(false);
    results.push(CheckResult {
        name: "deletions_survive_same_grid".into(),
        passed: generated && kept,
        detail: format!("seat 1-1 still deleted: {kept}"),
    });

    let resized = session
        .generate(&RawInputs::new("5", "4", "3"), &mut rng)
        .is_ok();
    let cleared = session.deleted_seats().is_empty();
    results.push(CheckResult {
        name: "deletions_cleared_on_resize".into(),
        passed: resized && cleared,
        detail: format!("{} deleted after resize", session.deleted_seats().len()),
    });

    let mut session = Session::default();
    let capacity = session
        .generate(&RawInputs::new("4", "2", "2"), &mut rng)
        .is_ok()
        && {
            session.toggle_delete_mode();
            session.click_seat(SeatId::new(0, 0), &mut rng);
            session
                .chart()
                .is_some_and(|c| c.occupied_count() == 3 && c.unassigned.len() == 1)
        };
    results.push(CheckResult {
        name: "deletion_reduces_capacity".into(),
        passed: capacity,
        detail: "2x2 grid, 1 deleted, 4 people → 3 seated, 1 unassigned".into(),
    });

    results
}
