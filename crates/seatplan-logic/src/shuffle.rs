//! Fisher–Yates shuffle of the person sequence.
//!
//! The walk runs from the last index down to 1, swapping each element with a
//! uniformly chosen element at or before it, so every permutation is equally
//! likely. Callers own the RNG; pass a seeded `StdRng` for reproducible charts.

use rand::Rng;

use crate::PersonId;

/// Shuffle `items` in place. Empty and single-element slices are untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// People `1..=count` in a uniformly random order.
pub fn shuffled_people<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<PersonId> {
    let mut people: Vec<PersonId> = (1..=count).collect();
    shuffle(&mut people, rng);
    people
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn empty_and_single_are_noops() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn result_is_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut people = shuffled_people(100, &mut rng);
        assert_eq!(people.len(), 100);
        people.sort_unstable();
        assert_eq!(people, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffled_people(30, &mut StdRng::seed_from_u64(12345));
        let b = shuffled_people(30, &mut StdRng::seed_from_u64(12345));
        let c = shuffled_people(30, &mut StdRng::seed_from_u64(54321));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_people() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(shuffled_people(0, &mut rng).is_empty());
    }

    #[test]
    fn permutations_roughly_uniform() {
        // 4 elements → 24 permutations, 1000 expected hits each
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 24_000;
        let mut counts: HashMap<[u8; 4], u32> = HashMap::new();
        for _ in 0..trials {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }
        assert_eq!(counts.len(), 24, "every permutation should appear");
        for (perm, count) in &counts {
            assert!(
                (850..=1150).contains(count),
                "permutation {perm:?} seen {count} times"
            );
        }
    }

    #[test]
    fn every_position_reachable() {
        // Element 0 should land in each of 5 slots with ~equal frequency
        let mut rng = StdRng::seed_from_u64(77);
        let mut slots = [0u32; 5];
        for _ in 0..10_000 {
            let mut items = [0u8, 1, 2, 3, 4];
            shuffle(&mut items, &mut rng);
            let pos = items.iter().position(|&x| x == 0).unwrap();
            slots[pos] += 1;
        }
        for count in slots {
            assert!((1800..=2200).contains(&count), "slot count {count}");
        }
    }
}
