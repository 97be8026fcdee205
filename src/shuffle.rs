//! Seeded Fisher-Yates shuffle.

extern crate alloc;

use alloc::vec::Vec;

use crate::rng::SeededLcg;

/// Shuffles `items` in place, driven by `seed`.
///
/// Walks from the last index down to 1, swapping position `i` with
/// `j = floor(rng() * (i + 1))`. Empty and single element slices are left
/// untouched. The permutation is reproducible for a given seed but not
/// uniform; that is acceptable for dealing cards at a table.
pub fn shuffle_in_place<T>(items: &mut [T], seed: &str) {
    let mut rng = SeededLcg::from_seed_str(seed);
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
///
/// # Example
///
/// ```
/// use eopdeal::shuffled;
///
/// let original = [1, 2, 3, 4, 5];
/// assert_eq!(shuffled(&original, "same-seed"), vec![3, 1, 5, 4, 2]);
/// assert_eq!(original, [1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn shuffled<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, seed);
    out
}
