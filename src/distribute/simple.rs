extern crate alloc;

use alloc::vec::Vec;

use crate::shuffle::shuffled;

use super::empty_hands;

/// Shuffles `items` and cuts them into `player_count` contiguous hands.
///
/// With `base = total / player_count` and `extra = total % player_count`,
/// players `1..=extra` receive `base + 1` cards and the rest receive
/// `base`. Player 1's slice starts at the front of the shuffled sequence.
#[must_use]
pub fn distribute_simple<T: Clone>(items: &[T], seed: &str, player_count: usize) -> Vec<Vec<T>> {
    if player_count == 0 {
        tracing::warn!(cards = items.len(), "simple distribution asked for zero players");
        return Vec::new();
    }

    let total = items.len();
    let base = total / player_count;
    let extra = total % player_count;

    let mut remaining = shuffled(items, seed).into_iter();
    let mut hands = empty_hands(player_count);
    for (index, hand) in hands.iter_mut().enumerate() {
        let size = if index < extra { base + 1 } else { base };
        hand.extend(remaining.by_ref().take(size));
    }

    tracing::debug!(
        players = player_count,
        cards = total,
        base,
        extra,
        "simple distribution"
    );
    hands
}
