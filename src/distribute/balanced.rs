extern crate alloc;

use alloc::vec::Vec;

use crate::shuffle::shuffled;

use super::{Categorized, empty_hands};

/// Shuffles `items` and deals each category round-robin.
///
/// The shuffled sequence is grouped by category, keeping each category's
/// shuffled order; categories are processed in order of first appearance.
/// Every category starts dealing at player 1, so player 1 tends to collect
/// the leftover card of a category whose size is not a multiple of the
/// player count. The per-category spread between any two players is at
/// most one card.
///
/// Each hand holds its cards in category processing order.
#[must_use]
pub fn distribute_balanced<T>(items: &[T], seed: &str, player_count: usize) -> Vec<Vec<T>>
where
    T: Categorized + Clone,
{
    if player_count == 0 {
        tracing::warn!(cards = items.len(), "balanced distribution asked for zero players");
        return Vec::new();
    }

    let mut groups: Vec<(T::Category, Vec<T>)> = Vec::new();
    for item in shuffled(items, seed) {
        let category = item.category();
        match groups.iter().position(|(seen, _)| *seen == category) {
            Some(slot) => groups[slot].1.push(item),
            None => groups.push((category, alloc::vec![item])),
        }
    }

    let group_count = groups.len();
    let mut hands = empty_hands(player_count);
    for (_, group) in groups {
        for (offset, item) in group.into_iter().enumerate() {
            hands[offset % player_count].push(item);
        }
    }

    tracing::debug!(
        players = player_count,
        cards = items.len(),
        categories = group_count,
        "balanced distribution"
    );
    hands
}
