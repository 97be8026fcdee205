//! Splitting a shuffled deck into hands.
//!
//! Two policies exist. [`DistributionPolicy::Simple`] cuts the shuffled
//! sequence into contiguous slices whose sizes differ by at most one.
//! [`DistributionPolicy::Balanced`] deals each category round-robin so no
//! player ends up with a lopsided share of one category by shuffle luck.
//!
//! Neither policy checks the player count against table limits; that is
//! left to [`crate::validate`]. Both return no hands for zero players.

extern crate alloc;

use alloc::vec::Vec;

mod balanced;
mod simple;

pub use balanced::distribute_balanced;
pub use simple::distribute_simple;

use crate::card::{Card, Category};

/// Something that belongs to a category, for balanced dealing.
pub trait Categorized {
    /// The category type.
    type Category: Copy + PartialEq;

    /// Returns the category of this item.
    fn category(&self) -> Self::Category;
}

impl Categorized for Card {
    type Category = Category;

    fn category(&self) -> Category {
        self.category
    }
}

/// How a shuffled deck is split between players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DistributionPolicy {
    /// Deal every category round-robin starting at player 1.
    #[default]
    Balanced,
    /// Contiguous slices; the first `total % players` players get one extra.
    Simple,
}

impl DistributionPolicy {
    /// Shuffles `items` with `seed` and splits them into `player_count` hands.
    ///
    /// Hand `k` in the result belongs to player `k + 1`.
    #[must_use]
    pub fn distribute<T>(self, items: &[T], seed: &str, player_count: usize) -> Vec<Vec<T>>
    where
        T: Categorized + Clone,
    {
        match self {
            Self::Balanced => distribute_balanced(items, seed, player_count),
            Self::Simple => distribute_simple(items, seed, player_count),
        }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Simple => "simple",
        }
    }

    /// Parses a policy name as returned by [`Self::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(Self::Balanced),
            "simple" => Some(Self::Simple),
            _ => None,
        }
    }
}

fn empty_hands<T>(player_count: usize) -> Vec<Vec<T>> {
    (0..player_count).map(|_| Vec::new()).collect()
}
