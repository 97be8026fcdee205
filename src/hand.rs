//! A player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Category};

/// The cards dealt to one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// 1-based player index.
    player: usize,
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand for `player` holding `cards` in the given order.
    #[must_use]
    pub const fn new(player: usize, cards: Vec<Card>) -> Self {
        Self { player, cards }
    }

    /// Returns the 1-based player index.
    #[must_use]
    pub const fn player(&self) -> usize {
        self.player
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the hand and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds a card with the given id.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Counts the cards of one category.
    #[must_use]
    pub fn count_of(&self, category: Category) -> usize {
        self.cards
            .iter()
            .filter(|card| card.category == category)
            .count()
    }

    /// Sorts for display: by category code, then by rank (`2` up to `A`).
    pub fn sort_for_display(&mut self) {
        self.cards
            .sort_by(|a, b| a.category.code().cmp(&b.category.code()).then(a.rank.cmp(&b.rank)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn display_sort_orders_by_code_then_rank() {
        let mut hand = Hand::new(
            1,
            alloc::vec![
                Card::new(Category::Spoofing, Rank::Ace),
                Card::new(Category::Tampering, Rank::Five),
                Card::new(Category::Spoofing, Rank::Two),
                Card::new(Category::Tampering, Rank::King),
                Card::new(Category::Repudiation, Rank::Seven),
            ],
        );
        hand.sort_for_display();
        let ids: Vec<_> = hand.cards().iter().map(Card::id).collect();
        assert_eq!(ids, ["R7", "S2", "SA", "T5", "TK"]);
    }

    #[test]
    fn ten_sorts_below_face_ranks() {
        let mut hand = Hand::new(
            2,
            alloc::vec![
                Card::new(Category::DenialOfService, Rank::Jack),
                Card::new(Category::DenialOfService, Rank::Ten),
                Card::new(Category::DenialOfService, Rank::Nine),
            ],
        );
        hand.sort_for_display();
        let ids: Vec<_> = hand.cards().iter().map(Card::id).collect();
        assert_eq!(ids, ["D9", "D10", "DB"]);
        assert_eq!(hand.count_of(Category::DenialOfService), 3);
        assert!(hand.contains_id("D10"));
    }
}
