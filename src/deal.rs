//! A complete deal for one table.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, Category};
use crate::deck::build_deck_from;
use crate::error::ValidationError;
use crate::hand::Hand;
use crate::options::DealOptions;
use crate::seed::hash_seed;
use crate::validate::{validate_player_count, validate_player_index, validate_seed};

/// The cards of one category, as the host page lists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGroup {
    /// The category.
    pub category: Category,
    /// Cards of the category in deck order.
    pub cards: Vec<Card>,
}

/// Every hand of a table, recomputed from the shared seed.
///
/// The host and every player build the same `Deal` from the same seed and
/// player count; a player then only looks at their own [`Hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    seed: String,
    deck: Vec<Card>,
    hands: Vec<Hand>,
}

impl Deal {
    /// Validates the parameters and deals the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is blank or the player count is outside
    /// the configured range.
    pub fn new(options: &DealOptions, seed: &str, players: usize) -> Result<Self, ValidationError> {
        validate_seed(seed)?;
        validate_player_count(players, options)?;

        let deck = build_deck_from(options.table);
        let hands = options
            .policy
            .distribute(&deck, seed, players)
            .into_iter()
            .enumerate()
            .map(|(index, cards)| {
                let mut hand = Hand::new(index + 1, cards);
                if options.sort_hands {
                    hand.sort_for_display();
                }
                hand
            })
            .collect();

        tracing::debug!(
            seed_hash = hash_seed(seed),
            players,
            policy = options.policy.name(),
            cards = deck.len(),
            "dealt table"
        );

        Ok(Self {
            seed: seed.to_string(),
            deck,
            hands,
        })
    }

    /// Returns the seed the deal was computed from.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns all hands, player 1 first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand of a 1-based player index.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PlayerIndexOutOfRange`] if `player` is 0 or
    /// greater than the player count.
    pub fn hand(&self, player: usize) -> Result<&Hand, ValidationError> {
        validate_player_index(player, self.hands.len())?;
        Ok(&self.hands[player - 1])
    }

    /// Returns the unshuffled deck grouped by category for the host page.
    ///
    /// Groups follow table order; categories without cards are left out.
    #[must_use]
    pub fn host_view(&self) -> Vec<HostGroup> {
        let mut groups: Vec<HostGroup> = Vec::new();
        for &card in &self.deck {
            match groups.last_mut() {
                Some(group) if group.category == card.category => group.cards.push(card),
                _ => groups.push(HostGroup {
                    category: card.category,
                    cards: alloc::vec![card],
                }),
            }
        }
        groups
    }
}
