//! Deck construction from a category/rank table.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Category, Rank};

/// Ranks that exist for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRanks {
    /// The category.
    pub category: Category,
    /// Ranks in deck order. May be empty.
    pub ranks: &'static [Rank],
}

const ALL_RANKS: &[Rank] = &Rank::ALL;

/// The printed deck, categories ordered by display name.
///
/// Tampering has no `2`, Elevation of Privilege starts at `5` and the
/// Privacy cards are not published yet.
pub const STANDARD_TABLE: &[CategoryRanks] = &[
    CategoryRanks {
        category: Category::DenialOfService,
        ranks: ALL_RANKS,
    },
    CategoryRanks {
        category: Category::ElevationOfPrivilege,
        ranks: &[
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ],
    },
    CategoryRanks {
        category: Category::InformationDisclosure,
        ranks: ALL_RANKS,
    },
    CategoryRanks {
        category: Category::Privacy,
        ranks: &[],
    },
    CategoryRanks {
        category: Category::Repudiation,
        ranks: ALL_RANKS,
    },
    CategoryRanks {
        category: Category::Spoofing,
        ranks: ALL_RANKS,
    },
    CategoryRanks {
        category: Category::Tampering,
        ranks: &[
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ],
    },
];

/// Number of cards in the standard deck.
pub const DECK_SIZE: usize = 74;

/// Builds the standard deck in table order.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    build_deck_from(STANDARD_TABLE)
}

/// Builds a deck from an arbitrary table.
///
/// Cards are emitted for every category/rank pair in table order. A pair
/// that already produced a card earlier in the table is skipped, so the
/// result never holds two cards with the same id.
#[must_use]
pub fn build_deck_from(table: &[CategoryRanks]) -> Vec<Card> {
    let capacity = table.iter().map(|entry| entry.ranks.len()).sum();
    let mut cards: Vec<Card> = Vec::with_capacity(capacity);

    for entry in table {
        for &rank in entry.ranks {
            let card = Card::new(entry.category, rank);
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_expected_size() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(
            STANDARD_TABLE.iter().map(|e| e.ranks.len()).sum::<usize>(),
            DECK_SIZE
        );
    }

    #[test]
    fn empty_category_contributes_nothing() {
        let deck = build_deck();
        assert!(deck.iter().all(|c| c.category != Category::Privacy));
    }

    #[test]
    fn duplicate_table_rows_do_not_duplicate_cards() {
        let table = [
            CategoryRanks {
                category: Category::Spoofing,
                ranks: &[Rank::Two, Rank::Three],
            },
            CategoryRanks {
                category: Category::Spoofing,
                ranks: &[Rank::Three, Rank::Four],
            },
        ];
        let deck = build_deck_from(&table);
        assert_eq!(deck.len(), 3);
    }
}
