//! Deterministic card dealing for Elevation of Privilege sessions, with
//! optional `no_std` support.
//!
//! Every participant recomputes the same deal from a shared text seed: the
//! seed is hashed to an integer, drives a small linear congruential
//! generator, shuffles the deck with Fisher-Yates and finally splits it into
//! one hand per player. No exchange between participants is required.
//!
//! # Example
//!
//! ```
//! use eopdeal::{Deal, DealOptions};
//!
//! let options = DealOptions::default();
//! let deal = Deal::new(&options, "Workshop2026", 4).unwrap();
//! let mine = deal.hand(2).unwrap();
//! assert_eq!(mine.player(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod deck;
pub mod distribute;
pub mod error;
pub mod hand;
pub mod options;
pub mod query;
pub mod rng;
pub mod seed;
pub mod shuffle;
pub mod validate;

// Re-export main types
pub use card::{Card, Category, Rank};
pub use deal::{Deal, HostGroup};
pub use deck::{CategoryRanks, DECK_SIZE, STANDARD_TABLE, build_deck, build_deck_from};
pub use distribute::{Categorized, DistributionPolicy, distribute_balanced, distribute_simple};
pub use error::{QueryError, ValidationError};
pub use hand::Hand;
pub use options::DealOptions;
pub use query::{DealParams, host_link, played_storage_key, player_link};
pub use rng::SeededLcg;
pub use seed::hash_seed;
pub use shuffle::{shuffle_in_place, shuffled};
pub use validate::{sanitize_input, validate_player_count, validate_player_index, validate_seed};
