//! Deal configuration options.

use crate::deck::{CategoryRanks, STANDARD_TABLE};
use crate::distribute::DistributionPolicy;

/// Configuration options for a deal.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use eopdeal::{DealOptions, DistributionPolicy};
///
/// let options = DealOptions::default()
///     .with_policy(DistributionPolicy::Simple)
///     .with_max_players(8)
///     .with_sort_hands(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealOptions {
    /// How the shuffled deck is split.
    pub policy: DistributionPolicy,
    /// Smallest accepted player count.
    pub min_players: usize,
    /// Largest accepted player count.
    pub max_players: usize,
    /// Category/rank table the deck is built from.
    pub table: &'static [CategoryRanks],
    /// Whether hands are sorted by category code and rank for display.
    pub sort_hands: bool,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            policy: DistributionPolicy::Balanced,
            min_players: 2,
            max_players: 32,
            table: STANDARD_TABLE,
            sort_hands: true,
        }
    }
}

impl DealOptions {
    /// Sets the distribution policy.
    ///
    /// # Example
    ///
    /// ```
    /// use eopdeal::{DealOptions, DistributionPolicy};
    ///
    /// let options = DealOptions::default().with_policy(DistributionPolicy::Simple);
    /// assert_eq!(options.policy, DistributionPolicy::Simple);
    /// ```
    #[must_use]
    pub const fn with_policy(mut self, policy: DistributionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the smallest accepted player count.
    ///
    /// # Example
    ///
    /// ```
    /// use eopdeal::DealOptions;
    ///
    /// let options = DealOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Sets the largest accepted player count.
    ///
    /// # Example
    ///
    /// ```
    /// use eopdeal::DealOptions;
    ///
    /// let options = DealOptions::default().with_max_players(10);
    /// assert_eq!(options.max_players, 10);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Sets the deck table.
    #[must_use]
    pub const fn with_table(mut self, table: &'static [CategoryRanks]) -> Self {
        self.table = table;
        self
    }

    /// Sets whether hands are sorted for display.
    ///
    /// # Example
    ///
    /// ```
    /// use eopdeal::DealOptions;
    ///
    /// let options = DealOptions::default().with_sort_hands(false);
    /// assert!(!options.sort_hands);
    /// ```
    #[must_use]
    pub const fn with_sort_hands(mut self, sort: bool) -> Self {
        self.sort_hands = sort;
        self
    }
}
