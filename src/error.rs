//! Error types for the caller-side checks.
//!
//! The dealing algorithms themselves never fail. These errors come from
//! validating user input before a deal is computed and from parsing the
//! URL query that carries that input.

use thiserror::Error;

/// Errors raised when seed or player parameters are outside table policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Seed is empty or only whitespace.
    #[error("seed is empty")]
    EmptySeed,
    /// Player count outside the configured range.
    #[error("player count {count} is outside {min}..={max}")]
    PlayerCountOutOfRange {
        /// Requested player count.
        count: usize,
        /// Smallest allowed count.
        min: usize,
        /// Largest allowed count.
        max: usize,
    },
    /// Player index outside `1..=players`.
    #[error("player {player} is outside 1..={players}")]
    PlayerIndexOutOfRange {
        /// Requested player index (1-based).
        player: usize,
        /// Number of players at the table.
        players: usize,
    },
}

/// Errors raised while reading deal parameters from a URL query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A required parameter is absent.
    #[error("missing parameter `{0}`")]
    MissingParameter(&'static str),
    /// A numeric parameter does not parse.
    #[error("parameter `{0}` is not a number")]
    InvalidNumber(&'static str),
    /// A parameter does not percent-decode to UTF-8.
    #[error("parameter `{0}` is not valid UTF-8")]
    InvalidEncoding(&'static str),
}
