//! Caller-side checks on seed and player parameters, plus display escaping.

extern crate alloc;

use alloc::string::String;

use crate::error::ValidationError;
use crate::options::DealOptions;

/// Checks that the seed has at least one non-whitespace character.
///
/// # Errors
///
/// Returns [`ValidationError::EmptySeed`] otherwise.
pub fn validate_seed(seed: &str) -> Result<(), ValidationError> {
    if seed.trim().is_empty() {
        return Err(ValidationError::EmptySeed);
    }
    Ok(())
}

/// Checks the player count against the configured table limits.
///
/// # Errors
///
/// Returns [`ValidationError::PlayerCountOutOfRange`] when `count` is
/// outside `options.min_players..=options.max_players`.
pub const fn validate_player_count(
    count: usize,
    options: &DealOptions,
) -> Result<(), ValidationError> {
    if count < options.min_players || count > options.max_players {
        return Err(ValidationError::PlayerCountOutOfRange {
            count,
            min: options.min_players,
            max: options.max_players,
        });
    }
    Ok(())
}

/// Checks that `player` is a 1-based index into `players`.
///
/// # Errors
///
/// Returns [`ValidationError::PlayerIndexOutOfRange`] otherwise.
pub const fn validate_player_index(player: usize, players: usize) -> Result<(), ValidationError> {
    if player == 0 || player > players {
        return Err(ValidationError::PlayerIndexOutOfRange { player, players });
    }
    Ok(())
}

/// Escapes HTML special characters in user supplied text.
///
/// # Example
///
/// ```
/// use eopdeal::sanitize_input;
///
/// assert_eq!(sanitize_input("<b>A&B</b>"), "&lt;b&gt;A&amp;B&lt;/b&gt;");
/// ```
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
