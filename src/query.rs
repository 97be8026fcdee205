//! Deal parameters carried in page URLs.
//!
//! The host shares one link per player; each link carries the seed, the
//! player's 1-based index and the player count. The pages read them back
//! with [`DealParams::parse`].

extern crate alloc;

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::QueryError;

/// Characters escaped in a query component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const STORAGE_KEY_PREFIX: &str = "eop_played_";

/// Seed and player parameters of a host or player page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealParams {
    /// Shared seed text.
    pub seed: String,
    /// 1-based player index; absent on the host page.
    pub player: Option<usize>,
    /// Number of players.
    pub players: usize,
}

impl DealParams {
    /// Parses a form-urlencoded query string, with or without leading `?`.
    ///
    /// The first occurrence of a key wins and `+` decodes to a space.
    /// Range checks are left to [`crate::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if `seed` or `players` is missing, if a number
    /// does not parse, or if a value is not UTF-8 after decoding.
    ///
    /// # Example
    ///
    /// ```
    /// use eopdeal::DealParams;
    ///
    /// let params = DealParams::parse("?seed=Team+Red&player=2&players=5").unwrap();
    /// assert_eq!(params.seed, "Team Red");
    /// assert_eq!(params.player, Some(2));
    /// assert_eq!(params.players, 5);
    /// ```
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut seed = None;
        let mut player = None;
        let mut players = None;

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "seed" if seed.is_none() => seed = Some(decode("seed", value)?),
                "player" if player.is_none() => player = Some(parse_number("player", value)?),
                "players" if players.is_none() => {
                    players = Some(parse_number("players", value)?);
                }
                _ => {}
            }
        }

        Ok(Self {
            seed: seed.ok_or(QueryError::MissingParameter("seed"))?,
            player,
            players: players.ok_or(QueryError::MissingParameter("players"))?,
        })
    }

    /// Encodes the parameters as a query string without leading `?`.
    #[must_use]
    pub fn to_query(&self) -> String {
        let seed = utf8_percent_encode(&self.seed, COMPONENT);
        match self.player {
            Some(player) => format!("seed={seed}&player={player}&players={}", self.players),
            None => format!("seed={seed}&players={}", self.players),
        }
    }
}

fn decode(name: &'static str, value: &str) -> Result<String, QueryError> {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| QueryError::InvalidEncoding(name))
}

fn parse_number(name: &'static str, value: &str) -> Result<usize, QueryError> {
    decode(name, value)?
        .trim()
        .parse()
        .map_err(|_| QueryError::InvalidNumber(name))
}

/// Builds the host page link for a table.
///
/// # Example
///
/// ```
/// use eopdeal::host_link;
///
/// assert_eq!(
///     host_link("https://example.org/eop/", "Team Red", 4),
///     "https://example.org/eop/host.html?seed=Team%20Red&players=4"
/// );
/// ```
#[must_use]
pub fn host_link(base: &str, seed: &str, players: usize) -> String {
    let params = DealParams {
        seed: seed.to_string(),
        player: None,
        players,
    };
    format!("{}/host.html?{}", base.trim_end_matches('/'), params.to_query())
}

/// Builds the link a single player opens to see their hand.
#[must_use]
pub fn player_link(base: &str, seed: &str, player: usize, players: usize) -> String {
    let params = DealParams {
        seed: seed.to_string(),
        player: Some(player),
        players,
    };
    format!("{}/player.html?{}", base.trim_end_matches('/'), params.to_query())
}

/// Returns the local storage key under which a player's played cards live.
#[must_use]
pub fn played_storage_key(seed: &str, player: usize) -> String {
    format!("{STORAGE_KEY_PREFIX}{seed}_{player}")
}
