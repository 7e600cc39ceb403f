//! Player identification.
//!
//! A tennis game has exactly two players. `Player` is a closed enum, so a
//! third player cannot be constructed and every `match` over it is
//! exhaustive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// One of the two players in a game.
///
/// Serialized with its identity tag (`"PLAYER_ONE"` / `"PLAYER_TWO"`),
/// displayed as `"Player 1"` / `"Player 2"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Both players, player one first.
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// The opponent of this player.
    ///
    /// ```
    /// use tennis_score::Player;
    ///
    /// assert_eq!(Player::PlayerOne.other(), Player::PlayerTwo);
    /// assert_eq!(Player::PlayerTwo.other(), Player::PlayerOne);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The identity tag used for parsing and serialization.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Player::PlayerOne => "PLAYER_ONE",
            Player::PlayerTwo => "PLAYER_TWO",
        }
    }
}

/// Check whether two player identities are the same player.
#[must_use]
pub fn is_same_player(a: Player, b: Player) -> bool {
    a == b
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "Player 1"),
            Player::PlayerTwo => write!(f, "Player 2"),
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Player::ALL
            .into_iter()
            .find(|p| p.tag() == s)
            .ok_or_else(|| ParseError::UnknownPlayer { tag: s.to_string() })
    }
}
