//! Score state of a single game.
//!
//! ## Variants
//!
//! A game is always in exactly one of five states:
//!
//! | Variant     | Meaning                                        |
//! |-------------|------------------------------------------------|
//! | `Points`    | both players below forty                       |
//! | `Forty`     | one player at forty, the other below           |
//! | `Deuce`     | tied at forty or above                         |
//! | `Advantage` | one point ahead from deuce                     |
//! | `Game`      | the game is won (terminal)                     |
//!
//! Values are immutable; advancing a score produces a new one.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::point::Point;

/// Per-player points while both players are below forty.
///
/// A two-field struct rather than a map, so there is no missing-player case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PointsData {
    pub player_one: Point,
    pub player_two: Point,
}

impl PointsData {
    #[must_use]
    pub const fn new(player_one: Point, player_two: Point) -> Self {
        Self {
            player_one,
            player_two,
        }
    }

    /// Copy with one player's point replaced.
    #[must_use]
    pub fn with(mut self, player: Player, point: Point) -> Self {
        self[player] = point;
        self
    }
}

impl Index<Player> for PointsData {
    type Output = Point;

    fn index(&self, player: Player) -> &Self::Output {
        match player {
            Player::PlayerOne => &self.player_one,
            Player::PlayerTwo => &self.player_two,
        }
    }
}

impl IndexMut<Player> for PointsData {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        match player {
            Player::PlayerOne => &mut self.player_one,
            Player::PlayerTwo => &mut self.player_two,
        }
    }
}

/// One player at forty, with the opponent's sub-forty point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortyData {
    /// The player at forty.
    pub player: Player,
    /// The opponent's point.
    pub other_point: Point,
}

impl FortyData {
    #[must_use]
    pub const fn new(player: Player, other_point: Point) -> Self {
        Self {
            player,
            other_point,
        }
    }
}

/// Score of a single game.
///
/// ```
/// use tennis_score::{Player, Point, Score};
///
/// let score = Score::new()
///     .advance(Player::PlayerOne)
///     .advance(Player::PlayerTwo);
/// assert_eq!(score, Score::points(Point::Fifteen, Point::Fifteen));
/// assert_eq!(score.to_string(), "Fifteen - Fifteen");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Score {
    /// Both players below forty.
    Points(PointsData),
    /// One player at forty.
    Forty(FortyData),
    /// Tied at forty or above.
    Deuce,
    /// `player` leads by one point from deuce.
    Advantage { player: Player },
    /// `player` has won the game.
    Game { player: Player },
}

impl Score {
    /// The score at the start of a game: Love - Love.
    #[must_use]
    pub const fn new() -> Self {
        Score::Points(PointsData::new(Point::Love, Point::Love))
    }

    #[must_use]
    pub const fn points(player_one: Point, player_two: Point) -> Self {
        Score::Points(PointsData::new(player_one, player_two))
    }

    #[must_use]
    pub const fn forty(player: Player, other_point: Point) -> Self {
        Score::Forty(FortyData::new(player, other_point))
    }

    #[must_use]
    pub const fn deuce() -> Self {
        Score::Deuce
    }

    #[must_use]
    pub const fn advantage(player: Player) -> Self {
        Score::Advantage { player }
    }

    #[must_use]
    pub const fn game(player: Player) -> Self {
        Score::Game { player }
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_game(&self) -> bool {
        matches!(self, Score::Game { .. })
    }

    /// The winner, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self {
            Score::Game { player } => Some(*player),
            _ => None,
        }
    }

    /// The score after `winner` wins the next point.
    ///
    /// See [`crate::rules::advance`].
    #[must_use]
    pub fn advance(self, winner: Player) -> Self {
        crate::rules::advance(self, winner)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Points(points) => write!(f, "{} - {}", points.player_one, points.player_two),
            Score::Forty(forty) => {
                write!(f, "Forty - {} ({} at 40)", forty.other_point, forty.player)
            }
            Score::Deuce => write!(f, "Deuce"),
            Score::Advantage { player } => write!(f, "Advantage {player}"),
            Score::Game { player } => write!(f, "Game {player}"),
        }
    }
}

/// Human-readable rendering of a score.
#[must_use]
pub fn describe(score: &Score) -> String {
    score.to_string()
}
