//! Point-by-point record of a game.
//!
//! The engine keeps no history; `Game` is the caller-side owner of the
//! score chain. It also refuses points after the game is won, where the
//! engine itself would silently absorb them.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, warn};

use crate::core::{Player, Score};
use crate::rules::advance;

/// A point that was rejected by a game record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game was already won.
    #[display("game already won by {winner}")]
    AlreadyOver { winner: Player },
}

/// A stored record whose points do not form an engine chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("game record is inconsistent at point {sequence}")]
pub struct RecordError {
    /// First point that does not follow from the one before it. Equal to
    /// the history length when only the current score is wrong.
    pub sequence: u32,
}

/// One recorded point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Position of the point in the game (0-indexed).
    pub sequence: u32,
    /// The player who won the point.
    pub winner: Player,
    /// Score before the point.
    pub before: Score,
    /// Score after the point.
    pub after: Score,
}

/// A single game with its point history.
///
/// ## Example
///
/// ```
/// use tennis_score::{Game, Player, Score};
///
/// let mut game = Game::new();
/// game.play([Player::PlayerOne; 4]).unwrap();
///
/// assert_eq!(game.winner(), Some(Player::PlayerOne));
/// assert_eq!(game.history().len(), 4);
/// assert!(game.point_won_by(Player::PlayerTwo).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRepr")]
pub struct Game {
    start: Score,
    current: Score,
    /// SmallVec keeps typical games (4-10 points) off the heap.
    history: SmallVec<[PointRecord; 8]>,
}

impl Game {
    /// A game at Love - Love.
    #[must_use]
    pub fn new() -> Self {
        Self::from_score(Score::new())
    }

    /// A game starting from an arbitrary score.
    #[must_use]
    pub fn from_score(start: Score) -> Self {
        Self {
            start,
            current: start,
            history: SmallVec::new(),
        }
    }

    /// The current score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.current
    }

    /// The score the game started from.
    #[must_use]
    pub fn start(&self) -> Score {
        self.start
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.current.is_game()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.current.winner()
    }

    /// Number of points recorded.
    #[must_use]
    pub fn points_played(&self) -> usize {
        self.history.len()
    }

    /// All recorded points, in order.
    #[must_use]
    pub fn history(&self) -> &[PointRecord] {
        &self.history
    }

    /// The starting score followed by the score after each point.
    pub fn scores(&self) -> impl Iterator<Item = Score> + '_ {
        std::iter::once(self.start).chain(self.history.iter().map(|r| r.after))
    }

    /// Record a point won by `winner`.
    ///
    /// Returns the new score, or `GameError::AlreadyOver` without recording
    /// anything if the game has a winner.
    #[instrument(skip(self), fields(score = %self.current))]
    pub fn point_won_by(&mut self, winner: Player) -> Result<&Score, GameError> {
        if let Some(game_winner) = self.winner() {
            warn!(%game_winner, "point recorded after game end");
            return Err(GameError::AlreadyOver {
                winner: game_winner,
            });
        }
        Ok(self.record(winner))
    }

    /// Record a sequence of points, stopping at the first rejected one.
    pub fn play<I>(&mut self, winners: I) -> Result<&Score, GameError>
    where
        I: IntoIterator<Item = Player>,
    {
        for winner in winners {
            self.point_won_by(winner)?;
        }
        Ok(&self.current)
    }

    /// Advance and record without the game-over check.
    pub(crate) fn record(&mut self, winner: Player) -> &Score {
        let before = self.current;
        let after = advance(before, winner);
        self.history.push(PointRecord {
            sequence: self.history.len() as u32,
            winner,
            before,
            after,
        });
        self.current = after;

        if let Some(game_winner) = after.winner() {
            debug!(%game_winner, points = self.history.len(), "game over");
        }
        &self.current
    }
}

/// Unchecked serialized form of a `Game`.
#[derive(Deserialize)]
struct GameRepr {
    start: Score,
    current: Score,
    history: SmallVec<[PointRecord; 8]>,
}

impl TryFrom<GameRepr> for Game {
    type Error = RecordError;

    /// Accept only records that `point_won_by` could have produced.
    fn try_from(repr: GameRepr) -> Result<Self, Self::Error> {
        let mut score = repr.start;
        for (i, record) in repr.history.iter().enumerate() {
            let sequence = i as u32;
            let follows = record.sequence == sequence
                && record.before == score
                && !score.is_game()
                && record.after == advance(record.before, record.winner);
            if !follows {
                return Err(RecordError { sequence });
            }
            score = record.after;
        }
        if repr.current != score {
            return Err(RecordError {
                sequence: repr.history.len() as u32,
            });
        }
        Ok(Self {
            start: repr.start,
            current: repr.current,
            history: repr.history,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a sequence of point winners over a score.
///
/// Points after the game is won are absorbed, as in [`advance`].
///
/// ```
/// use tennis_score::{game::replay, Player, Score};
///
/// let p1 = Player::PlayerOne;
/// let p2 = Player::PlayerTwo;
/// let score = replay(Score::new(), [p1, p2, p1, p2, p1, p2]);
/// assert_eq!(score, Score::Deuce);
/// ```
pub fn replay<I>(start: Score, winners: I) -> Score
where
    I: IntoIterator<Item = Player>,
{
    winners.into_iter().fold(start, advance)
}
