//! Score transition rules.
//!
//! `advance` dispatches on the current score variant to one rule per state.
//! Each rule is a pure function of its sub-state and the point winner.

use tracing::instrument;

use crate::core::{is_same_player, FortyData, Player, PointsData, Score};

/// The score after `winner` wins the next point.
///
/// Total and deterministic. A finished game is returned unchanged.
///
/// ```
/// use tennis_score::{advance, Player, Point, Score};
///
/// let deuce = advance(Score::forty(Player::PlayerOne, Point::Thirty), Player::PlayerTwo);
/// assert_eq!(deuce, Score::Deuce);
/// assert_eq!(advance(deuce, Player::PlayerTwo), Score::advantage(Player::PlayerTwo));
/// ```
#[instrument(level = "trace", ret)]
pub fn advance(current: Score, winner: Player) -> Score {
    match current {
        Score::Points(points) => score_when_points(points, winner),
        Score::Forty(forty) => score_when_forty(forty, winner),
        Score::Deuce => score_when_deuce(winner),
        Score::Advantage { player } => score_when_advantage(player, winner),
        Score::Game { .. } => score_when_game(current),
    }
}

/// Both players below forty.
///
/// The winner moves up one point; from Thirty they reach forty and the
/// opponent's point carries over.
#[instrument(level = "trace")]
pub fn score_when_points(current: PointsData, winner: Player) -> Score {
    let other_point = current[winner.other()];
    match current[winner].next() {
        Some(point) => Score::Points(current.with(winner, point)),
        None => Score::forty(winner, other_point),
    }
}

/// One player at forty.
#[instrument(level = "trace")]
pub fn score_when_forty(current: FortyData, winner: Player) -> Score {
    if is_same_player(current.player, winner) {
        return Score::game(winner);
    }
    match current.other_point.next() {
        Some(point) => Score::forty(current.player, point),
        None => Score::deuce(),
    }
}

/// Deuce always goes to advantage for the point winner.
#[instrument(level = "trace")]
pub fn score_when_deuce(winner: Player) -> Score {
    Score::advantage(winner)
}

/// `advantaged` leads from deuce.
#[instrument(level = "trace")]
pub fn score_when_advantage(advantaged: Player, winner: Player) -> Score {
    if is_same_player(advantaged, winner) {
        Score::game(winner)
    } else {
        Score::deuce()
    }
}

/// A finished game absorbs every further point.
#[instrument(level = "trace")]
pub fn score_when_game(current: Score) -> Score {
    current
}
