//! Shared proptest strategies for the score data model.

#![allow(dead_code)]

use proptest::prelude::*;
use tennis_score::{FortyData, Player, Point, PointsData, Score};

pub fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::PlayerOne), Just(Player::PlayerTwo)]
}

pub fn point() -> impl Strategy<Value = Point> {
    prop_oneof![Just(Point::Love), Just(Point::Fifteen), Just(Point::Thirty)]
}

pub fn points_data() -> impl Strategy<Value = PointsData> {
    (point(), point()).prop_map(|(one, two)| PointsData::new(one, two))
}

pub fn forty_data() -> impl Strategy<Value = FortyData> {
    (player(), point()).prop_map(|(player, other_point)| FortyData::new(player, other_point))
}

/// Any score, including ones not reachable in a given number of points.
pub fn score() -> impl Strategy<Value = Score> {
    prop_oneof![
        points_data().prop_map(Score::Points),
        forty_data().prop_map(Score::Forty),
        Just(Score::Deuce),
        player().prop_map(Score::advantage),
        player().prop_map(Score::game),
    ]
}

/// Scores where the game is still in progress.
pub fn live_score() -> impl Strategy<Value = Score> {
    score().prop_filter("game in progress", |s| !s.is_game())
}

/// A sequence of point winners.
pub fn winners(max_len: usize) -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(player(), 0..max_len)
}
