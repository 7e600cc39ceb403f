//! Score data model: players, points, and the five-state score.
//!
//! Everything here is a plain `Copy` value. The transition rules live in
//! `rules`; this module only defines the states they move between.

pub mod error;
pub mod player;
pub mod point;
pub mod score;

pub use error::ParseError;
pub use player::{is_same_player, Player};
pub use point::Point;
pub use score::{describe, FortyData, PointsData, Score};
