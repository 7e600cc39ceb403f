//! # tennis-score
//!
//! Score state machine for a single tennis game between two players.
//!
//! ## Design Principles
//!
//! 1. **Closed State Space**: `Score` is an enum with exactly five variants
//!    (points, forty, deuce, advantage, game). Points above Thirty are not
//!    representable, so neither is an invalid score.
//!
//! 2. **Pure Transitions**: `advance(score, winner)` is total, deterministic
//!    and side-effect free. A won game absorbs further points.
//!
//! 3. **Caller-Owned History**: the engine keeps no state. `Game` is an
//!    optional record for callers that want the point history.
//!
//! ## Modules
//!
//! - `core`: players, points, scores, formatting
//! - `rules`: the transition function and its per-state rules
//! - `game`: game record, seeded simulation
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use tennis_score::{advance, Player, Score};
//!
//! let mut score = Score::new();
//! for _ in 0..4 {
//!     score = advance(score, Player::PlayerOne);
//! }
//! assert_eq!(score, Score::game(Player::PlayerOne));
//! assert_eq!(score.to_string(), "Game Player 1");
//! ```

pub mod core;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    describe, is_same_player, FortyData, ParseError, Player, Point, PointsData, Score,
};

pub use crate::rules::advance;

pub use crate::game::{
    replay, simulate, ConfigError, Game, GameError, PointRecord, PointRng, RecordError,
    SimulationConfig, SimulationError,
};
