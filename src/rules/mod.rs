//! Score engine.
//!
//! `advance` is the single transition operation. It matches on the score
//! variant and delegates to the matching per-state rule:
//! - `score_when_points`
//! - `score_when_forty`
//! - `score_when_deuce`
//! - `score_when_advantage`
//! - `score_when_game`
//!
//! The engine keeps no history. Callers thread the returned score into the
//! next call (see `game::Game` for a ready-made record).

pub mod engine;

pub use engine::{
    advance, score_when_advantage, score_when_deuce, score_when_forty, score_when_game,
    score_when_points,
};
