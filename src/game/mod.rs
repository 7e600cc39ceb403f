//! Caller-side game handling built on the score engine.
//!
//! - `record`: `Game`, a point-by-point record of one game
//! - `config`: `SimulationConfig`
//! - `rng`: `PointRng`, deterministic point winners
//! - `simulate`: play out games from a config

pub mod config;
pub mod record;
pub mod rng;
pub mod simulate;

pub use config::{ConfigError, SimulationConfig};
pub use record::{replay, Game, GameError, PointRecord, RecordError};
pub use rng::PointRng;
pub use simulate::{simulate, simulate_from, SimulationError};
