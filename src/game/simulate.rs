//! Simulated games with seeded point winners.

use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

use super::config::{ConfigError, SimulationConfig};
use super::record::Game;
use super::rng::PointRng;

/// Why a simulation did not produce a finished game.
#[derive(Clone, Debug, Display, Error, From)]
pub enum SimulationError {
    #[display("invalid simulation config: {_0}")]
    #[from]
    Config(ConfigError),

    /// The point limit was hit first; `game` is the unfinished record.
    #[display("no winner after {limit} points")]
    PointLimit { limit: u32, game: Game },
}

/// Simulate a game from Love - Love.
///
/// ```
/// use tennis_score::game::{simulate, SimulationConfig};
///
/// let config = SimulationConfig::default().with_probability(1.0);
/// let game = simulate(&config).unwrap();
/// assert_eq!(game.points_played(), 4);
/// ```
pub fn simulate(config: &SimulationConfig) -> Result<Game, SimulationError> {
    let mut rng = PointRng::new(config.seed);
    simulate_from(Game::new(), config, &mut rng)
}

/// Continue `game` with points drawn from `rng` until it is won.
///
/// A game that is already over is returned as is. The point limit counts
/// only the points played here.
#[instrument(skip(game, rng), fields(start = %game.score()))]
pub fn simulate_from(
    mut game: Game,
    config: &SimulationConfig,
    rng: &mut PointRng,
) -> Result<Game, SimulationError> {
    config.validate()?;

    let mut played = 0;
    while !game.is_over() {
        if played == config.max_points {
            debug!(played, score = %game.score(), "point limit reached");
            return Err(SimulationError::PointLimit {
                limit: config.max_points,
                game,
            });
        }
        let winner = rng.point_winner(config.player_one_win_probability);
        game.record(winner);
        played += 1;
    }
    Ok(game)
}
