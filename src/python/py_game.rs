//! Game record and simulation bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::game::{Game, SimulationConfig, SimulationError};

use super::py_core::{PyPlayer, PyScore};

/// Python wrapper for Game.
///
/// A single game with its point history.
#[pyclass(name = "Game")]
#[derive(Clone, Debug)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Create a game at Love - Love, or from `score` if given.
    #[new]
    #[pyo3(signature = (score = None))]
    fn new(score: Option<PyRef<'_, PyScore>>) -> Self {
        match score {
            Some(score) => Self(Game::from_score(score.0)),
            None => Self(Game::new()),
        }
    }

    /// Record a point won by `winner` and return the new score.
    ///
    /// Raises ValueError if the game is already over.
    fn point_won_by(&mut self, winner: &PyPlayer) -> PyResult<PyScore> {
        self.0
            .point_won_by(winner.0)
            .map(|score| PyScore(*score))
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn score(&self) -> PyScore {
        PyScore(self.0.score())
    }

    fn is_over(&self) -> bool {
        self.0.is_over()
    }

    fn winner(&self) -> Option<PyPlayer> {
        self.0.winner().map(PyPlayer)
    }

    /// The starting score followed by the score after each point.
    fn scores(&self) -> Vec<PyScore> {
        self.0.scores().map(PyScore).collect()
    }

    fn __len__(&self) -> usize {
        self.0.points_played()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(score={:?}, points={})",
            self.0.score().to_string(),
            self.0.points_played()
        )
    }
}

/// Simulate a game from Love - Love.
///
/// # Arguments
/// - seed: RNG seed for deterministic games
/// - player_one_win_probability: chance player one wins each point
/// - max_points: give up after this many points
#[pyfunction]
#[pyo3(signature = (seed = 42, player_one_win_probability = 0.5, max_points = 64))]
pub fn simulate(seed: u64, player_one_win_probability: f64, max_points: u32) -> PyResult<PyGame> {
    let config = SimulationConfig::default()
        .with_seed(seed)
        .with_probability(player_one_win_probability)
        .with_max_points(max_points);
    crate::game::simulate(&config)
        .map(PyGame)
        .map_err(|e: SimulationError| PyValueError::new_err(e.to_string()))
}
