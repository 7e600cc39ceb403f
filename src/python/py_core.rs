//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Player, Score};

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Create a player from its tag ("PLAYER_ONE" or "PLAYER_TWO").
    #[new]
    fn new(tag: &str) -> PyResult<Self> {
        tag.parse()
            .map(Self)
            .map_err(|e: crate::core::ParseError| PyValueError::new_err(e.to_string()))
    }

    /// The opponent.
    fn other(&self) -> Self {
        Self(self.0.other())
    }

    #[getter]
    fn tag(&self) -> &'static str {
        self.0.tag()
    }

    fn __repr__(&self) -> String {
        format!("Player({:?})", self.0.tag())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 as u64
    }
}

/// Python wrapper for Score.
#[pyclass(name = "Score")]
#[derive(Clone, Debug)]
pub struct PyScore(pub Score);

#[pymethods]
impl PyScore {
    /// Create a score at Love - Love.
    #[new]
    fn new() -> Self {
        Self(Score::new())
    }

    /// The score after `winner` wins the next point.
    fn advance(&self, winner: &PyPlayer) -> Self {
        Self(self.0.advance(winner.0))
    }

    /// Variant name: POINTS, FORTY, DEUCE, ADVANTAGE or GAME.
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Score::Points(_) => "POINTS",
            Score::Forty(_) => "FORTY",
            Score::Deuce => "DEUCE",
            Score::Advantage { .. } => "ADVANTAGE",
            Score::Game { .. } => "GAME",
        }
    }

    fn is_game(&self) -> bool {
        self.0.is_game()
    }

    /// The winner if the game is over, None otherwise.
    fn winner(&self) -> Option<PyPlayer> {
        self.0.winner().map(PyPlayer)
    }

    fn __repr__(&self) -> String {
        format!("Score({:?})", self.0.to_string())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
