//! Python bindings for the tennis score engine.
//!
//! # Quick Start
//!
//! ```python
//! import tennis_score as ts
//!
//! one = ts.Player("PLAYER_ONE")
//! score = ts.Score()
//! for _ in range(3):
//!     score = ts.advance(score, one)
//! print(ts.describe(score))  # Forty - Love (Player 1 at 40)
//!
//! game = ts.simulate(seed=7)
//! print(game.winner(), len(game))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// The score after `winner` wins the next point.
#[pyfunction]
fn advance(score: &PyScore, winner: &PyPlayer) -> PyScore {
    PyScore(crate::rules::advance(score.0, winner.0))
}

/// Human-readable rendering of a score.
#[pyfunction]
fn describe(score: &PyScore) -> String {
    crate::core::describe(&score.0)
}

/// tennis_score: score state machine for a single tennis game.
#[pymodule]
fn tennis_score(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyScore>()?;
    m.add_class::<PyGame>()?;

    m.add_function(wrap_pyfunction!(advance, m)?)?;
    m.add_function(wrap_pyfunction!(describe, m)?)?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;

    Ok(())
}
