//! Parse errors for the score data model.

use derive_more::{Display, Error};

/// Failure to build a data-model value from its external form.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The string is not a player identity tag.
    #[display("unknown player tag: {tag:?}")]
    UnknownPlayer { tag: String },

    /// The number is not a sub-forty point value (0, 15 or 30).
    #[display("no point has the value {value}")]
    InvalidPoint { value: u8 },
}
