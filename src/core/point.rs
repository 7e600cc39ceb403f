//! Sub-forty point values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// A player's point count while both players are below forty.
///
/// Forty is not a `Point`: reaching it changes the score variant instead.
/// Serialized as its tennis value (0, 15, 30).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Point {
    #[default]
    Love,
    Fifteen,
    Thirty,
}

impl Point {
    /// The next point up, or `None` from `Thirty`.
    ///
    /// ```
    /// use tennis_score::Point;
    ///
    /// assert_eq!(Point::Love.next(), Some(Point::Fifteen));
    /// assert_eq!(Point::Fifteen.next(), Some(Point::Thirty));
    /// assert_eq!(Point::Thirty.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Point::Love => Some(Point::Fifteen),
            Point::Fifteen => Some(Point::Thirty),
            Point::Thirty => None,
        }
    }

    /// The tennis value of the point.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Point::Love => 0,
            Point::Fifteen => 15,
            Point::Thirty => 30,
        }
    }
}

impl From<Point> for u8 {
    fn from(point: Point) -> Self {
        point.value()
    }
}

impl TryFrom<u8> for Point {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Point::Love),
            15 => Ok(Point::Fifteen),
            30 => Ok(Point::Thirty),
            _ => Err(ParseError::InvalidPoint { value }),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Point::Love => "Love",
            Point::Fifteen => "Fifteen",
            Point::Thirty => "Thirty",
        };
        f.write_str(name)
    }
}
