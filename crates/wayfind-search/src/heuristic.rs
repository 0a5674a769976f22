//! Distance estimates for A*.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use wayfind_core::Cell;

/// Remaining-cost estimate between two cells.
///
/// Admissibility depends on the movement model: every variant is
/// admissible for 4-connected movement, while only [`Octile`](Self::Octile)
/// and [`Euclidean`](Self::Euclidean) are admissible once diagonal steps
/// cost `sqrt(2)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `|dr| + |dc|`.
    Manhattan,
    /// `sqrt(dr² + dc²)`.
    Euclidean,
    /// `(sqrt(2) - 1) * min(|dr|, |dc|) + max(|dr|, |dc|)`.
    #[default]
    Octile,
}

impl Heuristic {
    /// Estimate the cost from `from` to `to`.
    pub fn estimate(self, from: Cell, to: Cell) -> f64 {
        let dr = f64::from(to.row - from.row).abs();
        let dc = f64::from(to.col - from.col).abs();
        match self {
            Self::Manhattan => dr + dc,
            Self::Euclidean => dr.hypot(dc),
            Self::Octile => {
                let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
                (std::f64::consts::SQRT_2 - 1.0) * lo + hi
            }
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Octile => "octile",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Heuristic::from_str`] for unknown names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseHeuristicError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic {:?} (expected manhattan, euclidean or octile)",
            self.input
        )
    }
}

impl Error for ParseHeuristicError {}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "octile" => Ok(Self::Octile),
            _ => Err(ParseHeuristicError {
                input: s.to_string(),
            }),
        }
    }
}
