//! Compile puzzles into constraint satisfaction problems

pub use self::cage::kenken_csp_model;
pub use self::grid::{binary_ne_grid, nary_ad_grid};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::collections::square::Square;
use crate::csp::{Csp, VarId};
use crate::puzzle::Puzzle;

mod cage;
mod grid;
pub mod tuples;

/// The variable of each cell, row-major
pub type VarGrid = Square<VarId>;

/// Selects one of the model builders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    /// Pairwise not-equal constraints for rows and columns
    BinaryNe,
    /// One all-different constraint per row and column
    NaryAd,
    /// Binary row and column constraints plus cage constraints
    Kenken,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::BinaryNe, ModelKind::NaryAd, ModelKind::Kenken];

    pub fn build(self, puzzle: &Puzzle) -> (Csp, VarGrid) {
        match self {
            ModelKind::BinaryNe => binary_ne_grid(puzzle),
            ModelKind::NaryAd => nary_ad_grid(puzzle),
            ModelKind::Kenken => kenken_csp_model(puzzle),
        }
    }

    /// Whether solutions of the model respect the cages
    pub fn uses_cages(self) -> bool {
        self == ModelKind::Kenken
    }

    fn name(self) -> &'static str {
        match self {
            ModelKind::BinaryNe => "binary",
            ModelKind::NaryAd => "nary",
            ModelKind::Kenken => "kenken",
        }
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown model: {}", s))
    }
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
