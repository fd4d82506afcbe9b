//! KenKen puzzle encodings

pub use self::cage::{cell_coord, cell_id, Cage, Operator};

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::{fmt, fs, mem};

use rand::Rng;

use crate::collections::square::Square;
use crate::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};

mod cage;
mod generate;
mod parse;

/// A two-digit cell identifier: `row * 10 + col`, 1-indexed
pub type CellId = i32;
pub type Value = i32;
pub type Solution = Square<Value>;

/// Cell identifiers have one digit each for the row and column
pub const MAX_WIDTH: usize = 9;

/// A validated puzzle encoding
#[derive(Clone, Debug, PartialEq)]
pub struct Puzzle {
    /// the width and height of the puzzle
    width: usize,
    cages: Vec<Cage>,
}

impl Puzzle {
    pub fn new(width: usize, cages: Vec<Cage>) -> Result<Self, InvalidPuzzle> {
        if width == 0 || width > MAX_WIDTH {
            return Err(InvalidPuzzle::new(format!(
                "puzzle width must be between 1 and {} (was {})",
                MAX_WIDTH, width
            )));
        }
        for cage in &cages {
            if let Some(&cell) = cage.cells().iter().find(|c| c.row().max(c.col()) >= width) {
                return Err(InvalidPuzzle::new(format!(
                    "cell {:?} is outside of a {}x{} grid",
                    cell, width, width
                )));
            }
        }
        Ok(Self { width, cages })
    }

    /// Decodes a sequence of cage descriptors.
    ///
    /// The first descriptor is the header `[N]` holding the grid dimension.
    pub fn from_descriptors<D: AsRef<[i32]>>(descriptors: &[D]) -> Result<Self, InvalidPuzzle> {
        let (header, cages) = descriptors
            .split_first()
            .ok_or_else(|| InvalidPuzzle::new("missing header descriptor".into()))?;
        let width = match *header.as_ref() {
            [width] if width > 0 => width as usize,
            ref header => {
                return Err(InvalidPuzzle::new(format!(
                    "header descriptor must be [N], found {:?}",
                    header
                )))
            }
        };
        let cages = cages
            .iter()
            .map(|d| Cage::from_descriptor(d.as_ref(), width))
            .collect::<Result<_, _>>()?;
        Puzzle::new(width, cages)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let s = fs::read_to_string(path)?;
        let puzzle = Self::parse(&s)?;
        Ok(puzzle)
    }

    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse::parse_puzzle(s)
    }

    /// Generates a random puzzle that has at least one solution
    pub fn generate(width: usize, rng: &mut impl Rng) -> Self {
        generate::generate_puzzle(width, rng)
    }

    /// The encoding of this puzzle, header first
    pub fn descriptors(&self) -> Vec<Vec<i32>> {
        let mut descriptors = vec![vec![self.width as i32]];
        descriptors.extend(self.cages.iter().map(Cage::descriptor));
        descriptors
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Checks a filled grid against the latin square rule and every cage
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        let width = self.width as Value;
        if solution.width() != self.width || !solution.iter().all(|&v| v >= 1 && v <= width) {
            return false;
        }
        let vectors_unique = solution.vectors().all(|vector| {
            let mut seen = vec![false; self.width];
            solution
                .vector(vector)
                .all(|&v| !mem::replace(&mut seen[v as usize - 1], true))
        });
        vectors_unique
            && self.cages.iter().all(|cage| {
                let values: Vec<_> = cage.cells().iter().map(|&c| solution[c]).collect();
                match cage.operator() {
                    None => values[0] == cage.target(),
                    Some(operator) => operator.satisfied_by(&values, cage.target()),
                }
            })
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "[[{}],", self.width)?;
        for (i, cage) in self.cages.iter().enumerate() {
            let sep = if i + 1 == self.cages.len() { "" } else { "," };
            writeln!(f, " {}{}", cage, sep)?;
        }
        writeln!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::{Cage, Operator, Puzzle};
    use crate::collections::square::Coord;
    use crate::collections::Square;
    use std::convert::TryFrom;

    fn puzzle_3x3() -> Puzzle {
        Puzzle::from_descriptors(&[
            vec![3],
            vec![11, 21, 3, 0],
            vec![12, 22, 2, 1],
            vec![13, 23, 33, 6, 3],
            vec![31, 32, 1, 1],
        ])
        .unwrap()
    }

    #[test]
    fn from_descriptors() {
        let puzzle = puzzle_3x3();
        assert_eq!(3, puzzle.width());
        assert_eq!(4, puzzle.cages().len());
        assert_eq!(
            &Cage::arithmetic(vec![Coord::new(0, 1), Coord::new(1, 1)], Operator::Subtract, 2)
                .unwrap(),
            &puzzle.cages()[1]
        );
    }

    #[test]
    fn descriptors_round_trip() {
        let puzzle = puzzle_3x3();
        assert_eq!(puzzle, Puzzle::from_descriptors(&puzzle.descriptors()).unwrap());
    }

    #[test]
    fn invalid_header() {
        assert!(Puzzle::from_descriptors::<Vec<i32>>(&[]).is_err());
        assert!(Puzzle::from_descriptors(&[vec![0]]).is_err());
        assert!(Puzzle::from_descriptors(&[vec![10]]).is_err());
        assert!(Puzzle::from_descriptors(&[vec![3, 1]]).is_err());
    }

    #[test]
    fn header_only() {
        let puzzle = Puzzle::from_descriptors(&[vec![4]]).unwrap();
        assert_eq!(4, puzzle.width());
        assert!(puzzle.cages().is_empty());
    }

    #[test]
    fn malformed_cage_is_fatal() {
        assert!(Puzzle::from_descriptors(&[vec![3], vec![11]]).is_err());
        assert!(Puzzle::from_descriptors(&[vec![3], vec![]]).is_err());
    }

    #[test]
    fn verify_solution() {
        let puzzle = puzzle_3x3();
        let solution = Square::try_from(vec![1, 3, 2, 2, 1, 3, 3, 2, 1]).unwrap();
        assert!(puzzle.verify_solution(&solution));
        let not_latin = Square::try_from(vec![1, 3, 2, 2, 1, 3, 3, 1, 2]).unwrap();
        assert!(!puzzle.verify_solution(&not_latin));
    }
}
