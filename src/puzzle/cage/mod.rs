pub use self::operator::Operator;

use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::collections::square::Coord;
use crate::error::InvalidPuzzle;
use crate::puzzle::{CellId, Value};

mod operator;

/// A cage in a KenKen puzzle
///
/// A cage with one cell and no operator fixes the value of that cell.
/// Every other cage has an operator and a target number.
#[derive(Clone, Debug, PartialEq)]
pub struct Cage {
    /// The positions of the cells in this cage, in descriptor order
    cells: Box<[Coord]>,

    /// The math operator that must be used with the numbers in the cage
    /// to produce the target number
    operator: Option<Operator>,

    /// The target number that must be produced using the numbers in this cage
    target: Value,
}

impl Cage {
    /// A cage fixing a single cell to `value`
    pub fn fixed(cell: Coord, value: Value) -> Self {
        Self {
            cells: Box::new([cell]),
            operator: None,
            target: value,
        }
    }

    pub fn arithmetic(
        cells: impl Into<Box<[Coord]>>,
        operator: Operator,
        target: Value,
    ) -> Result<Self, InvalidPuzzle> {
        let cage = Cage {
            cells: cells.into(),
            operator: Some(operator),
            target,
        };
        validate(&cage)?;
        Ok(cage)
    }

    /// Decodes one cage descriptor: `[cell, value]` or `[cell.., target, code]`
    pub fn from_descriptor(descriptor: &[i32], width: usize) -> Result<Self, InvalidPuzzle> {
        match *descriptor {
            [] | [_] => Err(InvalidPuzzle::new(format!(
                "cage descriptor {:?} must have at least 2 elements",
                descriptor
            ))),
            [cell, value] => {
                let coord = cell_coord(cell, width)?;
                if value < 1 || value as usize > width {
                    return Err(InvalidPuzzle::new(format!(
                        "value {} of cell {} is outside of 1..={}",
                        value, cell, width
                    )));
                }
                Ok(Cage::fixed(coord, value))
            }
            _ => {
                let (cells, tail) = descriptor.split_at(descriptor.len() - 2);
                let (target, code) = (tail[0], tail[1]);
                let operator = Operator::from_code(code).ok_or_else(|| {
                    InvalidPuzzle::new(format!("invalid operation code {}", code))
                })?;
                let cells = cells
                    .iter()
                    .map(|&cell| cell_coord(cell, width))
                    .collect::<Result<Vec<_>, _>>()?;
                Cage::arithmetic(cells, operator, target)
            }
        }
    }

    /// The descriptor form of this cage
    pub fn descriptor(&self) -> Vec<i32> {
        let mut descriptor: Vec<i32> = self.cells.iter().map(|&c| cell_id(c)).collect();
        descriptor.push(self.target);
        if let Some(operator) = self.operator {
            descriptor.push(operator.code());
        }
        descriptor
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.target
    }

    /// The math operator on the cage, `None` for a fixed cell
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// The positions of the cells in the cage
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn is_fixed(&self) -> bool {
        self.operator.is_none()
    }
}

impl Display for Cage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.descriptor().iter().join(","))
    }
}

fn validate(cage: &Cage) -> Result<(), InvalidPuzzle> {
    if cage.cells.is_empty() {
        return Err(InvalidPuzzle::new("cage cells must not be empty".into()));
    }
    if let Some((a, _)) = cage.cells.iter().tuple_combinations().find(|(a, b)| a == b) {
        return Err(InvalidPuzzle::new(format!(
            "cell {} appears more than once in a cage",
            cell_id(*a)
        )));
    }
    Ok(())
}

/// Decodes a cell identifier (`row * 10 + col`, 1-indexed)
pub fn cell_coord(cell_id: CellId, width: usize) -> Result<Coord, InvalidPuzzle> {
    let (row, col) = (cell_id / 10, cell_id % 10);
    let in_range = |n: i32| n >= 1 && n as usize <= width;
    if !in_range(row) || !in_range(col) {
        return Err(InvalidPuzzle::new(format!(
            "cell {} is outside of a {}x{} grid",
            cell_id, width, width
        )));
    }
    Ok(Coord::new(row as usize - 1, col as usize - 1))
}

/// Encodes a coordinate as a cell identifier
pub fn cell_id(coord: Coord) -> CellId {
    (coord.row() as i32 + 1) * 10 + coord.col() as i32 + 1
}

#[cfg(test)]
mod tests {
    use super::{cell_coord, cell_id, Cage, Operator};
    use crate::collections::square::Coord;

    #[test]
    fn decode_cell() {
        assert_eq!(Coord::new(0, 0), cell_coord(11, 9).unwrap());
        assert_eq!(Coord::new(2, 1), cell_coord(32, 3).unwrap());
        assert_eq!(32, cell_id(Coord::new(2, 1)));
    }

    #[test]
    fn decode_cell_out_of_range() {
        assert!(cell_coord(41, 3).is_err());
        assert!(cell_coord(14, 3).is_err());
        assert!(cell_coord(10, 3).is_err());
        assert!(cell_coord(-11, 3).is_err());
    }

    #[test]
    fn fixed_descriptor() {
        let cage = Cage::from_descriptor(&[11, 7], 9).unwrap();
        assert!(cage.is_fixed());
        assert_eq!(7, cage.target());
        assert_eq!(&[Coord::new(0, 0)][..], cage.cells());
    }

    #[test]
    fn arithmetic_descriptor() {
        let cage = Cage::from_descriptor(&[21, 11, 12, 6, 3], 3).unwrap();
        assert_eq!(Some(Operator::Multiply), cage.operator());
        assert_eq!(6, cage.target());
        assert_eq!(
            &[Coord::new(1, 0), Coord::new(0, 0), Coord::new(0, 1)][..],
            cage.cells()
        );
        assert_eq!(vec![21, 11, 12, 6, 3], cage.descriptor());
        assert_eq!("[21,11,12,6,3]", cage.to_string());
    }

    #[test]
    fn malformed_descriptors() {
        assert!(Cage::from_descriptor(&[], 3).is_err());
        assert!(Cage::from_descriptor(&[11], 3).is_err());
        assert!(Cage::from_descriptor(&[11, 12, 3, 4], 3).is_err());
        assert!(Cage::from_descriptor(&[11, 11, 2, 0], 3).is_err());
    }

    #[test]
    fn fixed_value_out_of_range() {
        assert!(Cage::from_descriptor(&[11, 7], 3).is_err());
        assert!(Cage::from_descriptor(&[11, 0], 3).is_err());
        assert!(Cage::from_descriptor(&[11, -1], 3).is_err());
        assert!(Cage::from_descriptor(&[11, 3], 3).is_ok());
    }
}
