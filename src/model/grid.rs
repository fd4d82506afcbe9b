//! Row and column uniqueness models

use itertools::Itertools;

use crate::collections::square::Square;
use crate::csp::{Constraint, Csp, Variable};
use crate::model::tuples::{all_different_tuples, satisfying_tuples, scope_domains};
use crate::model::VarGrid;
use crate::puzzle::{cell_id, Puzzle, Value};

/// A grid model with a binary not-equal constraint for every pair of cells
/// sharing a row or a column. Cages are ignored.
pub fn binary_ne_grid(puzzle: &Puzzle) -> (Csp, VarGrid) {
    let mut csp = Csp::new("binary");
    let grid = grid_variables(&mut csp, puzzle.width());
    add_binary_ne_constraints(&mut csp, &grid);
    info!("{}", csp);
    (csp, grid)
}

/// A grid model with one all-different constraint per row and column.
/// Cages are ignored.
pub fn nary_ad_grid(puzzle: &Puzzle) -> (Csp, VarGrid) {
    let mut csp = Csp::new("n-ary");
    let grid = grid_variables(&mut csp, puzzle.width());
    for vector in grid.vectors() {
        let scope: Vec<_> = grid.vector(vector).copied().collect();
        let mut constraint = Constraint::new(vector.to_string(), scope);
        // grid vectors never repeat a cell; a repeated variable could not take distinct values
        if constraint.has_duplicate_vars() {
            warn!("{} has a repeated variable and is left unsatisfiable", vector);
        } else {
            let tuples = all_different_tuples(&scope_domains(&csp, constraint.scope()));
            constraint.add_satisfying_tuples(tuples);
        }
        csp.add_constraint(constraint);
    }
    info!("{}", csp);
    (csp, grid)
}

/// Registers one variable per cell, with domain `1..=width`, row by row
pub(crate) fn grid_variables(csp: &mut Csp, width: usize) -> VarGrid {
    Square::from_fn(width, |coord| {
        let name = format!("V{}", cell_id(coord));
        csp.add_var(Variable::new(name, 1..=width as Value))
    })
}

/// Adds a binary not-equal constraint for every pair of cells in the same row
/// or column. Tuples come from the current fixed domains of the grid variables.
pub(crate) fn add_binary_ne_constraints(csp: &mut Csp, grid: &VarGrid) {
    for vector in grid.vectors() {
        for (&a, &b) in grid.vector(vector).tuple_combinations() {
            let name = format!("{}!={}", csp.variable(a), csp.variable(b));
            let mut constraint = Constraint::new(name, vec![a, b]);
            let tuples = satisfying_tuples(&scope_domains(csp, &[a, b]), |t| t[0] != t[1]);
            constraint.add_satisfying_tuples(tuples);
            csp.add_constraint(constraint);
        }
    }
}
