//! The full KenKen model: grid uniqueness plus cage arithmetic

use crate::csp::{Constraint, Csp};
use crate::model::grid::{add_binary_ne_constraints, grid_variables};
use crate::model::tuples::{satisfying_tuples, scope_domains};
use crate::model::VarGrid;
use crate::puzzle::{Cage, Operator, Puzzle};

/// Compiles a puzzle into a CSP with binary not-equal constraints for the rows
/// and columns and one table constraint per arithmetic cage.
///
/// A fixed cage does not get a constraint. It narrows the fixed domain of its
/// cell instead, and every other constraint touching that cell is built from
/// the narrowed domain.
pub fn kenken_csp_model(puzzle: &Puzzle) -> (Csp, VarGrid) {
    let mut csp = Csp::new("kenken");
    let grid = grid_variables(&mut csp, puzzle.width());
    for cage in puzzle.cages().iter().filter(|cage| cage.is_fixed()) {
        let var = grid[cage.cells()[0]];
        csp.variable_mut(var).restrict_domain(cage.target());
    }
    for (i, cage) in puzzle.cages().iter().enumerate() {
        if let Some(operator) = cage.operator() {
            let constraint = cage_constraint(&csp, &grid, i, cage, operator);
            debug!("{}", constraint);
            csp.add_constraint(constraint);
        }
    }
    add_binary_ne_constraints(&mut csp, &grid);
    info!("{}", csp);
    (csp, grid)
}

fn cage_constraint(
    csp: &Csp,
    grid: &VarGrid,
    index: usize,
    cage: &Cage,
    operator: Operator,
) -> Constraint {
    let scope: Vec<_> = cage.cells().iter().map(|&cell| grid[cell]).collect();
    let target = cage.target();
    let tuples = satisfying_tuples(&scope_domains(csp, &scope), |values| {
        operator.satisfied_by(values, target)
    });
    let mut constraint = Constraint::new(format!("cage{}", index), scope);
    constraint.add_satisfying_tuples(tuples);
    constraint
}
