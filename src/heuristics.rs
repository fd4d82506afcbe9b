//! Variable and value ordering heuristics for backtracking search
//!
//! Every heuristic reads the current state of the CSP and changes nothing.

use crate::csp::{Csp, VarId};
use crate::puzzle::Value;

/// Degree heuristic: the unassigned variable sharing constraints with the most
/// other variables. Ties go to the variable found first.
///
/// Returns `None` when every variable is assigned.
pub fn degree_heuristic(csp: &Csp) -> Option<VarId> {
    let mut best: Option<(VarId, usize)> = None;
    for var in csp.unassigned_vars() {
        let degree = degree(csp, var);
        if best.map_or(true, |(_, max)| degree > max) {
            best = Some((var, degree));
        }
    }
    best.map(|(var, _)| var)
}

/// Minimum remaining values: the unassigned variable with the smallest current
/// domain. Ties go to the variable found first.
///
/// Returns `None` when every variable is assigned.
pub fn minimum_remaining_values(csp: &Csp) -> Option<VarId> {
    let mut best: Option<(VarId, usize)> = None;
    for var in csp.unassigned_vars() {
        let size = csp.variable(var).cur_domain_size();
        if best.map_or(true, |(_, min)| size < min) {
            best = Some((var, size));
        }
    }
    best.map(|(var, _)| var)
}

/// Least constraining value: the current domain of `var`, paired with the
/// number of other unassigned variables that still have each value in their
/// current domain, sorted by that count. Equal counts keep domain order.
pub fn least_constraining_value(csp: &Csp, var: VarId) -> Vec<(Value, usize)> {
    let others: Vec<_> = csp.unassigned_vars().filter(|&other| other != var).collect();
    let mut values: Vec<_> = csp
        .variable(var)
        .cur_domain()
        .into_iter()
        .map(|value| {
            let conflicts = others
                .iter()
                .filter(|&&other| csp.variable(other).in_cur_domain(value))
                .count();
            (value, conflicts)
        })
        .collect();
    values.sort_by_key(|&(_, conflicts)| conflicts);
    values
}

/// The number of other variables across every constraint on `var`
fn degree(csp: &Csp, var: VarId) -> usize {
    csp.constraints_with_var(var)
        .map(|constraint| constraint.arity() - 1)
        .sum()
}
