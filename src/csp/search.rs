//! Backtracking search with constraint propagation

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::collections::LinkedAHashSet;
use crate::csp::{ConstraintId, Csp, VarId};
use crate::heuristics::{degree_heuristic, least_constraining_value, minimum_remaining_values};
use crate::puzzle::Value;

/// How constraints are enforced after each assignment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagator {
    /// Only check constraints whose scope is fully assigned
    BacktrackOnly,
    /// Prune the last unassigned variable of each constraint on the assigned variable
    ForwardChecking,
    /// Generalized arc consistency
    Gac,
}

/// Chooses the next variable to assign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableOrdering {
    InputOrder,
    Degree,
    MinimumRemainingValues,
}

/// Chooses the order in which values are tried
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueOrdering {
    DomainOrder,
    LeastConstraining,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// Every variable is assigned and every constraint is satisfied
    Solved,
    Unsolvable,
}

impl SearchResult {
    pub fn is_solved(self) -> bool {
        self == SearchResult::Solved
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// values assigned to variables
    pub decisions: u64,
    /// values removed from current domains by propagation
    pub prunings: u64,
    /// assignments undone
    pub backtracks: u64,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} decisions, {} prunings, {} backtracks",
            self.decisions, self.prunings, self.backtracks
        )
    }
}

/// Depth-first search over the variables of a `Csp`
///
/// On success the variables keep their assignments so the solution can be
/// read back from the `Csp`.
pub struct Backtracking<'a> {
    csp: &'a mut Csp,
    propagator: Propagator,
    var_order: VariableOrdering,
    val_order: ValueOrdering,
    /// pruned values, undone in reverse order on backtrack
    trail: Vec<(VarId, Value)>,
    stats: SearchStats,
}

impl<'a> Backtracking<'a> {
    pub fn new(csp: &'a mut Csp) -> Self {
        Self {
            csp,
            propagator: Propagator::ForwardChecking,
            var_order: VariableOrdering::MinimumRemainingValues,
            val_order: ValueOrdering::DomainOrder,
            trail: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn csp(&self) -> &Csp {
        self.csp
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches for one solution. Any earlier assignments and prunings are
    /// discarded first.
    pub fn search(
        &mut self,
        propagator: Propagator,
        var_order: VariableOrdering,
        val_order: ValueOrdering,
    ) -> SearchResult {
        self.propagator = propagator;
        self.var_order = var_order;
        self.val_order = val_order;
        self.stats = SearchStats::default();
        self.reset();
        info!(
            "Searching {} ({}, {}, {})",
            self.csp, propagator, var_order, val_order
        );
        let solved = self.propagate(None) && self.search_next(1);
        let result = if solved {
            SearchResult::Solved
        } else {
            self.undo(0);
            SearchResult::Unsolvable
        };
        info!("{:?} after {}", result, self.stats);
        result
    }

    fn search_next(&mut self, depth: u32) -> bool {
        let var = match self.select_var() {
            Some(var) => var,
            None => return true,
        };
        for value in self.order_values(var) {
            debug!(
                "Assigning {} = {} (depth={})",
                self.csp.variable(var),
                value,
                depth
            );
            self.stats.decisions += 1;
            let mark = self.trail.len();
            self.csp.variable_mut(var).assign(value);
            if self.propagate(Some(var)) && self.search_next(depth + 1) {
                return true;
            }
            self.csp.variable_mut(var).unassign();
            self.undo(mark);
            self.stats.backtracks += 1;
        }
        false
    }

    fn select_var(&self) -> Option<VarId> {
        match self.var_order {
            VariableOrdering::InputOrder => self.csp.unassigned_vars().next(),
            VariableOrdering::Degree => degree_heuristic(self.csp),
            VariableOrdering::MinimumRemainingValues => minimum_remaining_values(self.csp),
        }
    }

    fn order_values(&self, var: VarId) -> Vec<Value> {
        match self.val_order {
            ValueOrdering::DomainOrder => self.csp.variable(var).cur_domain(),
            ValueOrdering::LeastConstraining => least_constraining_value(self.csp, var)
                .into_iter()
                .map(|(value, _)| value)
                .collect(),
        }
    }

    /// Enforces the constraints on `assigned`, or every constraint before the
    /// first assignment. Returns `false` on a dead end.
    fn propagate(&mut self, assigned: Option<VarId>) -> bool {
        let constraints: Vec<ConstraintId> = match assigned {
            Some(var) => self.csp.constraint_ids_with_var(var).to_vec(),
            None => self.csp.constraint_ids().collect(),
        };
        match self.propagator {
            Propagator::BacktrackOnly => self.check_assigned(&constraints),
            Propagator::ForwardChecking => self.forward_check(&constraints),
            Propagator::Gac => self.enforce_gac(constraints),
        }
    }

    fn check_assigned(&self, constraints: &[ConstraintId]) -> bool {
        constraints.iter().all(|&id| {
            let constraint = self.csp.constraint(id);
            if constraint.is_unsatisfiable() {
                return false;
            }
            match constraint.assigned_values(self.csp) {
                Some(values) => constraint.check(&values),
                None => true,
            }
        })
    }

    fn forward_check(&mut self, constraints: &[ConstraintId]) -> bool {
        for &id in constraints {
            let unassigned: Vec<_> = self
                .csp
                .constraint(id)
                .unassigned_vars(self.csp)
                .unique()
                .collect();
            match *unassigned {
                [] => {
                    if !self.check_assigned(&[id]) {
                        return false;
                    }
                }
                [var] => {
                    if !self.revise(id, var) {
                        return false;
                    }
                }
                _ => {
                    if self.csp.constraint(id).is_unsatisfiable() {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn enforce_gac(&mut self, constraints: Vec<ConstraintId>) -> bool {
        let mut queue: LinkedAHashSet<ConstraintId> = LinkedAHashSet::default();
        queue.extend(constraints);
        while let Some(id) = queue.pop_front() {
            let scope: Vec<_> = self.csp.constraint(id).scope().iter().unique().copied().collect();
            for var in scope {
                if let Some(value) = self.csp.variable(var).assigned_value() {
                    if !self.csp.constraint(id).has_support(self.csp, var, value) {
                        trace!("{} does not support {}", self.csp.constraint(id), value);
                        return false;
                    }
                    continue;
                }
                let before = self.csp.variable(var).cur_domain_size();
                if !self.revise(id, var) {
                    return false;
                }
                if self.csp.variable(var).cur_domain_size() < before {
                    for &other in self.csp.constraint_ids_with_var(var) {
                        if other != id {
                            queue.insert(other);
                        }
                    }
                }
            }
        }
        true
    }

    /// Prunes the values of `var` without support in constraint `id`.
    /// Returns `false` if the current domain of `var` becomes empty.
    fn revise(&mut self, id: ConstraintId, var: VarId) -> bool {
        let unsupported: Vec<Value> = {
            let csp = &*self.csp;
            let constraint = csp.constraint(id);
            csp.variable(var)
                .cur_domain()
                .into_iter()
                .filter(|&value| !constraint.has_support(csp, var, value))
                .collect()
        };
        for value in unsupported {
            self.prune(var, value);
        }
        let wiped_out = self.csp.variable(var).cur_domain_size() == 0;
        if wiped_out {
            trace!("{} has an empty domain", self.csp.variable(var));
        }
        !wiped_out
    }

    fn prune(&mut self, var: VarId, value: Value) {
        if self.csp.variable_mut(var).prune_value(value) {
            trace!("Pruned {} from {}", value, self.csp.variable(var));
            self.trail.push((var, value));
            self.stats.prunings += 1;
        }
    }

    /// Restores every value pruned since the trail had length `mark`
    fn undo(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some((var, value)) = self.trail.pop() {
                self.csp.variable_mut(var).unprune_value(value);
            }
        }
    }

    fn reset(&mut self) {
        self.trail.clear();
        for var in self.csp.var_ids() {
            let variable = self.csp.variable_mut(var);
            variable.unassign();
            variable.restore_cur_domain();
        }
    }
}

macro_rules! named_options {
    ($type:ident, $kind:literal { $($variant:ident => $name:literal,)* }) => {
        impl $type {
            pub const ALL: &'static [$type] = &[$($type::$variant,)*];

            fn name(self) -> &'static str {
                match self {
                    $($type::$variant => $name,)*
                }
            }
        }

        impl FromStr for $type {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $type::ALL
                    .iter()
                    .copied()
                    .find(|option| option.name() == s)
                    .ok_or_else(|| format!("unknown {}: {}", $kind, s))
            }
        }

        impl Display for $type {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_options!(Propagator, "propagator" {
    BacktrackOnly => "bt",
    ForwardChecking => "fc",
    Gac => "gac",
});

named_options!(VariableOrdering, "variable ordering" {
    InputOrder => "input",
    Degree => "dh",
    MinimumRemainingValues => "mrv",
});

named_options!(ValueOrdering, "value ordering" {
    DomainOrder => "domain",
    LeastConstraining => "lcv",
});
