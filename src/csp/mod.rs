//! Constraint satisfaction problems over explicit satisfying tuples

pub use self::constraint::{Constraint, Tuple};
pub use self::variable::Variable;

use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use vec_map::VecMap;

use crate::collections::square::Square;
use crate::puzzle::Solution;

mod constraint;
pub mod search;
mod variable;

/// A handle to a variable registered in a `Csp`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Debug for VarId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A handle to a constraint registered in a `Csp`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(usize);

impl ConstraintId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns the variables and constraints of one problem instance
#[derive(Clone, Debug)]
pub struct Csp {
    name: String,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    /// variable index -> constraints with the variable in scope
    var_constraints: VecMap<Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            constraints: Vec::new(),
            var_constraints: VecMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_var(&mut self, variable: Variable) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(variable);
        self.var_constraints.insert(id.0, Vec::new());
        id
    }

    pub fn add_constraint(&mut self, constraint: Constraint) -> ConstraintId {
        let id = ConstraintId(self.constraints.len());
        for &var in constraint.scope() {
            assert!(var.0 < self.variables.len(), "{:?} is not in {}", var, self.name);
            let constraints = &mut self.var_constraints[var.0];
            // a duplicated scope variable is indexed once
            if constraints.last() != Some(&id) {
                constraints.push(id);
            }
        }
        self.constraints.push(constraint);
        id
    }

    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.0]
    }

    pub fn variable_mut(&mut self, id: VarId) -> &mut Variable {
        &mut self.variables[id.0]
    }

    /// Every variable handle, in registration order
    pub fn var_ids(&self) -> impl Iterator<Item = VarId> {
        (0..self.variables.len()).map(VarId)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id.0]
    }

    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        (0..self.constraints.len()).map(ConstraintId)
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Unassigned variables in registration order
    pub fn unassigned_vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.var_ids()
            .filter(move |&id| !self.variable(id).is_assigned())
    }

    /// Handles of the constraints with `var` in scope, in registration order
    pub fn constraint_ids_with_var(&self, var: VarId) -> &[ConstraintId] {
        self.var_constraints
            .get(var.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn constraints_with_var(&self, var: VarId) -> impl Iterator<Item = &Constraint> {
        self.constraint_ids_with_var(var)
            .iter()
            .map(move |&id| self.constraint(id))
    }

    /// Reads back the assigned value of every variable in `grid`.
    /// Returns `None` if any of them is unassigned.
    pub fn values(&self, grid: &Square<VarId>) -> Option<Solution> {
        let mut values = Vec::with_capacity(grid.len());
        for &id in grid.iter() {
            values.push(self.variable(id).assigned_value()?);
        }
        Some(Square::from_fn(grid.width(), |coord| {
            values[coord.row() * grid.width() + coord.col()]
        }))
    }
}

impl Display for Csp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} variables, {} constraints",
            self.name,
            self.variables.len(),
            self.constraints.len()
        )
    }
}
