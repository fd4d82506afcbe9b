use std::fmt;
use std::fmt::{Display, Formatter};

use ahash::AHashSet;

use crate::collections::LinkedAHashSet;
use crate::csp::{Csp, VarId};
use crate::puzzle::Value;

/// One value per scope position, in scope order
pub type Tuple = Box<[Value]>;

/// A table constraint: an ordered scope and the set of tuples that satisfy it
///
/// A constraint without satisfying tuples can never be satisfied.
#[derive(Clone, Debug)]
pub struct Constraint {
    name: String,
    scope: Vec<VarId>,
    tuples: LinkedAHashSet<Tuple>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, scope: impl Into<Vec<VarId>>) -> Self {
        Self {
            name: name.into(),
            scope: scope.into(),
            tuples: LinkedAHashSet::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VarId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// Whether the same variable appears more than once in the scope
    pub fn has_duplicate_vars(&self) -> bool {
        let mut seen: AHashSet<&VarId> = AHashSet::default();
        !self.scope.iter().all(|var| seen.insert(var))
    }

    /// Adds tuples to the satisfying set. Tuples already present are ignored.
    pub fn add_satisfying_tuples<I>(&mut self, tuples: I)
    where
        I: IntoIterator<Item = Tuple>,
    {
        for tuple in tuples {
            debug_assert_eq!(self.scope.len(), tuple.len(), "tuple does not fit {}", self.name);
            if !self.tuples.contains(&tuple) {
                self.tuples.insert(tuple);
            }
        }
    }

    pub fn satisfying_tuples(&self) -> impl Iterator<Item = &[Value]> {
        self.tuples.iter().map(|t| &t[..])
    }

    pub fn tuple_count(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_unsatisfiable(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Whether `values`, in scope order, satisfy the constraint
    pub fn check(&self, values: &[Value]) -> bool {
        self.tuples.contains(values)
    }

    /// The assigned values in scope order, or `None` if some variable is unassigned
    pub fn assigned_values(&self, csp: &Csp) -> Option<Vec<Value>> {
        self.scope
            .iter()
            .map(|&var| csp.variable(var).assigned_value())
            .collect()
    }

    pub fn unassigned_vars<'a>(&'a self, csp: &'a Csp) -> impl Iterator<Item = VarId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(move |&var| !csp.variable(var).is_assigned())
    }

    /// Whether some satisfying tuple gives `value` to `var` while every other
    /// position holds a value from its variable's current domain
    pub fn has_support(&self, csp: &Csp, var: VarId, value: Value) -> bool {
        let position = match self.scope.iter().position(|&v| v == var) {
            Some(position) => position,
            None => return false,
        };
        self.tuples.iter().any(|tuple| {
            tuple[position] == value
                && tuple
                    .iter()
                    .zip(&self.scope)
                    .all(|(&v, &scope_var)| csp.variable(scope_var).in_cur_domain(v))
        })
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} tuples)", self.name, self.tuples.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::csp::{Constraint, Csp, Variable};

    fn tuples(tuples: &[&[i32]]) -> Vec<Box<[i32]>> {
        tuples.iter().map(|&t| t.into()).collect()
    }

    #[test]
    fn tuples_are_a_set() {
        let mut csp = Csp::new("test");
        let a = csp.add_var(Variable::new("a", 1..=2));
        let b = csp.add_var(Variable::new("b", 1..=2));
        let mut c = Constraint::new("ne", vec![a, b]);
        assert!(c.is_unsatisfiable());
        c.add_satisfying_tuples(tuples(&[&[1, 2], &[2, 1], &[1, 2]]));
        assert_eq!(2, c.tuple_count());
        assert!(c.check(&[2, 1]));
        assert!(!c.check(&[1, 1]));
        let order: Vec<_> = c.satisfying_tuples().map(|t| t.to_vec()).collect();
        assert_eq!(vec![vec![1, 2], vec![2, 1]], order);
    }

    #[test]
    fn support() {
        let mut csp = Csp::new("test");
        let a = csp.add_var(Variable::new("a", 1..=3));
        let b = csp.add_var(Variable::new("b", 1..=3));
        let mut c = Constraint::new("lt", vec![a, b]);
        c.add_satisfying_tuples(tuples(&[&[1, 2], &[1, 3], &[2, 3]]));
        let id = csp.add_constraint(c);
        let c = csp.constraint(id);
        assert!(c.has_support(&csp, a, 2));
        assert!(!c.has_support(&csp, a, 3));
        csp.variable_mut(b).prune_value(3);
        let c = csp.constraint(id);
        assert!(!c.has_support(&csp, a, 2));
        assert!(c.has_support(&csp, a, 1));
    }

    #[test]
    fn duplicate_vars() {
        let mut csp = Csp::new("test");
        let a = csp.add_var(Variable::new("a", 1..=3));
        let b = csp.add_var(Variable::new("b", 1..=3));
        assert!(!Constraint::new("ok", vec![a, b]).has_duplicate_vars());
        assert!(Constraint::new("dup", vec![a, b, a]).has_duplicate_vars());
    }
}
