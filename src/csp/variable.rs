use std::fmt;
use std::fmt::{Display, Formatter};

use crate::collections::range_set::RangeSet;
use crate::puzzle::Value;

/// A CSP variable
///
/// The fixed domain is set when the model is compiled. The current domain and
/// the assignment belong to the search and shrink and grow as it proceeds.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    domain: Vec<Value>,
    /// positions in `domain` that have not been pruned
    live: RangeSet,
    assigned: Option<Value>,
}

impl Variable {
    /// Creates a variable. Repeated domain values are dropped.
    pub fn new(name: impl Into<String>, domain: impl IntoIterator<Item = Value>) -> Self {
        let mut values: Vec<Value> = Vec::new();
        for value in domain {
            if !values.contains(&value) {
                values.push(value);
            }
        }
        let live = RangeSet::with_all(values.len());
        Self {
            name: name.into(),
            domain: values,
            live,
            assigned: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed domain
    pub fn domain(&self) -> &[Value] {
        &self.domain
    }

    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }

    /// Values not yet pruned, in fixed domain order.
    /// An assigned variable has only its assigned value.
    pub fn cur_domain(&self) -> Vec<Value> {
        match self.assigned {
            Some(value) => vec![value],
            None => self.live.iter().map(|i| self.domain[i]).collect(),
        }
    }

    pub fn cur_domain_size(&self) -> usize {
        match self.assigned {
            Some(_) => 1,
            None => self.live.len(),
        }
    }

    pub fn in_cur_domain(&self, value: Value) -> bool {
        match self.assigned {
            Some(assigned) => assigned == value,
            None => self.position(value).map_or(false, |i| self.live.contains(i)),
        }
    }

    /// Removes a value from the current domain. Returns `false` if it was not present.
    pub fn prune_value(&mut self, value: Value) -> bool {
        match self.position(value) {
            Some(i) => self.live.remove(i),
            None => false,
        }
    }

    /// Returns a pruned value to the current domain
    pub fn unprune_value(&mut self, value: Value) -> bool {
        match self.position(value) {
            Some(i) => self.live.insert(i),
            None => false,
        }
    }

    /// Makes the current domain equal to the fixed domain again
    pub fn restore_cur_domain(&mut self) {
        self.live.fill();
    }

    pub fn assign(&mut self, value: Value) {
        debug_assert!(self.assigned.is_none(), "{} is already assigned", self.name);
        debug_assert!(self.in_cur_domain(value));
        self.assigned = Some(value);
    }

    pub fn unassign(&mut self) {
        self.assigned = None;
    }

    pub fn assigned_value(&self) -> Option<Value> {
        self.assigned
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    /// Narrows the fixed domain to `value`. The domain becomes empty if
    /// `value` is not in it.
    pub(crate) fn restrict_domain(&mut self, value: Value) {
        debug_assert!(self.assigned.is_none());
        self.domain.retain(|&v| v == value);
        self.live = RangeSet::with_all(self.domain.len());
    }

    fn position(&self, value: Value) -> Option<usize> {
        self.domain.iter().position(|&v| v == value)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::Variable;

    #[test]
    fn prune_and_restore() {
        let mut var = Variable::new("x", 1..=4);
        assert_eq!(4, var.cur_domain_size());
        assert!(var.prune_value(2));
        assert!(!var.prune_value(2));
        assert!(!var.prune_value(9));
        assert_eq!(vec![1, 3, 4], var.cur_domain());
        assert!(!var.in_cur_domain(2));
        assert!(var.unprune_value(2));
        var.prune_value(1);
        var.prune_value(4);
        var.restore_cur_domain();
        assert_eq!(vec![1, 2, 3, 4], var.cur_domain());
        assert_eq!(&[1, 2, 3, 4], var.domain());
    }

    #[test]
    fn assigned_domain() {
        let mut var = Variable::new("x", vec![3, 1, 3, 2]);
        assert_eq!(&[3, 1, 2], var.domain());
        var.assign(1);
        assert_eq!(vec![1], var.cur_domain());
        assert_eq!(1, var.cur_domain_size());
        assert!(!var.in_cur_domain(3));
        var.unassign();
        assert_eq!(3, var.cur_domain_size());
    }

    #[test]
    fn restrict_domain() {
        let mut var = Variable::new("x", 1..=9);
        var.restrict_domain(7);
        assert_eq!(&[7], var.domain());
        assert_eq!(vec![7], var.cur_domain());
        var.restrict_domain(7);
        assert_eq!(&[7], var.domain());
    }

    #[test]
    fn restrict_domain_to_missing_value() {
        let mut var = Variable::new("x", 1..=3);
        var.restrict_domain(1);
        var.restrict_domain(2);
        assert!(var.domain().is_empty());
        assert_eq!(0, var.cur_domain_size());
        assert!(!var.in_cur_domain(1));
    }
}
