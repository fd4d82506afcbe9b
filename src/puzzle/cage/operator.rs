use itertools::Itertools;

use crate::puzzle::Value;

/// The `Operator` enum represents each of the possible math operators
/// that can be in a cage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operator {
    /// Retrieve an `Operator` from its code in a cage descriptor
    pub fn from_code(code: i32) -> Option<Operator> {
        let o = match code {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Divide,
            3 => Operator::Multiply,
            _ => return None,
        };
        Some(o)
    }

    /// The code of this operator in a cage descriptor
    pub fn code(self) -> i32 {
        match self {
            Operator::Add => 0,
            Operator::Subtract => 1,
            Operator::Divide => 2,
            Operator::Multiply => 3,
        }
    }

    /// Retrieve the character representation of the symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Divide => '/',
            Operator::Multiply => '*',
        }
    }

    /// Whether the operand order can change the result
    pub fn is_commutative(self) -> bool {
        match self {
            Operator::Add | Operator::Multiply => true,
            Operator::Subtract | Operator::Divide => false,
        }
    }

    /// Folds the operands left to right.
    ///
    /// Returns `None` for no operands, on overflow, or on division by zero.
    /// Division truncates.
    pub fn evaluate(self, values: &[Value]) -> Option<Value> {
        let (&first, rest) = values.split_first()?;
        rest.iter().try_fold(first, |acc, &v| match self {
            Operator::Add => acc.checked_add(v),
            Operator::Subtract => acc.checked_sub(v),
            Operator::Divide => acc.checked_div(v),
            Operator::Multiply => acc.checked_mul(v),
        })
    }

    /// Whether the values of a cage produce `target` with this operator.
    ///
    /// Cage cells have no operand order, so for a non-commutative operator
    /// any ordering of the values that evaluates to `target` is accepted.
    pub fn satisfied_by(self, values: &[Value], target: Value) -> bool {
        if self.is_commutative() {
            return self.evaluate(values) == Some(target);
        }
        values
            .iter()
            .copied()
            .permutations(values.len())
            .any(|perm| self.evaluate(&perm) == Some(target))
    }
}
