//! Diagnostic rendering of predicate expressions
//!
//! The output is deterministic and fully parenthesized but one-way: it is
//! not meant to be parsed back into a tree.

use super::expression::Expression;
use super::value::Value;
use std::fmt;

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Known(value) => write!(f, "{}", value),
            Value::Unknown(name) => write!(f, "{{{}}}", name),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Equal { left, right } => write!(f, "Equal({}, {})", left, right),
            Expression::LessThan { left, right } => write!(f, "LessThan({}, {})", left, right),
            Expression::LessThanOrEqual { left, right } => {
                write!(f, "LessThanOrEqual({}, {})", left, right)
            }
            Expression::GreaterThan { left, right } => {
                write!(f, "GreaterThan({}, {})", left, right)
            }
            Expression::GreaterThanOrEqual { left, right } => {
                write!(f, "GreaterThanOrEqual({}, {})", left, right)
            }
            Expression::Has { left, right } => write!(f, "Has({}, {})", left, right),
            Expression::Not { operand } => write!(f, "Not({})", operand),
            Expression::And { left, right } => write!(f, "And({}, {})", left, right),
            Expression::Or { left, right } => write!(f, "Or({}, {})", left, right),
        }
    }
}
