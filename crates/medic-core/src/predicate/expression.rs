//! Predicate expression AST

use super::value::Value;
use serde::{Deserialize, Serialize};

/// Predicate expression over comparable values of type `T`.
///
/// A tree is immutable once built and may be evaluated any number of times
/// against different resolvers. A single tree is monomorphic in `T`: the
/// comparisons at its leaves all operate on the same comparable type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression<T> {
    /// Resolved operands are equal
    Equal { left: Value<T>, right: Value<T> },

    /// Left operand orders strictly before the right
    LessThan { left: Value<T>, right: Value<T> },

    /// Left operand orders before or equal to the right
    LessThanOrEqual { left: Value<T>, right: Value<T> },

    /// Left operand orders strictly after the right
    GreaterThan { left: Value<T>, right: Value<T> },

    /// Left operand orders after or equal to the right
    GreaterThanOrEqual { left: Value<T>, right: Value<T> },

    /// Left operand's token set contains the right operand's token set,
    /// both taken from the operands' string form
    Has { left: Value<T>, right: Value<T> },

    /// Both sub-expressions hold
    And {
        left: Box<Expression<T>>,
        right: Box<Expression<T>>,
    },

    /// At least one sub-expression holds
    Or {
        left: Box<Expression<T>>,
        right: Box<Expression<T>>,
    },

    /// The sub-expression does not hold
    Not { operand: Box<Expression<T>> },
}

impl<T> Expression<T> {
    /// Create an equality comparison
    pub fn equal(left: Value<T>, right: Value<T>) -> Self {
        Expression::Equal { left, right }
    }

    /// Create a strict less-than comparison
    pub fn less_than(left: Value<T>, right: Value<T>) -> Self {
        Expression::LessThan { left, right }
    }

    /// Create a less-than-or-equal comparison
    pub fn less_than_or_equal(left: Value<T>, right: Value<T>) -> Self {
        Expression::LessThanOrEqual { left, right }
    }

    /// Create a strict greater-than comparison
    pub fn greater_than(left: Value<T>, right: Value<T>) -> Self {
        Expression::GreaterThan { left, right }
    }

    /// Create a greater-than-or-equal comparison
    pub fn greater_than_or_equal(left: Value<T>, right: Value<T>) -> Self {
        Expression::GreaterThanOrEqual { left, right }
    }

    /// Create a token-set containment check
    pub fn has(left: Value<T>, right: Value<T>) -> Self {
        Expression::Has { left, right }
    }

    /// Create a conjunction
    pub fn and(left: Expression<T>, right: Expression<T>) -> Self {
        Expression::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a disjunction
    pub fn or(left: Expression<T>, right: Expression<T>) -> Self {
        Expression::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a negation
    pub fn not(operand: Expression<T>) -> Self {
        Expression::Not {
            operand: Box::new(operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_construction() {
        let expr = Expression::equal(Value::unknown("age".to_string()), Value::known(18));

        match expr {
            Expression::Equal { left, right } => {
                assert_eq!(left, Value::Unknown("age".to_string()));
                assert_eq!(right, Value::Known(18));
            }
            _ => panic!("Expected Equal expression"),
        }
    }

    #[test]
    fn test_combinator_boxes_operands() {
        // (age > 18) && !(status == "archived")
        let expr = Expression::and(
            Expression::greater_than(
                Value::unknown("age".to_string()),
                Value::known("18".to_string()),
            ),
            Expression::not(Expression::equal(
                Value::unknown("status".to_string()),
                Value::known("archived".to_string()),
            )),
        );

        match expr {
            Expression::And { left, right } => {
                assert!(matches!(*left, Expression::GreaterThan { .. }));
                assert!(matches!(*right, Expression::Not { .. }));
            }
            _ => panic!("Expected And expression"),
        }
    }

    #[test]
    fn test_expression_clone_equality() {
        let expr = Expression::or(
            Expression::less_than(Value::known(1), Value::known(2)),
            Expression::has(Value::unknown("tags".to_string()), Value::known(3)),
        );

        let cloned = expr.clone();
        assert_eq!(expr, cloned);
    }

    #[test]
    fn test_expression_serde_round_trip() {
        let expr = Expression::and(
            Expression::equal(
                Value::unknown("ward".to_string()),
                Value::known("icu".to_string()),
            ),
            Expression::not(Expression::has(
                Value::unknown("allergies".to_string()),
                Value::known("penicillin".to_string()),
            )),
        );

        let json = serde_json::to_string(&expr).unwrap();
        let deserialized: Expression<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(expr, deserialized);
    }
}
