//! Placeholder reference collection

use super::expression::Expression;
use super::value::Value;
use std::collections::HashSet;

impl<T> Expression<T> {
    /// Names of every placeholder reachable from this expression.
    ///
    /// A full-tree traversal: unlike evaluation it never short-circuits, so
    /// the result is independent of operand values. Known leaves contribute
    /// nothing; duplicate names merge. Lets callers confirm a resolver
    /// covers every reference before evaluating.
    pub fn references(&self) -> HashSet<String> {
        let mut destination = HashSet::new();
        self.collect_references(&mut destination);
        destination
    }

    fn collect_references(&self, destination: &mut HashSet<String>) {
        match self {
            Expression::Equal { left, right }
            | Expression::LessThan { left, right }
            | Expression::LessThanOrEqual { left, right }
            | Expression::GreaterThan { left, right }
            | Expression::GreaterThanOrEqual { left, right }
            | Expression::Has { left, right } => {
                record(left, destination);
                record(right, destination);
            }
            Expression::Not { operand } => operand.collect_references(destination),
            Expression::And { left, right } | Expression::Or { left, right } => {
                left.collect_references(destination);
                right.collect_references(destination);
            }
        }
    }
}

fn record<T>(value: &Value<T>, destination: &mut HashSet<String>) {
    if let Value::Unknown(name) = value {
        destination.insert(name.clone());
    }
}
