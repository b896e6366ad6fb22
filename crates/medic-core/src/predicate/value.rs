//! Leaf operands of predicate expressions

use serde::{Deserialize, Serialize};

/// A leaf operand: either a literal fixed when the tree is built, or a named
/// placeholder whose value is supplied by a resolver at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value<T> {
    /// Literal known when the tree is constructed
    Known(T),

    /// Placeholder resolved by name at evaluation time
    Unknown(String),
}

impl<T> Value<T> {
    /// Create a known literal
    pub fn known(value: T) -> Self {
        Value::Known(value)
    }

    /// Create a named placeholder
    pub fn unknown(name: String) -> Self {
        Value::Unknown(name)
    }

    /// Placeholder name, if this leaf is an `Unknown`
    pub fn reference(&self) -> Option<&str> {
        match self {
            Value::Known(_) => None,
            Value::Unknown(name) => Some(name),
        }
    }
}
