//! Evaluation of predicate expressions
//!
//! Evaluation is a pure recursive reduction over the tree. Recursion depth
//! equals expression depth, which is caller-controlled; trees nested
//! thousands of levels deep will exhaust the call stack before anything
//! else breaks.

use super::expression::Expression;
use super::value::Value;
use crate::error::{EvalError, PositionalError};
use std::collections::HashSet;
use std::fmt::Display;

/// Delimiter splitting a value's string form into tokens for
/// [`Expression::Has`] checks.
pub const HAS_DELIMITER: &str = ";";

impl<T> Expression<T>
where
    T: Ord + Clone + Display,
{
    /// Reduce the expression to a boolean, resolving placeholders through
    /// `resolver`. Returning `None` for a requested name aborts the call
    /// with [`EvalError::Unresolved`].
    ///
    /// `And` and `Or` short-circuit, so the resolver is consulted at most
    /// once per placeholder leaf actually visited and never for known
    /// leaves.
    pub fn evaluate<F>(&self, mut resolver: F) -> Result<bool, EvalError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.eval_with(&mut |name| {
            resolver(name).ok_or_else(|| EvalError::Unresolved {
                name: name.to_string(),
            })
        })
    }

    /// Reduce the expression to a boolean, treating every placeholder name
    /// as a decimal index into `parameters`.
    ///
    /// A name that is not a decimal index, or an index outside
    /// `parameters`, fails with [`EvalError::ArgumentsCountMismatch`]
    /// carrying the supplied parameters and the triggering cause.
    pub fn evaluate_positional(&self, parameters: &[T]) -> Result<bool, EvalError> {
        self.eval_with(&mut |name| {
            let cause = match name.parse::<usize>() {
                Ok(index) => match parameters.get(index) {
                    Some(value) => return Ok(value.clone()),
                    None => PositionalError::OutOfRange {
                        index,
                        supplied: parameters.len(),
                    },
                },
                Err(source) => PositionalError::NotAnIndex {
                    reference: name.to_string(),
                    source,
                },
            };
            Err(EvalError::ArgumentsCountMismatch {
                parameters: parameters.iter().map(|p| p.to_string()).collect(),
                cause,
            })
        })
    }

    fn eval_with<F>(&self, resolve: &mut F) -> Result<bool, EvalError>
    where
        F: FnMut(&str) -> Result<T, EvalError>,
    {
        match self {
            Expression::Equal { left, right } => {
                Ok(resolve_value(left, resolve)? == resolve_value(right, resolve)?)
            }
            Expression::LessThan { left, right } => {
                Ok(resolve_value(left, resolve)? < resolve_value(right, resolve)?)
            }
            Expression::LessThanOrEqual { left, right } => {
                Ok(resolve_value(left, resolve)? <= resolve_value(right, resolve)?)
            }
            Expression::GreaterThan { left, right } => {
                Ok(resolve_value(left, resolve)? > resolve_value(right, resolve)?)
            }
            Expression::GreaterThanOrEqual { left, right } => {
                Ok(resolve_value(left, resolve)? >= resolve_value(right, resolve)?)
            }
            Expression::Has { left, right } => {
                let main = token_set(&resolve_value(left, resolve)?);
                let sub = token_set(&resolve_value(right, resolve)?);
                Ok(main.is_superset(&sub))
            }
            Expression::Not { operand } => Ok(!operand.eval_with(resolve)?),
            Expression::And { left, right } => {
                Ok(left.eval_with(resolve)? && right.eval_with(resolve)?)
            }
            Expression::Or { left, right } => {
                Ok(left.eval_with(resolve)? || right.eval_with(resolve)?)
            }
        }
    }
}

fn resolve_value<T, F>(value: &Value<T>, resolve: &mut F) -> Result<T, EvalError>
where
    T: Clone,
    F: FnMut(&str) -> Result<T, EvalError>,
{
    match value {
        Value::Known(value) => Ok(value.clone()),
        Value::Unknown(name) => resolve(name),
    }
}

/// Split the string form on [`HAS_DELIMITER`], trimming each token.
/// Duplicates collapse into the set.
fn token_set<T: Display>(value: &T) -> HashSet<String> {
    value
        .to_string()
        .split(HAS_DELIMITER)
        .map(|token| token.trim().to_string())
        .collect()
}
