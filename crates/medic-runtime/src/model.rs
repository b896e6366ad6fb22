//! Domain entities that carry predicate rules
//!
//! Rules attached here are trees over `String`: comparisons are
//! lexicographic over attribute values, and `Has` covers tag-set membership
//! such as allergy lists.

use crate::context::AttributeContext;
use crate::error::Result;
use chrono::{DateTime, Utc};
use medic_core::Expression;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named patient state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub name: String,
}

/// A pending status assignment, replaced wholesale on rewrite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub status_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A patient; the attribute map is the resolver source for every rule
/// evaluated on this patient's behalf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub status_id: Option<i64>,
    pub draft: Option<Draft>,
}

/// Eligibility rule for moving between two statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub id: i64,
    pub from_status: i64,
    pub to_status: i64,
    /// `None` means the transition is unconditional
    pub predicate: Option<Expression<String>>,
}

/// A medicine with an optional compatibility rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    /// `None` means compatible with every patient
    pub compatibility: Option<Expression<String>>,
}

impl Transition {
    /// Whether this transition may be taken in the given context
    pub fn eligible(&self, context: &AttributeContext) -> Result<bool> {
        match &self.predicate {
            None => Ok(true),
            Some(rule) => context.evaluate(rule),
        }
    }
}

impl Medicine {
    /// Whether this medicine is compatible in the given context
    pub fn compatible_with(&self, context: &AttributeContext) -> Result<bool> {
        match &self.compatibility {
            None => Ok(true),
            Some(rule) => context.evaluate(rule),
        }
    }
}
