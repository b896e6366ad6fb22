//! Attribute resolution context
//!
//! Builds resolvers over a patient's attribute map and offers a fail-fast
//! coverage check over a rule's collected references, so a rule referencing
//! attributes the patient does not carry is rejected with the offending
//! names instead of failing mid-evaluation.

use crate::error::{Result, RuntimeError};
use crate::model::Patient;
use medic_core::Expression;
use std::collections::HashMap;

/// Resolution context over a patient's attributes
#[derive(Debug, Clone, Default)]
pub struct AttributeContext {
    attributes: HashMap<String, String>,
}

impl AttributeContext {
    /// Create a context from an attribute map
    pub fn new(attributes: HashMap<String, String>) -> Self {
        Self { attributes }
    }

    /// Create a context from a patient's attributes
    pub fn from_patient(patient: &Patient) -> Self {
        Self::new(patient.attributes.clone())
    }

    /// Look up a single attribute
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check that every reference in `rule` is covered by this context,
    /// reporting the missing names sorted
    pub fn covers(&self, rule: &Expression<String>) -> Result<()> {
        let mut missing: Vec<String> = rule
            .references()
            .into_iter()
            .filter(|name| !self.attributes.contains_key(name))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            missing.sort();
            Err(RuntimeError::MissingAttributes { missing })
        }
    }

    /// Coverage check followed by evaluation against this context
    pub fn evaluate(&self, rule: &Expression<String>) -> Result<bool> {
        self.covers(rule)?;
        Ok(rule.evaluate(|name| self.attributes.get(name).cloned())?)
    }
}
