//! Transition eligibility listing

use crate::context::AttributeContext;
use crate::error::Result;
use crate::model::{Status, Transition};
use crate::storage::Repository;
use std::sync::Arc;
use tracing::debug;

/// Lists the transitions a patient may currently take
#[derive(Clone)]
pub struct TransitionService {
    repository: Arc<dyn Repository>,
}

impl TransitionService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Transitions leaving the patient's current status whose predicate is
    /// absent or holds for the patient's attributes, with target statuses
    /// resolved. A patient with no current status has none.
    pub async fn available_transitions(
        &self,
        patient_id: i64,
    ) -> Result<Vec<(Transition, Status)>> {
        let patient = self.repository.find_patient(patient_id).await?;
        let Some(current) = patient.status_id else {
            return Ok(Vec::new());
        };

        let context = AttributeContext::from_patient(&patient);
        let mut available = Vec::new();
        for transition in self.repository.transitions_from(current).await? {
            if transition.eligible(&context)? {
                let status = self.repository.find_status(transition.to_status).await?;
                available.push((transition, status));
            }
        }

        debug!(patient_id, count = available.len(), "available transitions");
        Ok(available)
    }
}
