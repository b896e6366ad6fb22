//! Status-draft workflow

use crate::context::AttributeContext;
use crate::error::{Result, RuntimeError};
use crate::model::{Draft, Status};
use crate::storage::Repository;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Orchestrates the draft lifecycle: rewrite, read, commit
#[derive(Clone)]
pub struct DraftService {
    repository: Arc<dyn Repository>,
}

impl DraftService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Replace the patient's draft with a new one targeting `status_id`.
    /// Any existing draft is discarded.
    pub async fn rewrite_draft(
        &self,
        patient_id: i64,
        status_id: i64,
        text: String,
    ) -> Result<Draft> {
        let mut patient = self.repository.find_patient(patient_id).await?;
        // Target status must exist before we attach a draft pointing at it
        self.repository.find_status(status_id).await?;

        let draft = Draft {
            status_id,
            text,
            created_at: Utc::now(),
        };
        patient.draft = Some(draft.clone());
        self.repository.save_patient(patient).await?;

        info!(patient_id, status_id, "draft rewritten");
        Ok(draft)
    }

    /// The patient's current draft with its target status resolved
    pub async fn find_draft(&self, patient_id: i64) -> Result<(Draft, Status)> {
        let patient = self.repository.find_patient(patient_id).await?;
        let draft = patient
            .draft
            .ok_or(RuntimeError::DraftNotFound(patient_id))?;
        let status = self.repository.find_status(draft.status_id).await?;
        Ok((draft, status))
    }

    /// Promote the draft to the patient's current status.
    ///
    /// When the patient already has a status, an eligible transition from it
    /// to the draft status must exist: predicate absent, or evaluating to
    /// true against the patient's attributes. The initial assignment (no
    /// current status) is unrestricted. On failure the stored draft stays
    /// untouched.
    pub async fn commit_draft(&self, patient_id: i64) -> Result<Status> {
        let mut patient = self.repository.find_patient(patient_id).await?;
        let draft = patient
            .draft
            .take()
            .ok_or(RuntimeError::DraftNotFound(patient_id))?;

        if let Some(current) = patient.status_id {
            let context = AttributeContext::from_patient(&patient);
            let mut allowed = false;
            for transition in self.repository.transitions_from(current).await? {
                if transition.to_status == draft.status_id && transition.eligible(&context)? {
                    allowed = true;
                    break;
                }
            }
            if !allowed {
                return Err(RuntimeError::TransitionNotAllowed {
                    from: current,
                    to: draft.status_id,
                });
            }
        }

        let status = self.repository.find_status(draft.status_id).await?;
        patient.status_id = Some(status.id);
        self.repository.save_patient(patient).await?;

        info!(patient_id, status_id = status.id, "draft committed");
        Ok(status)
    }
}
