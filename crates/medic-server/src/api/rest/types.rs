//! REST API type definitions
//!
//! Request and response types for the REST API endpoints, plus the shared
//! application state.

use chrono::{DateTime, Utc};
use medic_core::Expression;
use medic_runtime::{
    Draft, DraftService, Medicine, MedicineAdvice, MedicineService, Patient, Repository, Status,
    Transition, TransitionService,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn Repository>,
    pub drafts: DraftService,
    pub transitions: TransitionService,
    pub medicines: MedicineService,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Status registration payload
#[derive(Debug, Deserialize)]
pub struct StatusDefinitionRequest {
    pub name: String,
}

/// Registered status
#[derive(Debug, Serialize)]
pub struct StatusDefinitionResponse {
    pub id: i64,
    pub name: String,
}

/// Transition registration payload; the predicate is the serde form of an
/// expression tree, absent for unconditional transitions
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub from_status: i64,
    pub to_status: i64,
    #[serde(default)]
    pub predicate: Option<Expression<String>>,
}

/// Registered transition
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub id: i64,
    pub from_status: i64,
    pub to_status: i64,
}

/// Medicine registration payload
#[derive(Debug, Deserialize)]
pub struct MedicineRequest {
    pub name: String,
    #[serde(default)]
    pub compatibility: Option<Expression<String>>,
}

/// Registered medicine
#[derive(Debug, Serialize)]
pub struct MedicineResponse {
    pub id: i64,
    pub name: String,
}

/// Patient creation payload
#[derive(Debug, Deserialize)]
pub struct PatientRequest {
    pub name: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// Patient view
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub name: String,
    pub attributes: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    pub has_draft: bool,
}

/// Draft creation payload
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status_id: i64,
    #[serde(default)]
    pub text: String,
}

/// A status assignment: the committed status, or a pending draft
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One eligible transition from the patient's current status
#[derive(Debug, Serialize)]
pub struct AvailableTransitionResponse {
    pub transition_id: i64,
    pub status_id: i64,
    pub status_name: String,
}

/// One medicine with its compatibility verdict
#[derive(Debug, Serialize)]
pub struct AppropriateMedicineResponse {
    pub medicine_id: i64,
    pub name: String,
    pub compatible: bool,
}

impl From<Status> for StatusDefinitionResponse {
    fn from(status: Status) -> Self {
        Self {
            id: status.id,
            name: status.name,
        }
    }
}

impl From<Transition> for TransitionResponse {
    fn from(transition: Transition) -> Self {
        Self {
            id: transition.id,
            from_status: transition.from_status,
            to_status: transition.to_status,
        }
    }
}

impl From<Medicine> for MedicineResponse {
    fn from(medicine: Medicine) -> Self {
        Self {
            id: medicine.id,
            name: medicine.name,
        }
    }
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            attributes: patient.attributes,
            status_id: patient.status_id,
            has_draft: patient.draft.is_some(),
        }
    }
}

impl StatusResponse {
    /// View of a committed status
    pub fn committed(status: Status) -> Self {
        Self {
            status_id: status.id,
            name: status.name,
            text: None,
            draft: false,
            created_at: None,
        }
    }

    /// View of a pending draft with its target status resolved
    pub fn pending(draft: Draft, status: Status) -> Self {
        Self {
            status_id: status.id,
            name: status.name,
            text: Some(draft.text),
            draft: true,
            created_at: Some(draft.created_at),
        }
    }
}

impl From<(Transition, Status)> for AvailableTransitionResponse {
    fn from((transition, status): (Transition, Status)) -> Self {
        Self {
            transition_id: transition.id,
            status_id: status.id,
            status_name: status.name,
        }
    }
}

impl From<MedicineAdvice> for AppropriateMedicineResponse {
    fn from(advice: MedicineAdvice) -> Self {
        Self {
            medicine_id: advice.medicine.id,
            name: advice.medicine.name,
            compatible: advice.compatible,
        }
    }
}
