//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use medic_runtime::Repository;
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Register a status
pub(super) async fn create_status(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<StatusDefinitionRequest>,
) -> Result<(StatusCode, Json<StatusDefinitionResponse>), ServerError> {
    let status = state.repository.create_status(payload.name).await?;
    info!(status_id = status.id, "status registered");
    Ok((StatusCode::CREATED, Json(status.into())))
}

/// Register a transition with an optional eligibility rule
pub(super) async fn create_transition(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<TransitionRequest>,
) -> Result<(StatusCode, Json<TransitionResponse>), ServerError> {
    let transition = state
        .repository
        .create_transition(payload.from_status, payload.to_status, payload.predicate)
        .await?;
    info!(transition_id = transition.id, "transition registered");
    Ok((StatusCode::CREATED, Json(transition.into())))
}

/// Register a medicine with an optional compatibility rule
pub(super) async fn create_medicine(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<MedicineRequest>,
) -> Result<(StatusCode, Json<MedicineResponse>), ServerError> {
    let medicine = state
        .repository
        .create_medicine(payload.name, payload.compatibility)
        .await?;
    info!(medicine_id = medicine.id, "medicine registered");
    Ok((StatusCode::CREATED, Json(medicine.into())))
}

/// Create a patient
pub(super) async fn create_patient(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<PatientRequest>,
) -> Result<(StatusCode, Json<PatientResponse>), ServerError> {
    let patient = state
        .repository
        .create_patient(payload.name, payload.attributes)
        .await?;
    info!(patient_id = patient.id, "patient created");
    Ok((StatusCode::CREATED, Json(patient.into())))
}

/// Fetch a patient
pub(super) async fn get_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<PatientResponse>, ServerError> {
    let patient = state.repository.find_patient(patient_id).await?;
    Ok(Json(patient.into()))
}

/// Create or rewrite the patient's draft
pub(super) async fn rewrite_draft(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    JsonExtractor(payload): JsonExtractor<StatusRequest>,
) -> Result<StatusCode, ServerError> {
    state
        .drafts
        .rewrite_draft(patient_id, payload.status_id, payload.text)
        .await?;
    Ok(StatusCode::CREATED)
}

/// Read the patient's current draft
pub(super) async fn get_draft(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<StatusResponse>, ServerError> {
    let (draft, status) = state.drafts.find_draft(patient_id).await?;
    Ok(Json(StatusResponse::pending(draft, status)))
}

/// Commit the patient's draft into the current status
#[axum::debug_handler]
pub(super) async fn commit_draft(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<StatusResponse>, ServerError> {
    let status = state.drafts.commit_draft(patient_id).await?;
    Ok(Json(StatusResponse::committed(status)))
}

/// Transitions available from the patient's current status
pub(super) async fn available_transitions(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<AvailableTransitionResponse>>, ServerError> {
    let available = state.transitions.available_transitions(patient_id).await?;
    Ok(Json(available.into_iter().map(Into::into).collect()))
}

/// Medicine compatibility report for the patient
pub(super) async fn appropriate_medicine(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<AppropriateMedicineResponse>>, ServerError> {
    let advice = state.medicines.appropriate_medicine(patient_id).await?;
    Ok(Json(advice.into_iter().map(Into::into).collect()))
}
