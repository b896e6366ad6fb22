//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use medic_runtime::{DraftService, MedicineService, Repository, TransitionService};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the REST API router over a shared repository
pub fn create_router(repository: Arc<dyn Repository>) -> Router {
    let state = AppState {
        drafts: DraftService::new(repository.clone()),
        transitions: TransitionService::new(repository.clone()),
        medicines: MedicineService::new(repository.clone()),
        repository,
    };

    Router::new()
        .route("/health", get(health))
        .route("/statuses", post(create_status))
        .route("/transitions", post(create_transition))
        .route("/medicines", post(create_medicine))
        .route("/patients", post(create_patient))
        .route("/patients/:patient_id", get(get_patient))
        .route(
            "/patients/:patient_id/status/draft",
            get(get_draft).put(rewrite_draft).post(commit_draft),
        )
        .route(
            "/patients/:patient_id/status/draft/states",
            get(available_transitions),
        )
        .route(
            "/patients/:patient_id/status/draft/medicine",
            get(appropriate_medicine),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
