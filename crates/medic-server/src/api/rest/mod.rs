//! REST API implementation
//!
//! - types: request/response type definitions and application state
//! - extractors: custom request extractors
//! - handlers: endpoint handlers
//! - router: router creation and configuration

mod extractors;
mod handlers;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{
    AppState, AppropriateMedicineResponse, AvailableTransitionResponse, HealthResponse,
    MedicineRequest, PatientRequest, PatientResponse, StatusDefinitionRequest, StatusRequest,
    StatusResponse, TransitionRequest,
};
