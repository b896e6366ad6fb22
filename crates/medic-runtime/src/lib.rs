//! MEDIC Runtime - domain model and rule evaluation services
//!
//! This crate layers the clinical domain over the predicate core:
//! - entities (patients, statuses, drafts, transitions, medicines) that
//!   carry predicate rules
//! - attribute contexts that build resolvers from patient attributes
//! - an async repository with an in-memory implementation
//! - the draft workflow, transition eligibility, and medicine
//!   compatibility services

pub mod context;
pub mod error;
pub mod model;
pub mod service;
pub mod storage;

// Re-export main types
pub use context::AttributeContext;
pub use error::{Result, RuntimeError};
pub use model::{Draft, Medicine, Patient, Status, Transition};
pub use service::{DraftService, MedicineAdvice, MedicineService, TransitionService};
pub use storage::{MemoryRepository, Repository};
