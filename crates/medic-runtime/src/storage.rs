//! Storage layer for domain entities
//!
//! Defines the async [`Repository`] trait the services run against, plus the
//! in-memory implementation used by the server and in tests.

use crate::error::{Result, RuntimeError};
use crate::model::{Medicine, Patient, Status, Transition};
use async_trait::async_trait;
use medic_core::Expression;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Async repository for patients, statuses, transitions, and medicines
///
/// All implementations must be `Send + Sync` for use across async tasks.
/// Absent entities surface as typed [`RuntimeError`] variants.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Register a status
    async fn create_status(&self, name: String) -> Result<Status>;

    /// Load a status by id
    async fn find_status(&self, id: i64) -> Result<Status>;

    /// Register a transition between two existing statuses
    async fn create_transition(
        &self,
        from_status: i64,
        to_status: i64,
        predicate: Option<Expression<String>>,
    ) -> Result<Transition>;

    /// Transitions leaving a status, ordered by id
    async fn transitions_from(&self, status_id: i64) -> Result<Vec<Transition>>;

    /// Register a medicine
    async fn create_medicine(
        &self,
        name: String,
        compatibility: Option<Expression<String>>,
    ) -> Result<Medicine>;

    /// All registered medicines, ordered by id
    async fn list_medicines(&self) -> Result<Vec<Medicine>>;

    /// Create a patient with no status and no draft
    async fn create_patient(
        &self,
        name: String,
        attributes: HashMap<String, String>,
    ) -> Result<Patient>;

    /// Load a patient by id
    async fn find_patient(&self, id: i64) -> Result<Patient>;

    /// Persist a modified patient
    async fn save_patient(&self, patient: Patient) -> Result<()>;
}

#[derive(Default)]
struct Store {
    next_id: i64,
    statuses: HashMap<i64, Status>,
    transitions: HashMap<i64, Transition>,
    medicines: HashMap<i64, Medicine>,
    patients: HashMap<i64, Patient>,
}

impl Store {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory repository behind a `tokio` read-write lock
#[derive(Default)]
pub struct MemoryRepository {
    store: RwLock<Store>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn create_status(&self, name: String) -> Result<Status> {
        let mut store = self.store.write().await;
        let id = store.allocate_id();
        let status = Status { id, name };
        store.statuses.insert(id, status.clone());
        Ok(status)
    }

    async fn find_status(&self, id: i64) -> Result<Status> {
        let store = self.store.read().await;
        store
            .statuses
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::StatusNotFound(id))
    }

    async fn create_transition(
        &self,
        from_status: i64,
        to_status: i64,
        predicate: Option<Expression<String>>,
    ) -> Result<Transition> {
        let mut store = self.store.write().await;
        if !store.statuses.contains_key(&from_status) {
            return Err(RuntimeError::StatusNotFound(from_status));
        }
        if !store.statuses.contains_key(&to_status) {
            return Err(RuntimeError::StatusNotFound(to_status));
        }

        let id = store.allocate_id();
        let transition = Transition {
            id,
            from_status,
            to_status,
            predicate,
        };
        store.transitions.insert(id, transition.clone());
        Ok(transition)
    }

    async fn transitions_from(&self, status_id: i64) -> Result<Vec<Transition>> {
        let store = self.store.read().await;
        let mut transitions: Vec<Transition> = store
            .transitions
            .values()
            .filter(|transition| transition.from_status == status_id)
            .cloned()
            .collect();
        transitions.sort_by_key(|transition| transition.id);
        Ok(transitions)
    }

    async fn create_medicine(
        &self,
        name: String,
        compatibility: Option<Expression<String>>,
    ) -> Result<Medicine> {
        let mut store = self.store.write().await;
        let id = store.allocate_id();
        let medicine = Medicine {
            id,
            name,
            compatibility,
        };
        store.medicines.insert(id, medicine.clone());
        Ok(medicine)
    }

    async fn list_medicines(&self) -> Result<Vec<Medicine>> {
        let store = self.store.read().await;
        let mut medicines: Vec<Medicine> = store.medicines.values().cloned().collect();
        medicines.sort_by_key(|medicine| medicine.id);
        Ok(medicines)
    }

    async fn create_patient(
        &self,
        name: String,
        attributes: HashMap<String, String>,
    ) -> Result<Patient> {
        let mut store = self.store.write().await;
        let id = store.allocate_id();
        let patient = Patient {
            id,
            name,
            attributes,
            status_id: None,
            draft: None,
        };
        store.patients.insert(id, patient.clone());
        Ok(patient)
    }

    async fn find_patient(&self, id: i64) -> Result<Patient> {
        let store = self.store.read().await;
        store
            .patients
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::PatientNotFound(id))
    }

    async fn save_patient(&self, patient: Patient) -> Result<()> {
        let mut store = self.store.write().await;
        if !store.patients.contains_key(&patient.id) {
            return Err(RuntimeError::PatientNotFound(patient.id));
        }
        store.patients.insert(patient.id, patient);
        Ok(())
    }
}
