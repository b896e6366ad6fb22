//! Medicine compatibility reporting

use crate::context::AttributeContext;
use crate::error::Result;
use crate::model::Medicine;
use crate::storage::Repository;
use std::sync::Arc;
use tracing::debug;

/// A medicine paired with its compatibility verdict for one patient
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineAdvice {
    pub medicine: Medicine,
    pub compatible: bool,
}

/// Evaluates medicine compatibility rules against patient attributes
#[derive(Clone)]
pub struct MedicineService {
    repository: Arc<dyn Repository>,
}

impl MedicineService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Every registered medicine with its compatibility flag for the
    /// patient. Medicines without a rule are always compatible.
    pub async fn appropriate_medicine(&self, patient_id: i64) -> Result<Vec<MedicineAdvice>> {
        let patient = self.repository.find_patient(patient_id).await?;
        let context = AttributeContext::from_patient(&patient);

        let mut advice = Vec::new();
        for medicine in self.repository.list_medicines().await? {
            let compatible = medicine.compatible_with(&context)?;
            advice.push(MedicineAdvice {
                medicine,
                compatible,
            });
        }

        debug!(patient_id, count = advice.len(), "medicine advice computed");
        Ok(advice)
    }
}
