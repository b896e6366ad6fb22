//! Domain services over the repository
//!
//! Each service owns a shared repository handle and orchestrates one slice
//! of the workflow: the status-draft lifecycle, transition eligibility, and
//! medicine compatibility.

mod draft;
mod medicine;
mod transition;

pub use draft::DraftService;
pub use medicine::{MedicineAdvice, MedicineService};
pub use transition::TransitionService;
