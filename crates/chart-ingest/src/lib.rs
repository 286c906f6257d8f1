//! Clinical fixture ingestion.
//!
//! A data directory holds one headed CSV file per clinical domain;
//! [`load_records`] reads whichever are present into
//! [`ClinicalRecords`](chart_model::ClinicalRecords).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use chart_ingest::load_records;
//!
//! let records = load_records(Path::new("data"))?;
//! println!("{} patients", records.patients.len());
//! ```

mod error;
mod immunization;
mod loader;
mod reader;

pub use error::{IngestError, Result};
pub use immunization::ImmunizationRow;
pub use loader::{
    ALLERGIES_FILE, FAMILY_HISTORY_FILE, IMMUNIZATIONS_FILE, LABS_FILE, MEDICATIONS_FILE,
    PATIENTS_FILE, PROBLEMS_FILE, PROCEDURES_FILE, REFILLS_FILE, SOCIAL_HISTORY_FILE, VITALS_FILE,
    load_records,
};
pub use reader::read_rows;
