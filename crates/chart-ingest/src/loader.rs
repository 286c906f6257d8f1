//! Data-directory loading.

use std::collections::BTreeMap;
use std::path::Path;

use chart_model::{
    Allergy, ClinicalRecords, FamilyHistory, Immunization, Lab, Medication, Patient, Problem,
    Procedure, Refill, SocialHistory, VitalSet, group_by_patient,
};
use tracing::{info, info_span};

use crate::error::{IngestError, Result};
use crate::immunization::ImmunizationRow;
use crate::reader::read_rows;

pub const PATIENTS_FILE: &str = "patients.csv";
pub const MEDICATIONS_FILE: &str = "medications.csv";
pub const REFILLS_FILE: &str = "refills.csv";
pub const PROBLEMS_FILE: &str = "problems.csv";
pub const PROCEDURES_FILE: &str = "procedures.csv";
pub const LABS_FILE: &str = "labs.csv";
pub const ALLERGIES_FILE: &str = "allergies.csv";
pub const IMMUNIZATIONS_FILE: &str = "immunizations.csv";
pub const VITALS_FILE: &str = "vitals.csv";
pub const SOCIAL_HISTORY_FILE: &str = "social_history.csv";
pub const FAMILY_HISTORY_FILE: &str = "family_history.csv";

fn row_count<T>(map: &BTreeMap<String, Vec<T>>) -> usize {
    map.values().map(Vec::len).sum()
}

/// Loads every domain file found in `data_dir`.
///
/// Absent files leave their domain empty. Clinical notes are never read
/// from disk. Later rows win when a patient or social-history row repeats.
pub fn load_records(data_dir: &Path) -> Result<ClinicalRecords> {
    if !data_dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: data_dir.to_path_buf(),
        });
    }

    let span = info_span!("load_records", data_dir = %data_dir.display());
    let _guard = span.enter();

    let file = |name: &str| data_dir.join(name);

    let mut records = ClinicalRecords::new();
    records.patients = read_rows::<Patient>(&file(PATIENTS_FILE))?
        .into_iter()
        .map(|patient| (patient.patient_id.clone(), patient))
        .collect();
    records.medications = group_by_patient(read_rows::<Medication>(&file(MEDICATIONS_FILE))?);
    records.refills = group_by_patient(read_rows::<Refill>(&file(REFILLS_FILE))?);
    records.problems = group_by_patient(read_rows::<Problem>(&file(PROBLEMS_FILE))?);
    records.procedures = group_by_patient(read_rows::<Procedure>(&file(PROCEDURES_FILE))?);
    records.labs = group_by_patient(read_rows::<Lab>(&file(LABS_FILE))?);
    records.allergies = group_by_patient(read_rows::<Allergy>(&file(ALLERGIES_FILE))?);
    records.immunizations = group_by_patient(
        read_rows::<ImmunizationRow>(&file(IMMUNIZATIONS_FILE))?
            .into_iter()
            .map(Immunization::from),
    );
    records.vitals = group_by_patient(read_rows::<VitalSet>(&file(VITALS_FILE))?);
    records.social_history = read_rows::<SocialHistory>(&file(SOCIAL_HISTORY_FILE))?
        .into_iter()
        .map(|history| (history.patient_id.clone(), history))
        .collect();
    records.family_history =
        group_by_patient(read_rows::<FamilyHistory>(&file(FAMILY_HISTORY_FILE))?);

    info!(
        patients = records.patients.len(),
        medications = row_count(&records.medications),
        refills = row_count(&records.refills),
        problems = row_count(&records.problems),
        procedures = row_count(&records.procedures),
        labs = row_count(&records.labs),
        allergies = row_count(&records.allergies),
        immunizations = row_count(&records.immunizations),
        vitals = row_count(&records.vitals),
        social_history = records.social_history.len(),
        family_history = row_count(&records.family_history),
        "loaded clinical records"
    );

    Ok(records)
}
