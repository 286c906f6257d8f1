//! The read-only input bundle handed to an assembly session.

use std::collections::BTreeMap;

use crate::facts::{
    Allergy, ClinicalNote, FamilyHistory, Immunization, Lab, Medication, Patient, PatientRecord,
    Problem, Procedure, Refill, SocialHistory, VitalSet,
};

/// Every clinical domain, keyed by patient identifier.
///
/// A patient missing from a map simply has no records in that domain.
#[derive(Debug, Clone, Default)]
pub struct ClinicalRecords {
    pub patients: BTreeMap<String, Patient>,
    pub medications: BTreeMap<String, Vec<Medication>>,
    pub refills: BTreeMap<String, Vec<Refill>>,
    pub problems: BTreeMap<String, Vec<Problem>>,
    pub procedures: BTreeMap<String, Vec<Procedure>>,
    pub labs: BTreeMap<String, Vec<Lab>>,
    pub allergies: BTreeMap<String, Vec<Allergy>>,
    pub immunizations: BTreeMap<String, Vec<Immunization>>,
    pub vitals: BTreeMap<String, Vec<VitalSet>>,
    pub social_history: BTreeMap<String, SocialHistory>,
    pub family_history: BTreeMap<String, Vec<FamilyHistory>>,
    pub notes: BTreeMap<String, Vec<ClinicalNote>>,
}

fn slice_for<'a, T>(map: &'a BTreeMap<String, Vec<T>>, patient_id: &str) -> &'a [T] {
    map.get(patient_id).map(Vec::as_slice).unwrap_or(&[])
}

/// Groups records by patient, preserving input order within a patient.
pub fn group_by_patient<T: PatientRecord>(
    records: impl IntoIterator<Item = T>,
) -> BTreeMap<String, Vec<T>> {
    let mut grouped: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.patient_id().to_string())
            .or_default()
            .push(record);
    }
    grouped
}

impl ClinicalRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    pub fn patient_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.patients.keys().map(String::as_str)
    }

    pub fn medications_for(&self, patient_id: &str) -> &[Medication] {
        slice_for(&self.medications, patient_id)
    }

    /// Refills for one medication, matched on RxNorm code.
    pub fn refills_for<'a>(
        &'a self,
        patient_id: &str,
        rxnorm: &'a str,
    ) -> impl Iterator<Item = &'a Refill> + 'a {
        slice_for(&self.refills, patient_id)
            .iter()
            .filter(move |refill| refill.rxnorm == rxnorm)
    }

    pub fn problems_for(&self, patient_id: &str) -> &[Problem] {
        slice_for(&self.problems, patient_id)
    }

    pub fn procedures_for(&self, patient_id: &str) -> &[Procedure] {
        slice_for(&self.procedures, patient_id)
    }

    pub fn labs_for(&self, patient_id: &str) -> &[Lab] {
        slice_for(&self.labs, patient_id)
    }

    pub fn allergies_for(&self, patient_id: &str) -> &[Allergy] {
        slice_for(&self.allergies, patient_id)
    }

    pub fn immunizations_for(&self, patient_id: &str) -> &[Immunization] {
        slice_for(&self.immunizations, patient_id)
    }

    pub fn vitals_for(&self, patient_id: &str) -> &[VitalSet] {
        slice_for(&self.vitals, patient_id)
    }

    pub fn social_history_for(&self, patient_id: &str) -> Option<&SocialHistory> {
        self.social_history.get(patient_id)
    }

    pub fn family_history_for(&self, patient_id: &str) -> &[FamilyHistory] {
        slice_for(&self.family_history, patient_id)
    }

    pub fn notes_for(&self, patient_id: &str) -> &[ClinicalNote] {
        slice_for(&self.notes, patient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refill(pid: &str, rxn: &str, date: &str) -> Refill {
        Refill {
            patient_id: pid.to_string(),
            rxnorm: rxn.to_string(),
            date: date.to_string(),
            ..Refill::default()
        }
    }

    #[test]
    fn missing_patient_yields_empty_slices() {
        let records = ClinicalRecords::new();
        assert!(records.medications_for("42").is_empty());
        assert!(records.social_history_for("42").is_none());
        assert_eq!(records.refills_for("42", "123").count(), 0);
    }

    #[test]
    fn refills_join_on_rxnorm_in_order() {
        let mut records = ClinicalRecords::new();
        records.refills = group_by_patient(vec![
            refill("1", "123", "2010-01-01"),
            refill("1", "999", "2010-01-02"),
            refill("1", "123", "2010-02-01"),
            refill("2", "123", "2010-03-01"),
        ]);
        let dates: Vec<_> = records
            .refills_for("1", "123")
            .map(|r| r.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2010-01-01", "2010-02-01"]);
    }
}
