use std::fs;

use chart_ingest::{IngestError, load_records};
use chart_model::VitalKind;
use tempfile::TempDir;

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let files = [
        (
            "patients.csv",
            "patient_id,given_name,family_name,gender,birth_date,home_phone\n\
             1520204,Bruce,Wayne,male,1954-06-07,800-555-1212\n\
             665677,Paul,Luttrell,male,1949-12-01,\n",
        ),
        (
            "medications.csv",
            "patient_id,rxnorm,name,start_date,quantity,quantity_unit\n\
             1520204,856845,Amitriptyline 25 MG Oral Tablet,2007-04-03,1,{tablet}\n\
             1520204,197361,Amlodipine 5 MG Oral Tablet,2008-01-10,1,{tablet}\n",
        ),
        (
            "refills.csv",
            "patient_id,rxnorm,date,days_supply,quantity\n\
             1520204,856845,2007-04-03,30,30\n\
             1520204,856845,2007-05-03,30,30\n",
        ),
        (
            "vitals.csv",
            "patient_id,timestamp,encounter_type,systolic,diastolic,weight\n\
             665677,2007-04-03T09:00:00Z,ambulatory,132,85,\n",
        ),
        (
            "immunizations.csv",
            "patient_id,date,administration_status,cvx,cvx_title,vg,vg_title\n\
             665677,2011-03-01,http://smartplatforms.org/terms/codes/ImmunizationAdministrationStatus#doseGiven,\
             http://www2a.cdc.gov/nip/IIS/IISStandards/vaccines.asp?rpt=cvx#33,pneumococcal,\
             http://www2a.cdc.gov/nip/IIS/IISStandards/vaccines.asp?rpt=vg#PneumoPPV,Pneumococcal\n",
        ),
        (
            "social_history.csv",
            "patient_id,smoking_status_code\n1520204,266919005\n1520204,8517006\n",
        ),
    ];
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write fixture");
    }
    dir
}

#[test]
fn loads_present_domains_and_leaves_the_rest_empty() {
    let dir = data_dir();
    let records = load_records(dir.path()).expect("load");

    assert_eq!(records.patient_ids().collect::<Vec<_>>(), vec!["1520204", "665677"]);
    assert_eq!(records.medications_for("1520204").len(), 2);
    assert_eq!(records.refills_for("1520204", "856845").count(), 2);
    assert!(records.problems.is_empty());
    assert!(records.labs.is_empty());
    assert!(records.notes.is_empty());
}

#[test]
fn vital_readings_survive_loading() {
    let dir = data_dir();
    let records = load_records(dir.path()).expect("load");
    let vitals = records.vitals_for("665677");
    assert_eq!(vitals.len(), 1);
    assert!(vitals[0].is_ambulatory());
    assert_eq!(vitals[0].reading(VitalKind::Systolic), Some("132"));
    assert_eq!(vitals[0].reading(VitalKind::Weight), None);
}

#[test]
fn immunization_rows_become_product_codes() {
    let dir = data_dir();
    let records = load_records(dir.path()).expect("load");
    let immunization = &records.immunizations_for("665677")[0];
    assert!(immunization.product.code.ends_with("rpt=cvx#33"));
    assert_eq!(immunization.product_classes.len(), 1);
    assert_eq!(immunization.refusal_reason, None);
}

#[test]
fn repeated_social_history_keeps_the_last_row() {
    let dir = data_dir();
    let records = load_records(dir.path()).expect("load");
    let history = records.social_history_for("1520204").expect("history");
    assert_eq!(history.smoking_status_code, "8517006");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = load_records(&dir.path().join("nope")).expect_err("missing dir");
    assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
}
