use anyhow::{Result, bail};
use chart_model::ClinicalRecords;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// One patient's headline facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientSummary {
    pub patient_id: String,
    pub name: String,
    pub gender: String,
    pub birth_date: String,
    pub problems: Vec<String>,
    /// Medication names with their refill counts.
    pub medications: Vec<(String, usize)>,
    pub lab_results: usize,
}

impl PatientSummary {
    pub fn from_records(records: &ClinicalRecords, patient_id: &str) -> Option<Self> {
        let patient = records.patient(patient_id)?;
        Some(Self {
            patient_id: patient.patient_id.clone(),
            name: format!("{} {}", patient.given_name, patient.family_name),
            gender: patient.gender.clone(),
            birth_date: patient.birth_date.clone(),
            problems: records
                .problems_for(patient_id)
                .iter()
                .map(|problem| problem.name.clone())
                .collect(),
            medications: records
                .medications_for(patient_id)
                .iter()
                .map(|medication| {
                    let refills = records.refills_for(patient_id, &medication.rxnorm).count();
                    (medication.name.clone(), refills)
                })
                .collect(),
            lab_results: records.labs_for(patient_id).len(),
        })
    }
}

/// Summaries for one patient, or every patient when `patient_id` is `None`.
pub fn build_summaries(
    records: &ClinicalRecords,
    patient_id: Option<&str>,
) -> Result<Vec<PatientSummary>> {
    match patient_id {
        Some(patient_id) => match PatientSummary::from_records(records, patient_id) {
            Some(summary) => Ok(vec![summary]),
            None => bail!("patient id {patient_id} not found"),
        },
        None => Ok(records
            .patient_ids()
            .filter_map(|patient_id| PatientSummary::from_records(records, patient_id))
            .collect()),
    }
}

pub fn summary_table(summaries: &[PatientSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Name"),
        header_cell("Gender"),
        header_cell("Birth date"),
        header_cell("Problems"),
        header_cell("Medications"),
        header_cell("Labs"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if let Some(column) = table.column_mut(6) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for summary in summaries {
        let medications: Vec<String> = summary
            .medications
            .iter()
            .map(|(name, refills)| format!("{name} {{{refills}}}"))
            .collect();
        table.add_row(vec![
            Cell::new(&summary.patient_id).fg(Color::Cyan),
            Cell::new(&summary.name),
            Cell::new(&summary.gender),
            Cell::new(&summary.birth_date),
            list_cell(&summary.problems),
            list_cell(&medications),
            labs_cell(summary.lab_results),
        ]);
    }
    table
}

pub fn print_summary(summaries: &[PatientSummary]) {
    println!("{}", summary_table(summaries));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn list_cell(items: &[String]) -> Cell {
    if items.is_empty() {
        dim_cell("None")
    } else {
        Cell::new(items.join("; "))
    }
}

fn labs_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell("None")
    } else {
        Cell::new(format!("{count} results"))
    }
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::{Medication, Patient, Problem, Refill, group_by_patient};

    fn records() -> ClinicalRecords {
        let mut records = ClinicalRecords::new();
        for (id, given) in [("1", "Ann"), ("2", "Bob")] {
            records.patients.insert(
                id.to_string(),
                Patient {
                    patient_id: id.to_string(),
                    given_name: given.to_string(),
                    family_name: "Smith".to_string(),
                    gender: "female".to_string(),
                    birth_date: "1970-01-01".to_string(),
                    ..Patient::default()
                },
            );
        }
        records.problems = group_by_patient(vec![Problem {
            patient_id: "1".to_string(),
            name: "Asthma".to_string(),
            ..Problem::default()
        }]);
        records.medications = group_by_patient(vec![Medication {
            patient_id: "1".to_string(),
            rxnorm: "856845".to_string(),
            name: "Amitriptyline".to_string(),
            ..Medication::default()
        }]);
        records.refills = group_by_patient(vec![
            Refill {
                patient_id: "1".to_string(),
                rxnorm: "856845".to_string(),
                ..Refill::default()
            },
            Refill {
                patient_id: "1".to_string(),
                rxnorm: "856845".to_string(),
                ..Refill::default()
            },
        ]);
        records
    }

    #[test]
    fn summary_counts_refills_per_medication() {
        let summary = PatientSummary::from_records(&records(), "1").expect("summary");
        assert_eq!(summary.name, "Ann Smith");
        assert_eq!(summary.problems, vec!["Asthma".to_string()]);
        assert_eq!(summary.medications, vec![("Amitriptyline".to_string(), 2)]);
        assert_eq!(summary.lab_results, 0);
    }

    #[test]
    fn all_patients_in_id_order() {
        let summaries = build_summaries(&records(), None).expect("summaries");
        let ids: Vec<_> = summaries.iter().map(|s| s.patient_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn unknown_patient_is_an_error() {
        let error = build_summaries(&records(), Some("404")).expect_err("unknown");
        assert_eq!(error.to_string(), "patient id 404 not found");
    }

    #[test]
    fn table_marks_empty_domains() {
        let summaries = build_summaries(&records(), None).expect("summaries");
        let rendered = summary_table(&summaries).to_string();
        assert!(rendered.contains("Amitriptyline {2}"));
        assert!(rendered.contains("None"));
    }
}
