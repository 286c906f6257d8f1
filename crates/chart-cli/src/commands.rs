use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chart_graph::{SerializationFormat, assemble_patient, default_registry, serialize};
use chart_ingest::load_records;
use chart_model::ClinicalRecords;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, info_span};

use crate::summary::apply_table_style;

/// A patient whose graph could not be written.
#[derive(Debug)]
pub struct PatientFailure {
    pub patient_id: String,
    pub error: anyhow::Error,
}

/// Result of writing every patient graph into a directory.
#[derive(Debug, Default)]
pub struct WriteOutcome {
    pub written: Vec<PathBuf>,
    pub failures: Vec<PatientFailure>,
}

impl WriteOutcome {
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Mapper domains in the order they run during assembly.
pub fn domain_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Domain", "Description"]);
    apply_table_style(&mut table);
    for (index, mapper) in default_registry().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            mapper.domain().to_string(),
            mapper.description().to_string(),
        ]);
    }
    table
}

pub fn load_data(data_dir: &Path) -> Result<ClinicalRecords> {
    load_records(data_dir).with_context(|| format!("load records from {}", data_dir.display()))
}

/// Assembles and serializes one known patient.
pub fn render_patient(
    records: &ClinicalRecords,
    patient_id: &str,
    format: SerializationFormat,
) -> Result<String> {
    if records.patient(patient_id).is_none() {
        bail!("patient id {patient_id} not found");
    }
    let doc = assemble_patient(patient_id, records)
        .with_context(|| format!("assemble patient {patient_id}"))?;
    serialize(&doc, format).with_context(|| format!("serialize patient {patient_id} as {format}"))
}

pub fn patient_file_name(patient_id: &str, format: SerializationFormat) -> String {
    format!("p{patient_id}.{}", format.file_extension())
}

fn write_patient(
    records: &ClinicalRecords,
    patient_id: &str,
    output_dir: &Path,
    format: SerializationFormat,
) -> Result<PathBuf> {
    let text = render_patient(records, patient_id, format)?;
    let path = output_dir.join(patient_file_name(patient_id, format));
    fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Writes `p<pid>.<ext>` for every patient into an existing directory.
///
/// Patients that fail are logged and collected; the rest are still written.
pub fn write_patients(
    records: &ClinicalRecords,
    output_dir: &Path,
    format: SerializationFormat,
) -> Result<WriteOutcome> {
    if !output_dir.is_dir() {
        bail!(
            "invalid path '{}': directory must already exist",
            output_dir.display()
        );
    }
    let span = info_span!("write", output_dir = %output_dir.display(), format = %format);
    let _guard = span.enter();

    let progress = ProgressBar::new(records.patients.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} patient {msg}")
            .context("progress bar template")?,
    );

    let mut outcome = WriteOutcome::default();
    for patient_id in records.patient_ids() {
        progress.set_message(patient_id.to_string());
        match write_patient(records, patient_id, output_dir, format) {
            Ok(path) => outcome.written.push(path),
            Err(failure) => {
                let message = format!("{failure:#}");
                error!(patient_id = %patient_id, error = %message, "skipping patient");
                outcome.failures.push(PatientFailure {
                    patient_id: patient_id.to_string(),
                    error: failure,
                });
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(
        written = outcome.written.len(),
        failed = outcome.failures.len(),
        "finished writing patient graphs"
    );
    Ok(outcome)
}
