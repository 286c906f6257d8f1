//! Per-patient graph assembly.

use std::time::Instant;

use chart_model::{ClinicalRecords, GraphDocument};
use tracing::{debug, info_span};

use crate::error::Result;
use crate::mappers::{MapperRegistry, default_registry};
use crate::session::RecordSession;
use crate::terminology::Terminology;

/// Builds one patient's graph with the default mappers and terminology.
///
/// Mappers run in the registry's fixed order. The first mapper error aborts
/// the assembly and no document is returned.
pub fn assemble_patient(patient_id: &str, records: &ClinicalRecords) -> Result<GraphDocument> {
    assemble_with(
        patient_id,
        records,
        default_registry(),
        Terminology::standard(),
    )
}

/// Builds one patient's graph with an explicit registry and terminology.
pub fn assemble_with(
    patient_id: &str,
    records: &ClinicalRecords,
    registry: &MapperRegistry,
    terminology: &Terminology,
) -> Result<GraphDocument> {
    let span = info_span!("patient", patient_id = %patient_id);
    let _guard = span.enter();
    let start = Instant::now();

    let mut session = RecordSession::new(patient_id, terminology);
    for mapper in registry.iter() {
        let before = session.document().len();
        mapper.map(&mut session, records)?;
        debug!(
            domain = %mapper.domain(),
            triples_added = session.document().len() - before,
            "mapper complete"
        );
    }

    let doc = session.into_document();
    debug!(
        triple_count = doc.len(),
        duration_ms = start.elapsed().as_millis(),
        "assembly complete"
    );
    Ok(doc)
}
