use chart_model::{ClinicalRecords, CodeSystem, DCTERMS, SP, SPCODE};

use crate::error::Result;
use crate::session::RecordSession;

pub(super) fn map_procedures(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    for procedure in records.procedures_for(session.patient_id()) {
        let node = session.blank();
        session.add_type(node, SP.iri("Procedure"));
        session.add_literal(node, DCTERMS.iri("date"), &procedure.date);
        let name = session.coded_in(
            SPCODE.iri("SNOMED"),
            CodeSystem::Snomed,
            &procedure.snomed,
            &procedure.name,
        );
        session.add(node, SP.iri("procedureName"), name);
        // Written even when empty.
        session.add_literal(node, SP.iri("notes"), &procedure.notes);
        session.register(node);
    }
    Ok(())
}
