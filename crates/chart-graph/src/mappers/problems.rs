use chart_model::{ClinicalRecords, CodeSystem, SP, SPCODE};

use crate::error::Result;
use crate::session::RecordSession;

pub(super) fn map_problems(session: &mut RecordSession<'_>, records: &ClinicalRecords) -> Result<()> {
    for problem in records.problems_for(session.patient_id()) {
        let node = session.blank();
        session.add_type(node, SP.iri("Problem"));
        session.add_literal(node, SP.iri("startDate"), &problem.start_date);
        session.add_if_present(node, SP.iri("endDate"), &problem.end_date);
        let name = session.coded_in(
            SPCODE.iri("SNOMED"),
            CodeSystem::Snomed,
            &problem.snomed,
            &problem.name,
        );
        session.add(node, SP.iri("problemName"), name);
        session.register(node);
    }
    Ok(())
}
