use chart_model::{ClinicalRecords, CodeSystem, SP, SPCODE, VitalKind};

use crate::builders::is_present;
use crate::error::Result;
use crate::session::RecordSession;
use crate::vital_types::attach_vital;

pub(super) fn map_family_history(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    for history in records.family_history_for(session.patient_id()) {
        let node = session.blank();
        session.add_type(node, SP.iri("FamilyHistory"));
        let relative = session.coded_in(
            SPCODE.iri("SNOMED"),
            CodeSystem::Snomed,
            &history.relative_code,
            &history.relative_title,
        );
        session.add(node, SP.iri("aboutRelative"), relative);
        session.add_if_present(node, SP.iri("dateOfBirth"), &history.date_of_birth);
        session.add_if_present(node, SP.iri("dateOfDeath"), &history.date_of_death);
        if is_present(&history.problem_code) {
            let problem = session.coded_in(
                SPCODE.iri("SNOMED"),
                CodeSystem::Snomed,
                &history.problem_code,
                &history.problem_title,
            );
            session.add(node, SP.iri("hasProblem"), problem);
        }
        if is_present(&history.height_cm) {
            attach_vital(session, node, VitalKind::Height, &history.height_cm)?;
        }
        session.register(node);
    }
    Ok(())
}
