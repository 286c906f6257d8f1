use chart_model::{ClinicalRecords, CodeSystem, SP};

use crate::error::Result;
use crate::session::RecordSession;

pub(super) fn map_social_history(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    let Some(history) = records.social_history_for(session.patient_id()) else {
        return Ok(());
    };
    let status_uri = CodeSystem::Snomed.concept(history.smoking_status_code.trim());
    let status = session.concept(status_uri.as_str())?;

    let node = session.blank();
    session.add_type(node, SP.iri("SocialHistory"));
    session.add(node, SP.iri("smokingStatus"), status);
    session.register(node);
    Ok(())
}
