use chart_model::{ClinicalRecords, Node, SP};

use crate::error::{GraphError, Result};
use crate::session::RecordSession;

/// Merges each note's finished sub-graph and registers its note node.
pub(super) fn map_clinical_notes(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    let patient_id = session.patient_id();
    for note in records.notes_for(patient_id) {
        let root = note
            .graph
            .subjects_of_type(&SP.iri("ClinicalNote"))
            .into_iter()
            .next()
            .cloned()
            .ok_or_else(|| GraphError::MissingNoteRoot {
                patient_id: patient_id.to_string(),
            })?;

        let relabeled = session.merge(&note.graph);
        let root = match root {
            Node::Blank(blank) => Node::Blank(relabeled.get(&blank).copied().unwrap_or(blank)),
            other => other,
        };
        session.register(root);
    }
    Ok(())
}
