use chart_model::{ClinicalRecords, DCTERMS, SP, VitalKind};

use crate::error::Result;
use crate::session::RecordSession;
use crate::vital_types::attach_vital;

const AMBULATORY: &str = "http://smartplatforms.org/terms/codes/EncounterType#ambulatory";

pub(super) fn map_vitals(session: &mut RecordSession<'_>, records: &ClinicalRecords) -> Result<()> {
    for set in records.vitals_for(session.patient_id()) {
        let node = session.blank();
        session.register(node);
        session.add_type(node, SP.iri("VitalSignSet"));
        session.add_literal(node, DCTERMS.iri("date"), &set.timestamp);

        let encounter = session.blank();
        session.add_type(encounter, SP.iri("Encounter"));
        session.add(node, SP.iri("encounter"), encounter);
        session.add_literal(encounter, SP.iri("startDate"), &set.start_date);
        session.add_literal(encounter, SP.iri("endDate"), &set.end_date);
        if set.is_ambulatory() {
            let encounter_type = session.concept(AMBULATORY)?;
            session.add(encounter, SP.iri("encounterType"), encounter_type);
        }

        for kind in VitalKind::SET_MEMBERS {
            if let Some(value) = set.reading(kind) {
                attach_vital(session, node, kind, value)?;
            }
        }

        if set.reading(VitalKind::Systolic).is_some() {
            let pressure = session.blank();
            session.add(node, SP.iri("bloodPressure"), pressure);
            session.add_type(pressure, SP.iri("BloodPressure"));
            for kind in [VitalKind::Systolic, VitalKind::Diastolic] {
                if let Some(value) = set.reading(kind) {
                    attach_vital(session, pressure, kind, value)?;
                }
            }
        }
    }
    Ok(())
}
