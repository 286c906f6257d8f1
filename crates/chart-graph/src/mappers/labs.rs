use chart_model::{ClinicalRecords, CodeSystem, DCTERMS, SP, SPCODE};

use crate::builders::is_present;
use crate::error::Result;
use crate::session::RecordSession;

pub(super) fn map_labs(session: &mut RecordSession<'_>, records: &ClinicalRecords) -> Result<()> {
    for lab in records.labs_for(session.patient_id()) {
        let node = session.blank();
        session.add_type(node, SP.iri("LabResult"));
        let name = session.coded_in(SPCODE.iri("LOINC"), CodeSystem::Loinc, &lab.loinc, &lab.name);
        session.add(node, SP.iri("labName"), name);

        if lab.is_quantitative() {
            let result = session.blank();
            session.add_type(result, SP.iri("QuantitativeResult"));
            let value = session.value_and_unit(&lab.value, &lab.units);
            session.add(result, SP.iri("valueAndUnit"), value);

            if is_present(&lab.low) && is_present(&lab.high) {
                let range = session.blank();
                session.add_type(range, SP.iri("ValueRange"));
                let minimum = session.value_and_unit(&lab.low, &lab.units);
                session.add(range, SP.iri("minimum"), minimum);
                let maximum = session.value_and_unit(&lab.high, &lab.units);
                session.add(range, SP.iri("maximum"), maximum);
                session.add(result, SP.iri("normalRange"), range);
            }
            session.add(node, SP.iri("quantitativeResult"), result);
        } else {
            let result = session.blank();
            session.add_type(result, SP.iri("NarrativeResult"));
            session.add_literal(result, SP.iri("value"), &lab.value);
            session.add(node, SP.iri("narrativeResult"), result);
        }

        session.add_literal(node, DCTERMS.iri("date"), &lab.date);
        session.add_literal(node, SP.iri("accessionNumber"), &lab.accession_number);
        session.register(node);
    }
    Ok(())
}
