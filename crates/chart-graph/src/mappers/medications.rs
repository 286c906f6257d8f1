use chart_model::{ClinicalRecords, CodeSystem, DCTERMS, SP, SPCODE};

use crate::builders::is_present_quantity;
use crate::error::Result;
use crate::session::RecordSession;

pub(super) fn map_medications(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    let patient_id = session.patient_id();
    for medication in records.medications_for(patient_id) {
        let node = session.blank();
        session.add_type(node, SP.iri("Medication"));
        let drug = session.coded_in(
            SPCODE.iri("RxNorm_Semantic"),
            CodeSystem::RxNorm,
            &medication.rxnorm,
            &medication.name,
        );
        session.add(node, SP.iri("drugName"), drug);
        session.add_literal(node, SP.iri("startDate"), &medication.start_date);
        session.add_if_present(node, SP.iri("endDate"), &medication.end_date);
        session.add_literal(node, SP.iri("instructions"), &medication.instructions);
        if is_present_quantity(&medication.quantity) {
            let quantity = session.value_and_unit(&medication.quantity, &medication.quantity_unit);
            session.add(node, SP.iri("quantity"), quantity);
        }
        if is_present_quantity(&medication.frequency) {
            let frequency =
                session.value_and_unit(&medication.frequency, &medication.frequency_unit);
            session.add(node, SP.iri("frequency"), frequency);
        }
        session.register(node);

        for refill in records.refills_for(patient_id, &medication.rxnorm) {
            let fill = session.blank();
            session.add_type(fill, SP.iri("Fulfillment"));
            session.add_literal(fill, DCTERMS.iri("date"), &refill.date);
            let dispensed = session.value_and_unit(&refill.quantity, "{tab}");
            session.add(fill, SP.iri("quantityDispensed"), dispensed);
            session.add_literal(fill, SP.iri("dispenseDaysSupply"), &refill.days_supply);
            session.add(fill, SP.iri("medication"), node);
            session.add(node, SP.iri("fulfillment"), fill);
            session.register(fill);
        }
    }
    Ok(())
}
