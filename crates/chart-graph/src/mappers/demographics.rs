use chart_model::{ClinicalRecords, DCTERMS, FOAF, Literal, RDF, SP, VCARD};

use crate::builders::is_present;
use crate::error::Result;
use crate::session::RecordSession;

const RECORD_SYSTEM: &str = "My Hospital Record";

pub(super) fn map_demographics(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    let Some(patient) = records.patient(session.patient_id()) else {
        return Ok(());
    };

    let node = session.blank();
    session.register(node);
    session.add_type(node, SP.iri("Demographics"));

    let name = session.blank();
    session.add(node, VCARD.iri("n"), name);
    session.add_type(name, VCARD.iri("Name"));
    session.add_literal(name, VCARD.iri("given-name"), &patient.given_name);
    session.add_literal(name, VCARD.iri("family-name"), &patient.family_name);
    session.add_if_present(name, VCARD.iri("additional-name"), &patient.initial);

    if is_present(&patient.postal_code) {
        let address = session.blank();
        session.add(node, VCARD.iri("adr"), address);
        for class in ["Address", "Home", "Pref"] {
            session.add_type(address, VCARD.iri(class));
        }
        session.add_literal(address, VCARD.iri("street-address"), &patient.street);
        session.add_if_present(address, VCARD.iri("extended-address"), &patient.apartment);
        session.add_literal(address, VCARD.iri("locality"), &patient.city);
        session.add_literal(address, VCARD.iri("region"), &patient.region);
        session.add_literal(address, VCARD.iri("postal-code"), &patient.postal_code);
        session.add_literal(address, VCARD.iri("country"), &patient.country);
    }

    // Home wins the preferred flag when both phones are on file.
    let has_home = is_present(&patient.home_phone);
    if has_home {
        let phone = session.blank();
        session.add(node, VCARD.iri("tel"), phone);
        for class in ["Tel", "Home", "Pref"] {
            session.add_type(phone, VCARD.iri(class));
        }
        session.add_literal(phone, RDF.iri("value"), &patient.home_phone);
    }
    if is_present(&patient.cell_phone) {
        let phone = session.blank();
        session.add(node, VCARD.iri("tel"), phone);
        session.add_type(phone, VCARD.iri("Tel"));
        session.add_type(phone, VCARD.iri("Cell"));
        if !has_home {
            session.add_type(phone, VCARD.iri("Pref"));
        }
        session.add_literal(phone, RDF.iri("value"), &patient.cell_phone);
    }

    if is_present(&patient.gestational_age) {
        let age = session.value_and_unit(&patient.gestational_age, "wk");
        session.add(node, SP.iri("gestationalAgeAtBirth"), age);
    }

    session.add_literal(node, FOAF.iri("gender"), &patient.gender);
    session.add_literal(node, VCARD.iri("bday"), &patient.birth_date);
    session.add_if_present(node, VCARD.iri("email"), &patient.email);

    let record_number = session.blank();
    session.add(node, SP.iri("medicalRecordNumber"), record_number);
    session.add_type(record_number, SP.iri("Code"));
    session.add(
        record_number,
        DCTERMS.iri("title"),
        Literal::new(format!("{RECORD_SYSTEM} {}", patient.patient_id)),
    );
    session.add_literal(record_number, DCTERMS.iri("identifier"), &patient.patient_id);
    session.add_literal(record_number, SP.iri("system"), RECORD_SYSTEM);

    Ok(())
}
