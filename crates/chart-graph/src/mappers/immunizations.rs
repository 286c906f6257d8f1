use chart_model::{BlankNode, ClinicalRecords, DCTERMS, Iri, ProductCode, SP, SPCODE};

use crate::error::{GraphError, Result};
use crate::session::RecordSession;

pub(super) fn map_immunizations(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    for immunization in records.immunizations_for(session.patient_id()) {
        let node = session.blank();
        session.register(node);
        session.add_type(node, SP.iri("Immunization"));
        session.add_literal(node, DCTERMS.iri("date"), &immunization.date);

        let status = session.concept(&immunization.administration_status)?;
        session.add(node, SP.iri("administrationStatus"), status);

        if let Some(reason) = immunization.refusal_reason.as_deref()
            && !reason.trim().is_empty()
        {
            let reason = session.concept(reason)?;
            session.add(node, SP.iri("refusalReason"), reason);
        }

        let product = coded_product(
            session,
            "ImmunizationProduct",
            "product",
            &immunization.product,
        )?;
        session.add(node, SP.iri("productName"), product);

        for class in &immunization.product_classes {
            let class = coded_product(session, "ImmunizationClass", "product_class", class)?;
            session.add(node, SP.iri("productClass"), class);
        }
    }
    Ok(())
}

/// Splits a `system#identifier` code at its last `#`.
///
/// The returned system keeps the separator.
fn split_compound_code<'a>(
    field: &'static str,
    code: &'a str,
) -> Result<(&'a str, &'a str)> {
    match code.rfind('#') {
        Some(index) => Ok((&code[..=index], &code[index + 1..])),
        None => Err(GraphError::MalformedCompoundCode {
            field,
            value: code.to_string(),
        }),
    }
}

fn coded_product(
    session: &mut RecordSession<'_>,
    code_class: &str,
    field: &'static str,
    product: &ProductCode,
) -> Result<BlankNode> {
    let (system, identifier) = split_compound_code(field, &product.code)?;
    Ok(session.coded_value(
        SPCODE.iri(code_class),
        Iri::new(product.code.as_str()),
        &product.title,
        system,
        identifier,
    ))
}
