//! The two recurring sub-graph shapes and the conditional-edge helper.
//!
//! These only ever append to the document they are given.

use chart_model::{BlankNode, DCTERMS, GraphDocument, Iri, Literal, Node, SP, rdf_type};

/// Builds a coded value and returns its wrapper node.
///
/// ```text
/// _:cv a sp:CodedValue ; dcterms:title "title" ; sp:code <concept> .
/// <concept> a <code_class>, sp:Code ;
///     dcterms:title "title" ; sp:system "system" ; dcterms:identifier "identifier" .
/// ```
///
/// Empty `title`, `system` or `identifier` values are still written.
pub fn coded_value(
    doc: &mut GraphDocument,
    code_class: Iri,
    concept: Iri,
    title: &str,
    system: &str,
    identifier: &str,
) -> BlankNode {
    let wrapper = doc.blank_node();
    doc.insert(wrapper, rdf_type(), SP.iri("CodedValue"));
    doc.insert(wrapper, DCTERMS.iri("title"), Literal::from(title));
    doc.insert(wrapper, SP.iri("code"), concept.clone());

    doc.insert(concept.clone(), rdf_type(), code_class);
    doc.insert(concept.clone(), rdf_type(), SP.iri("Code"));
    doc.insert(concept.clone(), DCTERMS.iri("title"), Literal::from(title));
    doc.insert(concept.clone(), SP.iri("system"), Literal::from(system));
    doc.insert(concept, DCTERMS.iri("identifier"), Literal::from(identifier));
    wrapper
}

/// Builds an `sp:ValueAndUnit` node.
pub fn value_and_unit(doc: &mut GraphDocument, value: &str, unit: &str) -> BlankNode {
    let node = doc.blank_node();
    doc.insert(node, rdf_type(), SP.iri("ValueAndUnit"));
    doc.insert(node, SP.iri("value"), Literal::from(value));
    doc.insert(node, SP.iri("unit"), Literal::from(unit));
    node
}

/// True when a source field carries a value.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when a quantity field is present and not numerically zero.
pub fn is_present_quantity(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(number) => number != 0.0,
        Err(_) => true,
    }
}

/// Emits `subject predicate "value"` only when `value` is present.
pub fn add_if_present(
    doc: &mut GraphDocument,
    subject: impl Into<Node>,
    predicate: Iri,
    value: &str,
) -> bool {
    if !is_present(value) {
        return false;
    }
    doc.insert(subject, predicate, Literal::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::{CodeSystem, SPCODE};

    #[test]
    fn coded_value_is_dual_typed_with_single_code_edge() {
        let mut doc = GraphDocument::new();
        let concept = CodeSystem::Snomed.concept("38341003");
        let wrapper = coded_value(
            &mut doc,
            SPCODE.iri("SNOMED"),
            concept.clone(),
            "Hypertension",
            CodeSystem::Snomed.base(),
            "38341003",
        );
        let wrapper = Node::Blank(wrapper);
        let codes: Vec<_> = doc.objects(&wrapper, &SP.iri("code")).collect();
        assert_eq!(codes, vec![&Node::Iri(concept.clone())]);

        let concept = Node::Iri(concept);
        let types: Vec<_> = doc.objects(&concept, &rdf_type()).collect();
        assert!(types.contains(&&Node::Iri(SPCODE.iri("SNOMED"))));
        assert!(types.contains(&&Node::Iri(SP.iri("Code"))));
        assert_eq!(doc.len(), 8);
    }

    #[test]
    fn empty_coded_fields_are_still_emitted() {
        let mut doc = GraphDocument::new();
        coded_value(
            &mut doc,
            SPCODE.iri("SNOMED"),
            CodeSystem::Snomed.concept(""),
            "",
            "",
            "",
        );
        let concept = Node::Iri(CodeSystem::Snomed.concept(""));
        let identifiers: Vec<_> = doc.objects(&concept, &DCTERMS.iri("identifier")).collect();
        assert_eq!(identifiers, vec![&Node::literal("")]);
    }

    #[test]
    fn quantity_presence_rejects_zero() {
        assert!(is_present_quantity("30"));
        assert!(is_present_quantity("1/2"));
        assert!(!is_present_quantity("0"));
        assert!(!is_present_quantity("0.0"));
        assert!(!is_present_quantity(" "));
    }

    #[test]
    fn add_if_present_skips_blank_values() {
        let mut doc = GraphDocument::new();
        let node = doc.blank_node();
        assert!(!add_if_present(&mut doc, node, SP.iri("endDate"), "  "));
        assert!(add_if_present(&mut doc, node, SP.iri("endDate"), "2011-01-01"));
        assert_eq!(doc.len(), 1);
    }
}
