use std::collections::BTreeSet;

use chart_model::{GraphDocument, Literal, Node, SP, Triple};
use proptest::prelude::*;

fn edge_strategy() -> impl Strategy<Value = (u8, u8, String)> {
    (0u8..4, 0u8..3, "[a-c]{0,2}")
}

proptest! {
    #[test]
    fn insertion_has_set_semantics(edges in prop::collection::vec(edge_strategy(), 0..40)) {
        let mut doc = GraphDocument::new();
        let nodes: Vec<_> = (0..4).map(|_| doc.blank_node()).collect();
        let mut expected = BTreeSet::new();
        for (subject, predicate, value) in &edges {
            let predicate = SP.iri(&format!("p{predicate}"));
            let triple = Triple::new(nodes[*subject as usize], predicate, Literal::from(value.as_str()));
            expected.insert(triple.clone());
            doc.insert_triple(triple);
        }
        prop_assert_eq!(doc.len(), expected.len());
        prop_assert!(doc.iter().eq(expected.iter()));
    }

    #[test]
    fn merge_keeps_every_fragment_edge(edges in prop::collection::vec(edge_strategy(), 1..20)) {
        let mut fragment = GraphDocument::new();
        let nodes: Vec<_> = (0..4).map(|_| fragment.blank_node()).collect();
        for (subject, predicate, value) in &edges {
            fragment.insert(
                nodes[*subject as usize],
                SP.iri(&format!("p{predicate}")),
                Literal::from(value.as_str()),
            );
        }
        let mut doc = GraphDocument::new();
        let root = doc.blank_node();
        doc.insert(root, SP.iri("root"), Node::literal("x"));
        doc.merge(&fragment);
        prop_assert_eq!(doc.len(), fragment.len() + 1);
    }
}

#[test]
fn subjects_of_type_finds_typed_nodes() {
    let mut doc = GraphDocument::new();
    let note = doc.blank_node();
    let other = doc.blank_node();
    doc.insert(note, chart_model::rdf_type(), SP.iri("ClinicalNote"));
    doc.insert(other, chart_model::rdf_type(), SP.iri("Problem"));
    assert_eq!(
        doc.subjects_of_type(&SP.iri("ClinicalNote")),
        vec![&Node::Blank(note)]
    );
}
