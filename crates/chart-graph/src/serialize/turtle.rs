//! Turtle writer.

use std::fmt::Write as _;

use chart_model::{GraphDocument, NAMESPACE_BINDINGS, Node, Triple, rdf_type};

use super::{bound_namespace, escape_iri, escape_literal, is_turtle_local};

/// Encodes `doc` as Turtle.
///
/// Subjects are written in document order, one block each, with `rdf:type`
/// first as `a`.
pub fn write_turtle(doc: &GraphDocument) -> String {
    let mut out = String::new();
    for namespace in NAMESPACE_BINDINGS {
        let _ = writeln!(out, "@prefix {}: <{}> .", namespace.prefix(), namespace.base());
    }

    let triples: Vec<&Triple> = doc.iter().collect();
    for block in triples.chunk_by(|a, b| a.subject == b.subject) {
        out.push('\n');
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &[&Triple]) {
    let rdf_type = rdf_type();
    let (types, others): (Vec<&Triple>, Vec<&Triple>) =
        block.iter().partition(|triple| triple.predicate == rdf_type);

    let mut groups: Vec<String> = Vec::new();
    if !types.is_empty() {
        groups.push(format!("a {}", object_list(&types)));
    }
    for group in others.chunk_by(|a, b| a.predicate == b.predicate) {
        groups.push(format!(
            "{} {}",
            term(&Node::Iri(group[0].predicate.clone())),
            object_list(group)
        ));
    }

    let _ = writeln!(
        out,
        "{} {} .",
        term(&block[0].subject),
        groups.join(" ;\n    ")
    );
}

fn object_list(triples: &[&Triple]) -> String {
    triples
        .iter()
        .map(|triple| term(&triple.object))
        .collect::<Vec<_>>()
        .join(", ")
}

fn term(node: &Node) -> String {
    match node {
        Node::Iri(iri) => match bound_namespace(iri.as_str(), is_turtle_local) {
            Some((namespace, local)) => format!("{}:{local}", namespace.prefix()),
            None => escape_iri(iri.as_str()),
        },
        Node::Blank(blank) => blank.to_string(),
        Node::Literal(literal) => escape_literal(literal.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::{CodeSystem, Literal, SP};

    #[test]
    fn small_document_layout() {
        let mut doc = GraphDocument::new();
        let record = doc.blank_node();
        let problem = doc.blank_node();
        doc.insert(record, rdf_type(), SP.iri("MedicalRecord"));
        doc.insert(record, SP.iri("hasStatement"), problem);
        doc.insert(problem, rdf_type(), SP.iri("Problem"));
        doc.insert(problem, SP.iri("startDate"), Literal::from("2010-01-01"));

        insta::assert_snapshot!(write_turtle(&doc), @r#"
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix sp: <http://smartplatforms.org/terms#> .
        @prefix spcode: <http://smartplatforms.org/terms/codes/> .
        @prefix dc: <http://purl.org/dc/elements/1.1/> .
        @prefix dcterms: <http://purl.org/dc/terms/> .
        @prefix foaf: <http://xmlns.com/foaf/0.1/> .
        @prefix v: <http://www.w3.org/2006/vcard/ns#> .

        _:b0 a sp:MedicalRecord ;
            sp:hasStatement _:b1 .

        _:b1 a sp:Problem ;
            sp:startDate "2010-01-01" .
        "#);
    }

    #[test]
    fn concept_iris_stay_expanded() {
        let concept = Node::Iri(CodeSystem::Loinc.concept("8302-2"));
        assert_eq!(
            term(&concept),
            "<http://purl.bioontology.org/ontology/LNC/8302-2>"
        );
        assert_eq!(term(&Node::Iri(SP.iri("Code"))), "sp:Code");
    }
}
