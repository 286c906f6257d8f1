//! N-Triples writer.

use std::fmt::Write as _;

use chart_model::{GraphDocument, Node};

use super::{escape_iri, escape_literal};

/// Encodes `doc` with one fully expanded triple per line.
pub fn write_ntriples(doc: &GraphDocument) -> String {
    let mut out = String::new();
    for triple in doc {
        let _ = writeln!(
            out,
            "{} {} {} .",
            term(&triple.subject),
            escape_iri(triple.predicate.as_str()),
            term(&triple.object)
        );
    }
    out
}

fn term(node: &Node) -> String {
    match node {
        Node::Iri(iri) => escape_iri(iri.as_str()),
        Node::Blank(blank) => blank.to_string(),
        Node::Literal(literal) => escape_literal(literal.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::{Iri, Literal, SP};

    #[test]
    fn lines_are_fully_expanded() {
        let mut doc = GraphDocument::new();
        let node = doc.blank_node();
        doc.insert(node, SP.iri("notes"), Literal::from("line one\nline \"two\""));
        assert_eq!(
            write_ntriples(&doc),
            "_:b0 <http://smartplatforms.org/terms#notes> \"line one\\nline \\\"two\\\"\" .\n"
        );
    }

    #[test]
    fn iris_with_delimiters_stay_one_term() {
        let mut doc = GraphDocument::new();
        let node = doc.blank_node();
        doc.insert(
            node,
            SP.iri("code"),
            Iri::new("http://x.org/vaccines asp?rpt=cvx#1>2"),
        );
        assert_eq!(
            write_ntriples(&doc),
            "_:b0 <http://smartplatforms.org/terms#code> <http://x.org/vaccines\\u0020asp?rpt=cvx#1\\u003E2> .\n"
        );
    }
}
