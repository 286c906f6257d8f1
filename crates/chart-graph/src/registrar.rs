//! Record-root membership edges.

use chart_model::{BlankNode, GraphDocument, Node, SP, rdf_type};

/// Owns the `sp:MedicalRecord` root of one document.
///
/// Every top-level fact gets exactly one `sp:hasStatement` edge from the root
/// and one `sp:belongsTo` edge back to it. Nested nodes are never registered.
#[derive(Debug, Clone, Copy)]
pub struct StatementRegistrar {
    record: BlankNode,
}

impl StatementRegistrar {
    /// Creates the record root in `doc`.
    pub fn new(doc: &mut GraphDocument) -> Self {
        let record = doc.blank_node();
        doc.insert(record, rdf_type(), SP.iri("MedicalRecord"));
        Self { record }
    }

    pub fn record(&self) -> BlankNode {
        self.record
    }

    pub fn register(&self, doc: &mut GraphDocument, fact: impl Into<Node>) {
        let fact = fact.into();
        doc.insert(self.record, SP.iri("hasStatement"), fact.clone());
        doc.insert(fact, SP.iri("belongsTo"), self.record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_symmetric_and_idempotent() {
        let mut doc = GraphDocument::new();
        let registrar = StatementRegistrar::new(&mut doc);
        let fact = doc.blank_node();
        registrar.register(&mut doc, fact);
        registrar.register(&mut doc, fact);

        let root = Node::Blank(registrar.record());
        let fact = Node::Blank(fact);
        assert_eq!(doc.objects(&root, &SP.iri("hasStatement")).count(), 1);
        assert_eq!(doc.objects(&fact, &SP.iri("belongsTo")).count(), 1);
        assert_eq!(doc.len(), 3);
    }
}
