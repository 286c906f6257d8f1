//! One patient's assembly session.

use std::collections::BTreeMap;

use chart_model::{BlankNode, CodeSystem, GraphDocument, Iri, Literal, Node, rdf_type};

use crate::builders;
use crate::error::Result;
use crate::registrar::StatementRegistrar;
use crate::terminology::Terminology;

/// Exclusive owner of the growing [`GraphDocument`] for one patient.
///
/// Mappers only append through this type; the document is handed out once,
/// by [`RecordSession::into_document`], after every mapper has run.
pub struct RecordSession<'a> {
    patient_id: &'a str,
    doc: GraphDocument,
    registrar: StatementRegistrar,
    terminology: &'a Terminology,
}

impl<'a> RecordSession<'a> {
    pub fn new(patient_id: &'a str, terminology: &'a Terminology) -> Self {
        let mut doc = GraphDocument::new();
        let registrar = StatementRegistrar::new(&mut doc);
        Self {
            patient_id,
            doc,
            registrar,
            terminology,
        }
    }

    pub fn patient_id(&self) -> &'a str {
        self.patient_id
    }

    /// The `sp:MedicalRecord` root.
    pub fn record(&self) -> BlankNode {
        self.registrar.record()
    }

    pub fn document(&self) -> &GraphDocument {
        &self.doc
    }

    pub fn into_document(self) -> GraphDocument {
        self.doc
    }

    pub fn blank(&mut self) -> BlankNode {
        self.doc.blank_node()
    }

    pub fn add(&mut self, subject: impl Into<Node>, predicate: Iri, object: impl Into<Node>) {
        self.doc.insert(subject, predicate, object);
    }

    pub fn add_type(&mut self, node: impl Into<Node>, class: Iri) {
        self.doc.insert(node, rdf_type(), class);
    }

    /// Always emits the literal, even when empty.
    pub fn add_literal(&mut self, subject: impl Into<Node>, predicate: Iri, value: &str) {
        self.doc.insert(subject, predicate, Literal::from(value));
    }

    pub fn add_if_present(
        &mut self,
        subject: impl Into<Node>,
        predicate: Iri,
        value: &str,
    ) -> bool {
        builders::add_if_present(&mut self.doc, subject, predicate, value)
    }

    pub fn coded_value(
        &mut self,
        code_class: Iri,
        concept: Iri,
        title: &str,
        system: &str,
        identifier: &str,
    ) -> BlankNode {
        builders::coded_value(&mut self.doc, code_class, concept, title, system, identifier)
    }

    /// Coded value for `identifier` in one of the URI-addressed ontologies.
    pub fn coded_in(
        &mut self,
        code_class: Iri,
        system: CodeSystem,
        identifier: &str,
        title: &str,
    ) -> BlankNode {
        builders::coded_value(
            &mut self.doc,
            code_class,
            system.concept(identifier),
            title,
            system.base(),
            identifier,
        )
    }

    /// Coded value for a concept known only by URI.
    pub fn concept(&mut self, uri: &str) -> Result<BlankNode> {
        self.terminology.coded_value(&mut self.doc, uri)
    }

    pub fn value_and_unit(&mut self, value: &str, unit: &str) -> BlankNode {
        builders::value_and_unit(&mut self.doc, value, unit)
    }

    /// Links a top-level fact to the record root in both directions.
    pub fn register(&mut self, fact: impl Into<Node>) {
        self.registrar.register(&mut self.doc, fact);
    }

    /// Merges a finished fragment, returning its blank-node relabeling.
    pub fn merge(&mut self, fragment: &GraphDocument) -> BTreeMap<BlankNode, BlankNode> {
        self.doc.merge(fragment)
    }
}
