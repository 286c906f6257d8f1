//! Graph primitives shared by the assembler and its callers.
//!
//! A [`GraphDocument`] is a set of [`Triple`]s. Nodes carry no type of their
//! own; types are asserted with `rdf:type` edges like any other fact.
//! Iteration order is the derived ordering of triples, which keeps every
//! serialization of the same document byte-for-byte stable.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::namespace::RDF;

/// An absolute IRI used for predicates, classes and concept references.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anonymous vertex, scoped to the document that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlankNode(u32);

impl BlankNode {
    pub fn id(self) -> u32 {
        self.0
    }

    /// Label used by every serializer (`b0`, `b1`, ...).
    pub fn label(self) -> String {
        format!("b{}", self.0)
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:b{}", self.0)
    }
}

/// Plain literal; numbers travel in their lexical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(String);

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl Node {
    pub fn literal(value: impl Into<String>) -> Self {
        Node::Literal(Literal::new(value))
    }

    pub fn iri(value: impl Into<String>) -> Self {
        Node::Iri(Iri::new(value))
    }

    pub fn as_blank(&self) -> Option<BlankNode> {
        match self {
            Node::Blank(node) => Some(*node),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Node::Literal(literal) => Some(literal.as_str()),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }
}

impl From<Iri> for Node {
    fn from(value: Iri) -> Self {
        Node::Iri(value)
    }
}

impl From<BlankNode> for Node {
    fn from(value: BlankNode) -> Self {
        Node::Blank(value)
    }
}

impl From<Literal> for Node {
    fn from(value: Literal) -> Self {
        Node::Literal(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(node) => write!(f, "{node}"),
            Node::Literal(literal) => write!(f, "{:?}", literal.as_str()),
        }
    }
}

/// A directed, labeled edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Iri,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: impl Into<Node>, predicate: Iri, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

/// Append-only edge set for one patient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDocument {
    triples: BTreeSet<Triple>,
    next_blank: u32,
}

impl GraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh anonymous node.
    pub fn blank_node(&mut self) -> BlankNode {
        let node = BlankNode(self.next_blank);
        self.next_blank += 1;
        node
    }

    /// Adds an edge. Returns `false` when the edge was already present.
    pub fn insert(
        &mut self,
        subject: impl Into<Node>,
        predicate: Iri,
        object: impl Into<Node>,
    ) -> bool {
        self.insert_triple(Triple::new(subject, predicate, object))
    }

    /// Adds a prepared edge, reserving any blank labels it mentions.
    pub fn insert_triple(&mut self, triple: Triple) -> bool {
        for node in [&triple.subject, &triple.object] {
            if let Some(blank) = node.as_blank() {
                self.next_blank = self.next_blank.max(blank.0 + 1);
            }
        }
        self.triples.insert(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> + '_ {
        self.triples.iter()
    }

    pub fn contains(&self, subject: &Node, predicate: &Iri, object: &Node) -> bool {
        self.triples
            .iter()
            .any(|t| &t.subject == subject && &t.predicate == predicate && &t.object == object)
    }

    /// Objects of edges `subject predicate ?`, in document order.
    pub fn objects<'a>(
        &'a self,
        subject: &Node,
        predicate: &Iri,
    ) -> impl Iterator<Item = &'a Node> + use<'a> {
        let (subject, predicate) = (subject.clone(), predicate.clone());
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects of edges `? predicate object`, in document order.
    pub fn subjects<'a>(
        &'a self,
        predicate: &Iri,
        object: &Node,
    ) -> impl Iterator<Item = &'a Node> + use<'a> {
        let (predicate, object) = (predicate.clone(), object.clone());
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate && t.object == object)
            .map(|t| &t.subject)
    }

    /// Nodes carrying `rdf:type <class>`.
    pub fn subjects_of_type(&self, class: &Iri) -> Vec<&Node> {
        let rdf_type = RDF.iri("type");
        let class = Node::Iri(class.clone());
        self.triples
            .iter()
            .filter(|t| t.predicate == rdf_type && t.object == class)
            .map(|t| &t.subject)
            .collect()
    }

    /// Copies `other` into this document under fresh blank labels.
    ///
    /// The returned map translates `other`'s blank nodes to their new labels.
    pub fn merge(&mut self, other: &GraphDocument) -> BTreeMap<BlankNode, BlankNode> {
        let mut relabeled: BTreeMap<BlankNode, BlankNode> = BTreeMap::new();
        for triple in &other.triples {
            let subject = self.relabel(&triple.subject, &mut relabeled);
            let object = self.relabel(&triple.object, &mut relabeled);
            self.triples.insert(Triple {
                subject,
                predicate: triple.predicate.clone(),
                object,
            });
        }
        relabeled
    }

    fn relabel(&mut self, node: &Node, relabeled: &mut BTreeMap<BlankNode, BlankNode>) -> Node {
        match node {
            Node::Blank(blank) => {
                let fresh = match relabeled.get(blank) {
                    Some(existing) => *existing,
                    None => {
                        let fresh = self.blank_node();
                        relabeled.insert(*blank, fresh);
                        fresh
                    }
                };
                Node::Blank(fresh)
            }
            other => other.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a GraphDocument {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::SP;

    #[test]
    fn duplicate_edges_collapse() {
        let mut doc = GraphDocument::new();
        let node = doc.blank_node();
        assert!(doc.insert(node, SP.iri("value"), Literal::from("1")));
        assert!(!doc.insert(node, SP.iri("value"), Literal::from("1")));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn queries_accept_temporary_keys() {
        let mut doc = GraphDocument::new();
        let record = doc.blank_node();
        let fact = doc.blank_node();
        doc.insert(record, SP.iri("hasStatement"), fact);
        doc.insert(fact, SP.iri("belongsTo"), record);

        let objects: Vec<&Node> = doc
            .objects(&Node::Blank(record), &SP.iri("hasStatement"))
            .collect();
        assert_eq!(objects, vec![&Node::Blank(fact)]);

        let subjects: Vec<&Node> = doc
            .subjects(&SP.iri("belongsTo"), &Node::Blank(record))
            .collect();
        assert_eq!(subjects, vec![&Node::Blank(fact)]);
        assert_eq!(
            doc.subjects(&SP.iri("belongsTo"), &Node::Blank(fact)).count(),
            0
        );
    }

    #[test]
    fn merge_relabels_blank_nodes() {
        let mut doc = GraphDocument::new();
        let existing = doc.blank_node();
        doc.insert(existing, SP.iri("value"), Literal::from("a"));

        let mut fragment = GraphDocument::new();
        let note = fragment.blank_node();
        fragment.insert(note, SP.iri("value"), Literal::from("b"));

        let map = doc.merge(&fragment);
        let moved = map[&note];
        assert_ne!(moved, existing);
        assert!(doc.contains(
            &Node::Blank(moved),
            &SP.iri("value"),
            &Node::literal("b")
        ));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn inserting_foreign_blank_reserves_label() {
        let mut fragment = GraphDocument::new();
        let first = fragment.blank_node();
        let mut doc = GraphDocument::new();
        doc.insert_triple(Triple::new(
            BlankNode(7),
            SP.iri("value"),
            Node::Blank(first),
        ));
        assert_eq!(doc.blank_node().id(), 8);
    }
}
