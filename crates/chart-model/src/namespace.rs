//! Vocabulary namespaces and external code systems.

use crate::graph::Iri;

/// A prefix binding such as `sp` → `http://smartplatforms.org/terms#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    prefix: &'static str,
    base: &'static str,
}

impl Namespace {
    pub const fn new(prefix: &'static str, base: &'static str) -> Self {
        Self { prefix, base }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn iri(&self, local: &str) -> Iri {
        Iri::new(format!("{}{local}", self.base))
    }

    /// Returns the local part of `iri` when it lives in this namespace.
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.base)
    }
}

pub const RDF: Namespace = Namespace::new("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
pub const RDFS: Namespace = Namespace::new("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
pub const SP: Namespace = Namespace::new("sp", "http://smartplatforms.org/terms#");
pub const SPCODE: Namespace = Namespace::new("spcode", "http://smartplatforms.org/terms/codes/");
pub const DC: Namespace = Namespace::new("dc", "http://purl.org/dc/elements/1.1/");
pub const DCTERMS: Namespace = Namespace::new("dcterms", "http://purl.org/dc/terms/");
pub const FOAF: Namespace = Namespace::new("foaf", "http://xmlns.com/foaf/0.1/");
pub const VCARD: Namespace = Namespace::new("v", "http://www.w3.org/2006/vcard/ns#");

/// Prefix bindings applied by every serializer, in output order.
pub const NAMESPACE_BINDINGS: [Namespace; 8] = [RDF, RDFS, SP, SPCODE, DC, DCTERMS, FOAF, VCARD];

/// Shorthand for `rdf:type`.
pub fn rdf_type() -> Iri {
    RDF.iri("type")
}

/// External ontologies whose concepts are addressed as `<base><identifier>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSystem {
    RxNorm,
    NdfRt,
    Unii,
    Snomed,
    Loinc,
}

impl CodeSystem {
    /// The concept URI base; also emitted as the coded value's `sp:system`.
    pub fn base(&self) -> &'static str {
        match self {
            CodeSystem::RxNorm => "http://purl.bioontology.org/ontology/RXNORM/",
            CodeSystem::NdfRt => "http://purl.bioontology.org/ontology/NDFRT/",
            CodeSystem::Unii => "http://fda.gov/UNII/",
            CodeSystem::Snomed => "http://purl.bioontology.org/ontology/SNOMEDCT/",
            CodeSystem::Loinc => "http://purl.bioontology.org/ontology/LNC/",
        }
    }

    pub fn concept(&self, identifier: &str) -> Iri {
        Iri::new(format!("{}{identifier}", self.base()))
    }
}
