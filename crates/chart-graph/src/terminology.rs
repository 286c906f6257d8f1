//! Built-in registry of concepts referenced by URI alone.

use std::collections::HashMap;
use std::sync::OnceLock;

use chart_model::{BlankNode, CodeSystem, GraphDocument, Iri, SPCODE};

use crate::builders;
use crate::error::{GraphError, Result};
use crate::vital_types::VITAL_TYPES;

const ENCOUNTER_TYPE: &str = "http://smartplatforms.org/terms/codes/EncounterType#";
const ADMINISTRATION_STATUS: &str =
    "http://smartplatforms.org/terms/codes/ImmunizationAdministrationStatus#";
const REFUSAL_REASON: &str = "http://smartplatforms.org/terms/codes/ImmunizationRefusalReason#";

/// One ontology entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub code_class: Iri,
    pub title: String,
    pub system: String,
    pub identifier: String,
}

impl Concept {
    fn new(code_class: &str, title: &str, system: &str, identifier: &str) -> Self {
        Self {
            code_class: SPCODE.iri(code_class),
            title: title.to_string(),
            system: system.to_string(),
            identifier: identifier.to_string(),
        }
    }

    pub fn uri(&self) -> String {
        format!("{}{}", self.system, self.identifier)
    }
}

/// Concepts keyed by their full URI.
#[derive(Debug, Clone, Default)]
pub struct Terminology {
    concepts: HashMap<String, Concept>,
}

impl Terminology {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry every assembly uses.
    pub fn standard() -> &'static Terminology {
        static STANDARD: OnceLock<Terminology> = OnceLock::new();
        STANDARD.get_or_init(build_standard)
    }

    pub fn insert(&mut self, concept: Concept) {
        self.concepts.insert(concept.uri(), concept);
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn resolve(&self, uri: &str) -> Result<&Concept> {
        self.concepts
            .get(uri)
            .ok_or_else(|| GraphError::UnknownConcept {
                uri: uri.to_string(),
            })
    }

    /// Emits the coded value for `uri` into `doc`.
    pub fn coded_value(&self, doc: &mut GraphDocument, uri: &str) -> Result<BlankNode> {
        let concept = self.resolve(uri)?;
        Ok(builders::coded_value(
            doc,
            concept.code_class.clone(),
            Iri::new(uri),
            &concept.title,
            &concept.system,
            &concept.identifier,
        ))
    }
}

fn build_standard() -> Terminology {
    let mut terminology = Terminology::new();

    terminology.insert(Concept::new(
        "EncounterType",
        "Ambulatory encounter",
        ENCOUNTER_TYPE,
        "ambulatory",
    ));

    for (identifier, title) in [
        ("doseGiven", "Dose given"),
        ("notAdministered", "Not administered"),
        ("partialDose", "Partial dose"),
    ] {
        terminology.insert(Concept::new(
            "ImmunizationAdministrationStatus",
            title,
            ADMINISTRATION_STATUS,
            identifier,
        ));
    }

    for (identifier, title) in [
        ("allergy", "Allergy"),
        ("immune", "Immune"),
        ("medicalPrecaution", "Medical precaution"),
        ("outOfStock", "Out of stock"),
        ("patientObjection", "Patient objection"),
    ] {
        terminology.insert(Concept::new(
            "ImmunizationRefusalReason",
            title,
            REFUSAL_REASON,
            identifier,
        ));
    }

    let snomed = CodeSystem::Snomed.base();
    for (identifier, title) in [
        ("449868002", "Current every day smoker"),
        ("428041000124106", "Current some day smoker"),
        ("8517006", "Former smoker"),
        ("266919005", "Never smoker"),
        ("77176002", "Smoker, current status unknown"),
        ("266927001", "Unknown if ever smoked"),
    ] {
        terminology.insert(Concept::new("SmokingStatus", title, snomed, identifier));
    }

    let loinc = CodeSystem::Loinc.base();
    for vital in &VITAL_TYPES {
        terminology.insert(Concept::new("VitalSign", vital.title, loinc, vital.loinc));
    }

    terminology
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::{DCTERMS, Node, SP};

    #[test]
    fn standard_registry_resolves_known_uris() {
        let terminology = Terminology::standard();
        let concept = terminology
            .resolve("http://smartplatforms.org/terms/codes/EncounterType#ambulatory")
            .unwrap();
        assert_eq!(concept.identifier, "ambulatory");
        assert_eq!(concept.system, ENCOUNTER_TYPE);

        let smoker = terminology
            .resolve("http://purl.bioontology.org/ontology/SNOMEDCT/8517006")
            .unwrap();
        assert_eq!(smoker.title, "Former smoker");
        assert_eq!(smoker.code_class, SPCODE.iri("SmokingStatus"));
    }

    #[test]
    fn unknown_uri_is_an_error() {
        let mut doc = GraphDocument::new();
        let err = Terminology::standard()
            .coded_value(&mut doc, "http://example.org/codes#nothing")
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownConcept { .. }));
        assert!(doc.is_empty());
    }

    #[test]
    fn coded_value_uses_registered_title() {
        let mut doc = GraphDocument::new();
        let uri = format!("{ADMINISTRATION_STATUS}doseGiven");
        let wrapper = Terminology::standard()
            .coded_value(&mut doc, &uri)
            .unwrap();
        let titles: Vec<_> = doc
            .objects(&Node::Blank(wrapper), &DCTERMS.iri("title"))
            .collect();
        assert_eq!(titles, vec![&Node::literal("Dose given")]);
        assert!(doc.contains(
            &Node::iri(uri.as_str()),
            &SP.iri("system"),
            &Node::literal(ADMINISTRATION_STATUS)
        ));
    }
}
