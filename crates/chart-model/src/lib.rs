pub mod error;
pub mod facts;
pub mod graph;
pub mod namespace;
pub mod records;

pub use error::{ModelError, Result};
pub use facts::{
    Allergy, AllergyType, ClinicalNote, FamilyHistory, Immunization, Lab, Medication, Patient,
    PatientRecord, Problem, Procedure, ProductCode, Refill, SocialHistory, StatementPolarity,
    VitalKind, VitalSet,
};
pub use graph::{BlankNode, GraphDocument, Iri, Literal, Node, Triple};
pub use namespace::{
    CodeSystem, DC, DCTERMS, FOAF, NAMESPACE_BINDINGS, Namespace, RDF, RDFS, SP, SPCODE, VCARD,
    rdf_type,
};
pub use records::{ClinicalRecords, group_by_patient};
