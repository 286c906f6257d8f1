//! Clinical record graph assembly.
//!
//! [`assemble_patient`] turns one patient's flat records into a
//! [`GraphDocument`](chart_model::GraphDocument) rooted at an
//! `sp:MedicalRecord` node; [`serialize`] encodes it as RDF/XML, Turtle or
//! N-Triples.

pub mod assemble;
pub mod builders;
pub mod error;
pub mod mappers;
pub mod registrar;
pub mod serialize;
pub mod session;
pub mod terminology;
pub mod vital_types;

pub use assemble::{assemble_patient, assemble_with};
pub use builders::{add_if_present, coded_value, is_present, is_present_quantity, value_and_unit};
pub use error::{GraphError, Result};
pub use mappers::{
    AllergyCategory, ClinicalDomain, DomainMapper, FunctionMapper, MapperRegistry,
    allergy_category, default_registry,
};
pub use registrar::StatementRegistrar;
pub use serialize::{SerializationFormat, serialize};
pub use session::RecordSession;
pub use terminology::{Concept, Terminology};
pub use vital_types::{VITAL_TYPES, VitalType, vital_type};
