//! Error types for graph assembly and serialization.

use thiserror::Error;

/// Errors that abort a patient's assembly or serialization.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A `system#identifier` code without its `#` separator.
    #[error("malformed compound code in {field}: '{value}' has no '#' separator")]
    MalformedCompoundCode { field: &'static str, value: String },

    /// A concept URI the terminology registry does not know.
    #[error("unknown concept: {uri}")]
    UnknownConcept { uri: String },

    /// A clinical note fragment without an `sp:ClinicalNote` node.
    #[error("clinical note for patient {patient_id} has no sp:ClinicalNote root")]
    MissingNoteRoot { patient_id: String },

    #[error("unsupported serialization format: {0}")]
    UnsupportedFormat(String),

    /// Predicate that cannot be written as an XML qualified name.
    #[error("predicate cannot be serialized as RDF/XML: {0}")]
    UnserializablePredicate(String),

    /// A value holding a character XML 1.0 cannot represent.
    #[error("value cannot be written as XML: {0:?}")]
    NonXmlCharacter(String),

    #[error("literal used as subject: {0}")]
    LiteralSubject(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("serialized output is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
