use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown allergy type: {0}")]
    InvalidAllergyType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
