//! Per-domain mapping from fact records to graph shapes.
//!
//! Each mapper appends one domain's sub-graphs to the session document and
//! registers its top-level facts with the record root.
//!
//! | Domain | Top-level fact | Nested nodes |
//! |--------|----------------|--------------|
//! | demographics | `sp:Demographics` | name, address, phones, record number |
//! | medications | `sp:Medication`, `sp:Fulfillment` | drug name, quantity, frequency |
//! | problems | `sp:Problem` | problem name |
//! | procedures | `sp:Procedure` | procedure name |
//! | social_history | `sp:SocialHistory` | smoking status |
//! | family_history | `sp:FamilyHistory` | relative, problem, height |
//! | clinical_notes | `sp:ClinicalNote` | whatever the note carries |
//! | labs | `sp:LabResult` | result, range |
//! | allergies | `sp:Allergy`, `sp:AllergyExclusion` | category, allergen, reaction |
//! | vitals | `sp:VitalSignSet` | encounter, vitals, blood pressure |
//! | immunizations | `sp:Immunization` | status, refusal reason, product |

mod allergies;
mod clinical_notes;
mod demographics;
mod family_history;
mod immunizations;
mod labs;
mod mapper_trait;
mod medications;
mod problems;
mod procedures;
mod social_history;
mod vitals;

pub use allergies::{AllergyCategory, allergy_category};
pub use mapper_trait::{
    ClinicalDomain, DomainMapper, FunctionMapper, MapperRegistry, default_registry,
};
