//! Per-domain fact records as handed over by the loaders.
//!
//! Text fields follow the fixture convention: an empty string means the
//! value was not recorded. `Option` is used where a whole column may be
//! missing from a source.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::ModelError;
use crate::graph::GraphDocument;

/// Anything keyed by a patient identifier.
pub trait PatientRecord {
    fn patient_id(&self) -> &str;
}

macro_rules! patient_record {
    ($($ty:ty),* $(,)?) => {
        $(impl PatientRecord for $ty {
            fn patient_id(&self) -> &str {
                &self.patient_id
            }
        })*
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Patient {
    pub patient_id: String,
    pub given_name: String,
    pub family_name: String,
    pub initial: String,
    pub street: String,
    pub apartment: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub home_phone: String,
    pub cell_phone: String,
    pub email: String,
    pub gender: String,
    pub birth_date: String,
    /// Gestational age at birth, in weeks.
    pub gestational_age: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Medication {
    pub patient_id: String,
    pub rxnorm: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub instructions: String,
    pub quantity: String,
    pub quantity_unit: String,
    pub frequency: String,
    pub frequency_unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Refill {
    pub patient_id: String,
    pub rxnorm: String,
    pub date: String,
    pub days_supply: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Problem {
    pub patient_id: String,
    pub snomed: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Procedure {
    pub patient_id: String,
    pub snomed: String,
    pub name: String,
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Lab {
    pub patient_id: String,
    pub loinc: String,
    pub name: String,
    pub date: String,
    /// LOINC scale; `Qn` marks a quantitative result.
    pub scale: String,
    pub value: String,
    pub units: String,
    pub low: String,
    pub high: String,
    pub accession_number: String,
}

impl Lab {
    pub fn is_quantitative(&self) -> bool {
        self.scale.trim() == "Qn"
    }
}

/// Whether an allergy row asserts an allergy or rules one out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatementPolarity {
    #[default]
    Positive,
    Negative,
}

impl FromStr for StatementPolarity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("negative") {
            Ok(StatementPolarity::Negative)
        } else {
            Ok(StatementPolarity::Positive)
        }
    }
}

impl<'de> Deserialize<'de> for StatementPolarity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(polarity) = raw.parse::<StatementPolarity>();
        Ok(polarity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllergyType {
    DrugClass,
    Drug,
    Food,
    Environmental,
}

impl AllergyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllergyType::DrugClass => "drugClass",
            AllergyType::Drug => "drug",
            AllergyType::Food => "food",
            AllergyType::Environmental => "environmental",
        }
    }
}

impl fmt::Display for AllergyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllergyType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "drugClass" => Ok(AllergyType::DrugClass),
            "drug" => Ok(AllergyType::Drug),
            "food" => Ok(AllergyType::Food),
            "environmental" => Ok(AllergyType::Environmental),
            other => Err(ModelError::InvalidAllergyType(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AllergyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Allergy {
    pub patient_id: String,
    pub statement: StatementPolarity,
    pub allergy_type: Option<AllergyType>,
    pub allergen: String,
    /// Allergen code in the system implied by `allergy_type`.
    pub code: String,
    pub start_date: String,
    pub end_date: String,
    pub reaction: String,
    pub reaction_snomed: String,
    pub severity: String,
    pub severity_snomed: String,
}

/// A compound `system#identifier` code with its display title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCode {
    pub code: String,
    pub title: String,
}

impl ProductCode {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Immunization {
    pub patient_id: String,
    pub date: String,
    /// Concept URI of the administration status.
    pub administration_status: String,
    pub refusal_reason: Option<String>,
    pub product: ProductCode,
    /// Vaccine groups; at most two per administration.
    pub product_classes: Vec<ProductCode>,
}

/// Vital-sign measurements a [`VitalSet`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VitalKind {
    Height,
    Weight,
    BodyMassIndex,
    RespiratoryRate,
    HeartRate,
    OxygenSaturation,
    Temperature,
    HeadCircumference,
    Systolic,
    Diastolic,
}

impl VitalKind {
    /// Kinds attached directly to a vital-sign set; blood pressure is nested.
    pub const SET_MEMBERS: [VitalKind; 8] = [
        VitalKind::Height,
        VitalKind::Weight,
        VitalKind::BodyMassIndex,
        VitalKind::RespiratoryRate,
        VitalKind::HeartRate,
        VitalKind::OxygenSaturation,
        VitalKind::Temperature,
        VitalKind::HeadCircumference,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VitalSet {
    pub patient_id: String,
    pub timestamp: String,
    pub start_date: String,
    pub end_date: String,
    pub encounter_type: String,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub bmi: Option<String>,
    pub respiratory_rate: Option<String>,
    pub heart_rate: Option<String>,
    pub oxygen_saturation: Option<String>,
    pub temperature: Option<String>,
    pub head_circumference: Option<String>,
    pub systolic: Option<String>,
    pub diastolic: Option<String>,
}

impl VitalSet {
    /// The recorded value for `kind`, if present and non-empty.
    pub fn reading(&self, kind: VitalKind) -> Option<&str> {
        let value = match kind {
            VitalKind::Height => &self.height,
            VitalKind::Weight => &self.weight,
            VitalKind::BodyMassIndex => &self.bmi,
            VitalKind::RespiratoryRate => &self.respiratory_rate,
            VitalKind::HeartRate => &self.heart_rate,
            VitalKind::OxygenSaturation => &self.oxygen_saturation,
            VitalKind::Temperature => &self.temperature,
            VitalKind::HeadCircumference => &self.head_circumference,
            VitalKind::Systolic => &self.systolic,
            VitalKind::Diastolic => &self.diastolic,
        };
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn is_ambulatory(&self) -> bool {
        self.encounter_type.trim() == "ambulatory"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialHistory {
    pub patient_id: String,
    pub smoking_status_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FamilyHistory {
    pub patient_id: String,
    pub relative_code: String,
    pub relative_title: String,
    pub date_of_birth: String,
    pub date_of_death: String,
    pub problem_code: String,
    pub problem_title: String,
    pub height_cm: String,
}

/// A note delivered as a finished sub-graph with one `sp:ClinicalNote` root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicalNote {
    pub patient_id: String,
    pub graph: GraphDocument,
}

patient_record!(
    Patient,
    Medication,
    Refill,
    Problem,
    Procedure,
    Lab,
    Allergy,
    Immunization,
    VitalSet,
    SocialHistory,
    FamilyHistory,
    ClinicalNote,
);
