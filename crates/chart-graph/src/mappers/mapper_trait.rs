//! Domain mapper trait and registry.
//!
//! Every clinical domain implements [`DomainMapper`]. The [`MapperRegistry`]
//! keeps mappers in run order; [`default_registry`] is the fixed order used
//! by assembly.
//!
//! # Example
//!
//! ```ignore
//! use chart_graph::mappers::default_registry;
//!
//! for mapper in default_registry().iter() {
//!     mapper.map(&mut session, &records)?;
//! }
//! ```

use std::fmt;
use std::sync::OnceLock;

use chart_model::ClinicalRecords;

use crate::error::Result;
use crate::session::RecordSession;

/// Clinical domains with a sub-graph shape of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClinicalDomain {
    Demographics,
    Medications,
    Problems,
    Procedures,
    SocialHistory,
    FamilyHistory,
    ClinicalNotes,
    Labs,
    Allergies,
    Vitals,
    Immunizations,
}

impl ClinicalDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicalDomain::Demographics => "demographics",
            ClinicalDomain::Medications => "medications",
            ClinicalDomain::Problems => "problems",
            ClinicalDomain::Procedures => "procedures",
            ClinicalDomain::SocialHistory => "social_history",
            ClinicalDomain::FamilyHistory => "family_history",
            ClinicalDomain::ClinicalNotes => "clinical_notes",
            ClinicalDomain::Labs => "labs",
            ClinicalDomain::Allergies => "allergies",
            ClinicalDomain::Vitals => "vitals",
            ClinicalDomain::Immunizations => "immunizations",
        }
    }
}

impl fmt::Display for ClinicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps one domain's records for the session's patient into the graph.
///
/// A mapper emits nothing when the patient has no records in its domain.
/// Every top-level fact node it creates must pass through
/// [`RecordSession::register`].
pub trait DomainMapper: Send + Sync {
    fn domain(&self) -> ClinicalDomain;

    fn description(&self) -> &'static str {
        "Domain mapper"
    }

    /// # Errors
    ///
    /// Returns an error on malformed input that cannot be mapped faithfully,
    /// e.g. a compound code without its separator.
    fn map(&self, session: &mut RecordSession<'_>, records: &ClinicalRecords) -> Result<()>;
}

type MapFn = fn(&mut RecordSession<'_>, &ClinicalRecords) -> Result<()>;

/// Adapts a mapping function to [`DomainMapper`].
pub struct FunctionMapper {
    domain: ClinicalDomain,
    description: &'static str,
    map_fn: MapFn,
}

impl FunctionMapper {
    pub fn new(domain: ClinicalDomain, description: &'static str, map_fn: MapFn) -> Self {
        Self {
            domain,
            description,
            map_fn,
        }
    }
}

impl DomainMapper for FunctionMapper {
    fn domain(&self) -> ClinicalDomain {
        self.domain
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn map(&self, session: &mut RecordSession<'_>, records: &ClinicalRecords) -> Result<()> {
        (self.map_fn)(session, records)
    }
}

/// Mappers in the order they run.
#[derive(Default)]
pub struct MapperRegistry {
    mappers: Vec<Box<dyn DomainMapper>>,
}

impl MapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mapper, replacing any earlier mapper for the same domain in place.
    pub fn register(&mut self, mapper: Box<dyn DomainMapper>) {
        match self
            .mappers
            .iter()
            .position(|existing| existing.domain() == mapper.domain())
        {
            Some(index) => self.mappers[index] = mapper,
            None => self.mappers.push(mapper),
        }
    }

    pub fn get(&self, domain: ClinicalDomain) -> Option<&dyn DomainMapper> {
        self.mappers
            .iter()
            .find(|mapper| mapper.domain() == domain)
            .map(|mapper| mapper.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DomainMapper> + '_ {
        self.mappers.iter().map(|mapper| mapper.as_ref())
    }

    pub fn domains(&self) -> impl Iterator<Item = ClinicalDomain> + '_ {
        self.mappers.iter().map(|mapper| mapper.domain())
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

static DEFAULT_REGISTRY: OnceLock<MapperRegistry> = OnceLock::new();

/// The registry used by [`crate::assemble_patient`].
pub fn default_registry() -> &'static MapperRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> MapperRegistry {
    use super::{
        allergies, clinical_notes, demographics, family_history, immunizations, labs, medications,
        problems, procedures, social_history, vitals,
    };

    let mut registry = MapperRegistry::new();
    for mapper in [
        FunctionMapper::new(
            ClinicalDomain::Demographics,
            "Name, address, phones and record number",
            demographics::map_demographics,
        ),
        FunctionMapper::new(
            ClinicalDomain::Medications,
            "Medications with their fulfillments",
            medications::map_medications,
        ),
        FunctionMapper::new(
            ClinicalDomain::Problems,
            "Problem list",
            problems::map_problems,
        ),
        FunctionMapper::new(
            ClinicalDomain::Procedures,
            "Procedures",
            procedures::map_procedures,
        ),
        FunctionMapper::new(
            ClinicalDomain::SocialHistory,
            "Smoking status",
            social_history::map_social_history,
        ),
        FunctionMapper::new(
            ClinicalDomain::FamilyHistory,
            "Relatives with their problems",
            family_history::map_family_history,
        ),
        FunctionMapper::new(
            ClinicalDomain::ClinicalNotes,
            "Pre-built note sub-graphs",
            clinical_notes::map_clinical_notes,
        ),
        FunctionMapper::new(
            ClinicalDomain::Labs,
            "Quantitative and narrative lab results",
            labs::map_labs,
        ),
        FunctionMapper::new(
            ClinicalDomain::Allergies,
            "Allergies and allergy exclusions",
            allergies::map_allergies,
        ),
        FunctionMapper::new(
            ClinicalDomain::Vitals,
            "Vital-sign sets with encounters",
            vitals::map_vitals,
        ),
        FunctionMapper::new(
            ClinicalDomain::Immunizations,
            "Immunizations with product codes",
            immunizations::map_immunizations,
        ),
    ] {
        registry.register(Box::new(mapper));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_runs_in_fixed_order() {
        let domains: Vec<_> = default_registry().domains().collect();
        assert_eq!(
            domains,
            vec![
                ClinicalDomain::Demographics,
                ClinicalDomain::Medications,
                ClinicalDomain::Problems,
                ClinicalDomain::Procedures,
                ClinicalDomain::SocialHistory,
                ClinicalDomain::FamilyHistory,
                ClinicalDomain::ClinicalNotes,
                ClinicalDomain::Labs,
                ClinicalDomain::Allergies,
                ClinicalDomain::Vitals,
                ClinicalDomain::Immunizations,
            ]
        );
    }

    #[test]
    fn register_replaces_in_place() {
        fn noop(_: &mut RecordSession<'_>, _: &ClinicalRecords) -> Result<()> {
            Ok(())
        }
        let mut registry = MapperRegistry::new();
        registry.register(Box::new(FunctionMapper::new(
            ClinicalDomain::Labs,
            "first",
            noop,
        )));
        registry.register(Box::new(FunctionMapper::new(
            ClinicalDomain::Vitals,
            "second",
            noop,
        )));
        registry.register(Box::new(FunctionMapper::new(
            ClinicalDomain::Labs,
            "replacement",
            noop,
        )));
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(ClinicalDomain::Labs).map(|m| m.description()),
            Some("replacement")
        );
        assert_eq!(registry.domains().next(), Some(ClinicalDomain::Labs));
    }
}
