use chart_model::{
    Allergy, AllergyType, ClinicalRecords, CodeSystem, DCTERMS, SP, SPCODE, StatementPolarity,
};
use tracing::warn;

use crate::error::Result;
use crate::session::RecordSession;

/// Fixed category code and allergen edge for one allergy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllergyCategory {
    /// SNOMED CT category concept.
    pub snomed: &'static str,
    pub title: &'static str,
    /// Local name of the `sp` edge to the allergen.
    pub allergen_edge: &'static str,
    /// Local name of the `spcode` class of the allergen code.
    pub allergen_class: &'static str,
    pub allergen_system: CodeSystem,
}

pub fn allergy_category(allergy_type: AllergyType) -> AllergyCategory {
    match allergy_type {
        AllergyType::DrugClass => AllergyCategory {
            snomed: "416098002",
            title: "drug allergy",
            allergen_edge: "drugClassAllergen",
            allergen_class: "NDFRT",
            allergen_system: CodeSystem::NdfRt,
        },
        AllergyType::Drug => AllergyCategory {
            snomed: "416098002",
            title: "drug allergy",
            allergen_edge: "drugAllergen",
            allergen_class: "RxNorm_Ingredient",
            allergen_system: CodeSystem::RxNorm,
        },
        AllergyType::Food => AllergyCategory {
            snomed: "414285001",
            title: "food allergy",
            allergen_edge: "otherAllergen",
            allergen_class: "UNII",
            allergen_system: CodeSystem::Unii,
        },
        AllergyType::Environmental => AllergyCategory {
            snomed: "426232007",
            title: "environmental allergy",
            allergen_edge: "otherAllergen",
            allergen_class: "UNII",
            allergen_system: CodeSystem::Unii,
        },
    }
}

pub(super) fn map_allergies(
    session: &mut RecordSession<'_>,
    records: &ClinicalRecords,
) -> Result<()> {
    for allergy in records.allergies_for(session.patient_id()) {
        match allergy.statement {
            StatementPolarity::Negative => map_exclusion(session, allergy),
            StatementPolarity::Positive => map_allergy(session, allergy),
        }
    }
    Ok(())
}

fn map_exclusion(session: &mut RecordSession<'_>, allergy: &Allergy) {
    let node = session.blank();
    session.add_type(node, SP.iri("AllergyExclusion"));
    let name = session.coded_in(
        SPCODE.iri("AllergyExclusion"),
        CodeSystem::Snomed,
        &allergy.code,
        &allergy.allergen,
    );
    session.add(node, SP.iri("allergyExclusionName"), name);
    session.add_literal(node, DCTERMS.iri("date"), &allergy.start_date);
    session.register(node);
}

fn map_allergy(session: &mut RecordSession<'_>, allergy: &Allergy) {
    let node = session.blank();
    session.add_type(node, SP.iri("Allergy"));
    let severity = session.coded_in(
        SPCODE.iri("AllergySeverity"),
        CodeSystem::Snomed,
        &allergy.severity_snomed,
        &allergy.severity,
    );
    session.add(node, SP.iri("severity"), severity);
    let reaction = session.coded_in(
        SPCODE.iri("SNOMED"),
        CodeSystem::Snomed,
        &allergy.reaction_snomed,
        &allergy.reaction,
    );
    session.add(node, SP.iri("allergicReaction"), reaction);
    session.add_literal(node, SP.iri("startDate"), &allergy.start_date);
    session.add_if_present(node, SP.iri("endDate"), &allergy.end_date);

    match allergy.allergy_type {
        Some(allergy_type) => {
            let category = allergy_category(allergy_type);
            let coded = session.coded_in(
                SPCODE.iri("AllergyCategory"),
                CodeSystem::Snomed,
                category.snomed,
                category.title,
            );
            session.add(node, SP.iri("category"), coded);
            let allergen = session.coded_in(
                SPCODE.iri(category.allergen_class),
                category.allergen_system,
                &allergy.code,
                &allergy.allergen,
            );
            session.add(node, SP.iri(category.allergen_edge), allergen);
        }
        None => warn!(
            patient_id = session.patient_id(),
            allergen = %allergy.allergen,
            "allergy has no type; category and allergen omitted"
        ),
    }

    session.register(node);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drug_types_share_the_drug_allergy_code() {
        let drug = allergy_category(AllergyType::Drug);
        let class = allergy_category(AllergyType::DrugClass);
        assert_eq!(drug.snomed, class.snomed);
        assert_ne!(drug.allergen_edge, class.allergen_edge);
    }

    #[test]
    fn non_drug_types_use_other_allergen() {
        for allergy_type in [AllergyType::Food, AllergyType::Environmental] {
            let category = allergy_category(allergy_type);
            assert_eq!(category.allergen_edge, "otherAllergen");
            assert_eq!(category.allergen_system, CodeSystem::Unii);
        }
        assert_eq!(allergy_category(AllergyType::Food).snomed, "414285001");
    }
}
