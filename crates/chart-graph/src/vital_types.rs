//! Vital-sign lookup table.

use chart_model::{BlankNode, CodeSystem, Iri, Node, SP, VitalKind};

use crate::error::Result;
use crate::session::RecordSession;

/// Predicate, unit and LOINC concept for one kind of vital sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalType {
    pub kind: VitalKind,
    /// Local name in the `sp` namespace linking the owner to the vital node.
    pub predicate: &'static str,
    /// UCUM unit.
    pub unit: &'static str,
    pub loinc: &'static str,
    pub title: &'static str,
}

impl VitalType {
    pub fn predicate_iri(&self) -> Iri {
        SP.iri(self.predicate)
    }

    pub fn concept_uri(&self) -> Iri {
        CodeSystem::Loinc.concept(self.loinc)
    }
}

pub const VITAL_TYPES: [VitalType; 10] = [
    VitalType {
        kind: VitalKind::Height,
        predicate: "height",
        unit: "cm",
        loinc: "8302-2",
        title: "Body height",
    },
    VitalType {
        kind: VitalKind::Weight,
        predicate: "weight",
        unit: "kg",
        loinc: "3141-9",
        title: "Body weight Measured",
    },
    VitalType {
        kind: VitalKind::BodyMassIndex,
        predicate: "bodyMassIndex",
        unit: "kg/m2",
        loinc: "39156-5",
        title: "Body mass index",
    },
    VitalType {
        kind: VitalKind::RespiratoryRate,
        predicate: "respiratoryRate",
        unit: "{breaths}/min",
        loinc: "9279-1",
        title: "Respiration rate",
    },
    VitalType {
        kind: VitalKind::HeartRate,
        predicate: "heartRate",
        unit: "{beats}/min",
        loinc: "8867-4",
        title: "Heart rate",
    },
    VitalType {
        kind: VitalKind::OxygenSaturation,
        predicate: "oxygenSaturation",
        unit: "%{HemoglobinSaturation}",
        loinc: "2710-2",
        title: "Oxygen saturation",
    },
    VitalType {
        kind: VitalKind::Temperature,
        predicate: "temperature",
        unit: "Cel",
        loinc: "8310-5",
        title: "Body temperature",
    },
    VitalType {
        kind: VitalKind::HeadCircumference,
        predicate: "headCircumference",
        unit: "cm",
        loinc: "8287-5",
        title: "Head Circumference",
    },
    VitalType {
        kind: VitalKind::Systolic,
        predicate: "systolic",
        unit: "mm[Hg]",
        loinc: "8480-6",
        title: "Intravascular systolic",
    },
    VitalType {
        kind: VitalKind::Diastolic,
        predicate: "diastolic",
        unit: "mm[Hg]",
        loinc: "8462-4",
        title: "Intravascular diastolic",
    },
];

pub fn vital_type(kind: VitalKind) -> &'static VitalType {
    match kind {
        VitalKind::Height => &VITAL_TYPES[0],
        VitalKind::Weight => &VITAL_TYPES[1],
        VitalKind::BodyMassIndex => &VITAL_TYPES[2],
        VitalKind::RespiratoryRate => &VITAL_TYPES[3],
        VitalKind::HeartRate => &VITAL_TYPES[4],
        VitalKind::OxygenSaturation => &VITAL_TYPES[5],
        VitalKind::Temperature => &VITAL_TYPES[6],
        VitalKind::HeadCircumference => &VITAL_TYPES[7],
        VitalKind::Systolic => &VITAL_TYPES[8],
        VitalKind::Diastolic => &VITAL_TYPES[9],
    }
}

/// Attaches one `sp:VitalSign` node under `parent`.
///
/// ```text
/// parent sp:<predicate> _:v .
/// _:v a sp:VitalSign ; sp:value "value" ; sp:unit "unit" ; sp:vitalName _:coded .
/// ```
pub(crate) fn attach_vital(
    session: &mut RecordSession<'_>,
    parent: impl Into<Node>,
    kind: VitalKind,
    value: &str,
) -> Result<BlankNode> {
    let vital = vital_type(kind);
    let node = session.blank();
    session.add_type(node, SP.iri("VitalSign"));
    session.add_literal(node, SP.iri("value"), value);
    session.add_literal(node, SP.iri("unit"), vital.unit);
    let name = session.concept(vital.concept_uri().as_str())?;
    session.add(node, SP.iri("vitalName"), name);
    session.add(parent, vital.predicate_iri(), node);
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_kind() {
        for kind in VitalKind::SET_MEMBERS
            .into_iter()
            .chain([VitalKind::Systolic, VitalKind::Diastolic])
        {
            assert_eq!(vital_type(kind).kind, kind);
        }
    }

    #[test]
    fn blood_pressure_uses_mercury_column() {
        assert_eq!(vital_type(VitalKind::Systolic).unit, "mm[Hg]");
        assert_eq!(vital_type(VitalKind::Diastolic).unit, "mm[Hg]");
        assert_eq!(
            vital_type(VitalKind::Height).concept_uri().as_str(),
            "http://purl.bioontology.org/ontology/LNC/8302-2"
        );
    }
}
