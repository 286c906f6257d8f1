//! Flat immunization rows.

use chart_model::{Immunization, ProductCode};
use serde::Deserialize;

/// One row of `immunizations.csv`.
///
/// Product and vaccine-group codes arrive as compound `system#identifier`
/// strings; up to two vaccine groups share the row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImmunizationRow {
    pub patient_id: String,
    pub date: String,
    pub administration_status: String,
    pub refusal_reason: String,
    pub cvx: String,
    pub cvx_title: String,
    pub vg: String,
    pub vg_title: String,
    pub vg2: String,
    pub vg2_title: String,
}

impl From<ImmunizationRow> for Immunization {
    fn from(row: ImmunizationRow) -> Self {
        let product_classes = [(row.vg, row.vg_title), (row.vg2, row.vg2_title)]
            .into_iter()
            .filter(|(code, _)| !code.is_empty())
            .map(|(code, title)| ProductCode::new(code, title))
            .collect();

        Immunization {
            patient_id: row.patient_id,
            date: row.date,
            administration_status: row.administration_status,
            refusal_reason: Some(row.refusal_reason).filter(|reason| !reason.is_empty()),
            product: ProductCode::new(row.cvx, row.cvx_title),
            product_classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_groups_and_reason_are_dropped() {
        let row = ImmunizationRow {
            patient_id: "99912345".to_string(),
            date: "2011-03-01".to_string(),
            administration_status: "http://smartplatforms.org/terms/codes/ImmunizationAdministrationStatus#doseGiven".to_string(),
            cvx: "http://www2a.cdc.gov/nip/IIS/IISStandards/vaccines.asp?rpt=cvx#33".to_string(),
            cvx_title: "pneumococcal polysaccharide vaccine".to_string(),
            vg: "http://www2a.cdc.gov/nip/IIS/IISStandards/vaccines.asp?rpt=vg#PneumoPPV".to_string(),
            vg_title: "Pneumococcal".to_string(),
            ..ImmunizationRow::default()
        };
        let immunization = Immunization::from(row);
        assert_eq!(immunization.refusal_reason, None);
        assert_eq!(immunization.product_classes.len(), 1);
        assert_eq!(immunization.product_classes[0].title, "Pneumococcal");
        assert_eq!(immunization.product.title, "pneumococcal polysaccharide vaccine");
    }

    #[test]
    fn second_group_is_kept() {
        let row = ImmunizationRow {
            patient_id: "1".to_string(),
            refusal_reason: "http://smartplatforms.org/terms/codes/ImmunizationRefusalReason#immune".to_string(),
            vg: "sys#A".to_string(),
            vg2: "sys#B".to_string(),
            ..ImmunizationRow::default()
        };
        let immunization = Immunization::from(row);
        assert!(immunization.refusal_reason.is_some());
        let codes: Vec<_> = immunization
            .product_classes
            .iter()
            .map(|class| class.code.as_str())
            .collect();
        assert_eq!(codes, vec!["sys#A", "sys#B"]);
    }
}
