//! Ligation protocol (TaKaRa DNA Ligation Kit <Mighty Mix>).

use serde::Serialize;

use super::{rst_admonition, rst_section, rst_title, ProtocolReport};
use crate::calculations::ligation::required_weights;
use crate::errors::{require_positive, CalcResult};
use crate::settings::{LigationConditions, ProtocolSettings};
use crate::units::{BasePairs, Nanograms};

/// Vector and insert amounts plus incubation for one ligation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LigationPlan {
    pub vector_size: BasePairs,
    pub insert_size: BasePairs,
    pub vector_weight: Nanograms,
    pub insert_weight: Nanograms,
    pub conditions: LigationConditions,
}

impl LigationPlan {
    pub fn new(vector_size: BasePairs, insert_size: BasePairs, settings: &ProtocolSettings) -> CalcResult<Self> {
        require_positive("insert_bp", insert_size.0)?;
        let (vector_ng, insert_ng) = required_weights(vector_size.0, insert_size.0)?;
        Ok(LigationPlan {
            vector_size,
            insert_size,
            vector_weight: Nanograms(vector_ng),
            insert_weight: Nanograms(insert_ng),
            conditions: settings.ligation.clone(),
        })
    }
}

impl ProtocolReport for LigationPlan {
    fn to_rst(&self) -> String {
        let c = &self.conditions;
        let mut out = rst_title("Ligation Protocol");

        out.push_str(&rst_section("Information"));
        out.push_str(&format!(
            "Vector DNA size: {}\n\
             Insert DNA size: {}\n\
             Required Vector DNA weight: {}\n\
             Required Insert DNA weight: {}\n\n",
            self.vector_size, self.insert_size, self.vector_weight, self.insert_weight,
        ));

        out.push_str(&rst_section("Material"));
        out.push_str(&format!(
            "*   Purified, linearized Vector (in DW or EB): volume to {}\n\
             *   Purified, linearized Insert (in DW or EB): volume to {}\n\
             *   TAKARA DNA Ligation Kit <Mighty Mix>: same volume as the Vector and Insert mix\n\n",
            self.vector_weight, self.insert_weight,
        ));

        out.push_str(&rst_section("Procedure"));
        out.push_str(&format!(
            "1.  Cool down the PCR machine to {:.0} [celsius].\n\
             2.  Mix the purified DNAs in a 500 [ul] tube.\n\
             3.  Add Mighty Mix (usually the same volume as the DNA mix).\n\
             4.  Incubate {:.0} [min] at {:.0} [celsius] in the cooled PCR machine.\n\n",
            c.temperature_c, c.minutes, c.temperature_c,
        ));
        out.push_str(&rst_admonition(
            "NOTE",
            &format!(
                "In a hurry, incubate {:.0} [min] at {:.0} [celsius] instead.",
                c.quick_minutes, c.quick_temperature_c
            ),
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::protocols::{render, ReportFormat};

    fn plan() -> LigationPlan {
        LigationPlan::new(BasePairs(5400.0), BasePairs(540.0), &ProtocolSettings::default()).unwrap()
    }

    #[test]
    fn test_plan_weights() {
        let plan = plan();
        assert_eq!(plan.vector_weight, Nanograms(100.0));
        assert_eq!(plan.insert_weight, Nanograms(60.0));
    }

    #[test]
    fn test_invalid_vector_size() {
        assert!(LigationPlan::new(BasePairs(0.0), BasePairs(540.0), &ProtocolSettings::default()).is_err());
    }

    #[test]
    fn test_invalid_insert_size() {
        for insert in [-540.0, 0.0, f64::NAN] {
            let err = LigationPlan::new(BasePairs(5400.0), BasePairs(insert), &ProtocolSettings::default()).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "insert_bp"));
        }
    }

    #[test]
    fn test_rst_report() {
        let report = plan().to_rst();
        assert!(report.contains(" Ligation Protocol"));
        assert!(report.contains("Vector DNA size: 5400 [bp]"));
        assert!(report.contains("Required Vector DNA weight: 100.000 [ng]"));
        assert!(report.contains("Insert (in DW or EB): volume to 60.000 [ng]"));
        assert!(report.contains("Incubate 30 [min] at 16 [celsius]"));
        assert!(report.contains(".. NOTE::"));
    }

    #[test]
    fn test_custom_conditions_in_report() {
        let mut settings = ProtocolSettings::default();
        settings.ligation.minutes = 60.0;
        let plan = LigationPlan::new(BasePairs(3000.0), BasePairs(1000.0), &settings).unwrap();
        assert!(plan.to_rst().contains("Incubate 60 [min]"));
    }

    #[test]
    fn test_json_report() {
        let json = render(&plan(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["vector_weight"], 100.0);
        assert_eq!(value["insert_weight"], 60.0);
        assert_eq!(value["conditions"]["temperature_c"], 16.0);
    }
}
