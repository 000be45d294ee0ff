//! Single and double restriction digest protocols.
//!
//! Calculated units are multiplied by the configured excess factor (3x by
//! default), independently for each enzyme. A double digest runs under the
//! more stringent condition of the two enzymes: the higher reaction
//! temperature, the higher heat inactivation temperature and the longer
//! heat inactivation time.

use serde::Serialize;
use tracing::warn;

use super::{rst_admonition, rst_section, rst_subsection, rst_title, ProtocolReport};
use crate::calculations::digestion::units_required;
use crate::enzymes::{recommended_buffer, BufferRecommendation, Enzyme, HeatInactivation};
use crate::errors::{require_positive, CalcResult};
use crate::settings::ProtocolSettings;
use crate::units::{BasePairs, Micrograms, Nanograms};

/// Target DNA of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DigestTarget {
    pub size: BasePairs,
    pub sites: u32,
    pub weight: Nanograms,
}

impl DigestTarget {
    /// Size is checked by the unit calculator; the weight is checked here.
    fn new(size: BasePairs, sites: u32, weight: Nanograms) -> CalcResult<Self> {
        require_positive("weight_ng", weight.0)?;
        Ok(DigestTarget { size, sites, weight })
    }

    fn weight_ug(&self) -> Micrograms {
        self.weight.into()
    }
}

/// Amount of one enzyme to add.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnzymeDose {
    pub enzyme: &'static Enzyme,
    /// Units including the excess factor
    pub units: f64,
    /// Stock volume to pipette in µl
    pub volume_ul: f64,
}

impl EnzymeDose {
    fn new(target: &DigestTarget, enzyme: &'static Enzyme, settings: &ProtocolSettings) -> CalcResult<Self> {
        let units = units_required(target.sites, target.size.0, target.weight_ug().0, enzyme)? * settings.excess_factor;
        let concentration = require_positive("concentration_u_per_ul", enzyme.concentration_u_per_ul)?;
        Ok(EnzymeDose {
            enzyme,
            units,
            volume_ul: units / concentration,
        })
    }
}

/// Reaction temperature and heat inactivation for a digest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DigestConditions {
    pub temperature_c: f64,
    pub heat_inactivation: HeatInactivation,
}

impl DigestConditions {
    /// Conditions of a single enzyme
    pub fn of(enzyme: &Enzyme) -> Self {
        DigestConditions {
            temperature_c: enzyme.temperature_c,
            heat_inactivation: enzyme.heat_inactivation,
        }
    }

    /// Pairwise maximum of every field
    pub fn combine(&self, other: &DigestConditions) -> Self {
        DigestConditions {
            temperature_c: self.temperature_c.max(other.temperature_c),
            heat_inactivation: HeatInactivation {
                temperature_c: self
                    .heat_inactivation
                    .temperature_c
                    .max(other.heat_inactivation.temperature_c),
                minutes: self.heat_inactivation.minutes.max(other.heat_inactivation.minutes),
            },
        }
    }
}

/// Digest with one enzyme in its own buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleDigestPlan {
    pub target: DigestTarget,
    pub dose: EnzymeDose,
    pub buffer: &'static str,
    pub conditions: DigestConditions,
    pub buffer_volume_ul: f64,
    pub reaction_volume_ul: f64,
}

impl SingleDigestPlan {
    pub fn new(
        size: BasePairs,
        sites: u32,
        weight: Nanograms,
        enzyme: &'static Enzyme,
        settings: &ProtocolSettings,
    ) -> CalcResult<Self> {
        let target = DigestTarget::new(size, sites, weight)?;
        let dose = EnzymeDose::new(&target, enzyme, settings)?;
        Ok(SingleDigestPlan {
            target,
            dose,
            buffer: enzyme.buffer,
            conditions: DigestConditions::of(enzyme),
            buffer_volume_ul: settings.buffer_volume_ul,
            reaction_volume_ul: settings.reaction_volume_ul,
        })
    }
}

/// Digest with two enzymes in a shared buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoubleDigestPlan {
    pub target: DigestTarget,
    pub first: EnzymeDose,
    pub second: EnzymeDose,
    pub buffer: BufferRecommendation,
    pub conditions: DigestConditions,
    pub buffer_volume_ul: f64,
    pub reaction_volume_ul: f64,
}

impl DoubleDigestPlan {
    /// Build the plan.
    ///
    /// A pair that is supported but not recommended still yields a plan; its
    /// warning is available from [`DoubleDigestPlan::warning`] and is printed
    /// at the top of the rst report.
    pub fn new(
        size: BasePairs,
        sites: u32,
        weight: Nanograms,
        first: &'static Enzyme,
        second: &'static Enzyme,
        settings: &ProtocolSettings,
    ) -> CalcResult<Self> {
        let buffer = recommended_buffer(first.kind, second.kind)?;
        if let Some(warning) = buffer.warning {
            warn!(first = first.name, second = second.name, "{}", warning);
        }

        let target = DigestTarget::new(size, sites, weight)?;
        Ok(DoubleDigestPlan {
            target,
            first: EnzymeDose::new(&target, first, settings)?,
            second: EnzymeDose::new(&target, second, settings)?,
            buffer,
            conditions: DigestConditions::of(first).combine(&DigestConditions::of(second)),
            buffer_volume_ul: settings.buffer_volume_ul,
            reaction_volume_ul: settings.reaction_volume_ul,
        })
    }

    /// Warning for a non-recommended enzyme pair
    pub fn warning(&self) -> Option<&'static str> {
        if self.buffer.recommended {
            None
        } else {
            self.buffer.warning
        }
    }
}

fn rst_target(target: &DigestTarget) -> String {
    format!(
        "{}Size: {}\nWeight: {}\nSites: {} [sites]\n\n",
        rst_subsection("DNA"),
        target.size,
        target.weight,
        target.sites,
    )
}

fn rst_enzyme(heading: &str, enzyme: &Enzyme) -> String {
    format!(
        "{}Name: {}\n\
         Site: {}\n\
         Substrate name: {}\n\
         Substrate size: {} [bp]\n\
         Substrate sites: {} [sites]\n\
         Temperature: {:.0} [celsius]\n\
         Heat inactivate: {:.0} [celsius], {:.0} [min]\n\
         Concentration: {:.0} [U/ul]\n\
         Buffer: {}\n\n",
        rst_subsection(heading),
        enzyme.name,
        enzyme.site,
        enzyme.substrate.name,
        enzyme.substrate.size_bp,
        enzyme.substrate.sites,
        enzyme.temperature_c,
        enzyme.heat_inactivation.temperature_c,
        enzyme.heat_inactivation.minutes,
        enzyme.concentration_u_per_ul,
        enzyme.buffer,
    )
}

fn rst_dose(dose: &EnzymeDose) -> String {
    format!("-   TAKARA {}: {:.3} [ul]\n", dose.enzyme.name, dose.volume_ul)
}

fn rst_procedure(conditions: &DigestConditions) -> String {
    format!(
        "{}1.  Warm up the PCR machine to {:.0} [celsius].\n\
         2.  Mix the materials in a PCR tube.\n\
         3.  Incubate the reaction mixture at {:.0} [celsius] for at least 1 hour.\n\
         4.  Meanwhile heat a second PCR machine to {:.0} [celsius] for heat inactivation.\n\
         5.  After incubation, move the tube to the heated machine and incubate {:.0} [min].\n\n",
        rst_section("Procedure"),
        conditions.temperature_c,
        conditions.temperature_c,
        conditions.heat_inactivation.temperature_c,
        conditions.heat_inactivation.minutes,
    )
}

fn rst_fill(target: &DigestTarget, reaction_volume_ul: f64) -> String {
    format!(
        "-   DNA: volume to {}\n-   DW: volume to {:.0} [ul]\n\n",
        target.weight, reaction_volume_ul
    )
}

impl ProtocolReport for SingleDigestPlan {
    fn to_rst(&self) -> String {
        let mut out = rst_title("Single Restriction Digest Protocol");

        out.push_str(&rst_section("Information"));
        out.push_str(&format!("Unit required: {:.3} [units]\n\n", self.dose.units));
        out.push_str(&rst_target(&self.target));
        out.push_str(&rst_enzyme("Enzyme", self.dose.enzyme));

        out.push_str(&rst_section("Material"));
        out.push_str(&format!("-   10x {}: {:.0} [ul]\n", self.buffer, self.buffer_volume_ul));
        out.push_str(&rst_dose(&self.dose));
        out.push_str(&rst_fill(&self.target, self.reaction_volume_ul));

        out.push_str(&rst_procedure(&self.conditions));
        out
    }
}

impl ProtocolReport for DoubleDigestPlan {
    fn to_rst(&self) -> String {
        let mut out = String::new();
        if let Some(warning) = self.warning() {
            out.push_str(&rst_admonition("WARNING", warning));
        }
        out.push_str(&rst_title("Double Restriction Digest Protocol"));

        out.push_str(&rst_section("Information"));
        out.push_str(&format!(
            "Unit required ({}): {:.3} [units]\n\
             Unit required ({}): {:.3} [units]\n\
             Recommended buffer: {}\n\n",
            self.first.enzyme.name, self.first.units, self.second.enzyme.name, self.second.units, self.buffer.buffer,
        ));
        out.push_str(&rst_target(&self.target));
        out.push_str(&rst_enzyme("Enzyme", self.first.enzyme));
        out.push_str(&rst_enzyme("Enzyme2", self.second.enzyme));

        out.push_str(&rst_section("Material"));
        out.push_str(&format!("-   10x {}: {:.0} [ul]\n", self.buffer.buffer, self.buffer_volume_ul));
        out.push_str(&rst_dose(&self.first));
        out.push_str(&rst_dose(&self.second));
        out.push_str(&rst_fill(&self.target, self.reaction_volume_ul));

        out.push_str(&rst_procedure(&self.conditions));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enzymes::catalog;
    use crate::enzymes::EnzymeKind;
    use crate::errors::CalcError;
    use crate::protocols::{render, ReportFormat};

    fn single(enzyme: EnzymeKind) -> SingleDigestPlan {
        SingleDigestPlan::new(
            BasePairs(3000.0),
            2,
            Nanograms(1000.0),
            enzyme.enzyme(),
            &ProtocolSettings::default(),
        )
        .unwrap()
    }

    fn double(a: EnzymeKind, b: EnzymeKind) -> CalcResult<DoubleDigestPlan> {
        DoubleDigestPlan::new(
            BasePairs(3000.0),
            2,
            Nanograms(1000.0),
            a.enzyme(),
            b.enzyme(),
            &ProtocolSettings::default(),
        )
    }

    #[test]
    fn test_single_digest_applies_threefold_excess() {
        let plan = single(EnzymeKind::EcoRI);
        let base = units_required(2, 3000.0, 1.0, &catalog::ECORI).unwrap();
        assert!((plan.dose.units - 3.0 * base).abs() < 1e-9);
        assert!((plan.dose.volume_ul - plan.dose.units / 14.0).abs() < 1e-12);
        assert_eq!(plan.buffer, "TAKARA Universal Buffer H");
    }

    #[test]
    fn test_single_digest_converts_ng_to_ug() {
        // 1000 ng of 48502 bp DNA with 1 Xba I site: exactly 1 unit before excess
        let plan = SingleDigestPlan::new(
            BasePairs(48502.0),
            1,
            Nanograms(1000.0),
            EnzymeKind::XbaI.enzyme(),
            &ProtocolSettings::default(),
        )
        .unwrap();
        assert!((plan.dose.units - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_excess_factor() {
        let settings = ProtocolSettings {
            excess_factor: 5.0,
            ..ProtocolSettings::default()
        };
        let plan = SingleDigestPlan::new(BasePairs(48502.0), 1, Nanograms(1000.0), &catalog::XBAI, &settings).unwrap();
        assert!((plan.dose.units - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_digest_zero_size() {
        let result = SingleDigestPlan::new(
            BasePairs(0.0),
            1,
            Nanograms(1000.0),
            &catalog::ECORI,
            &ProtocolSettings::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_single_digest_rejects_bad_weight() {
        for weight in [-1000.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = SingleDigestPlan::new(
                BasePairs(3000.0),
                2,
                Nanograms(weight),
                &catalog::ECORI,
                &ProtocolSettings::default(),
            )
            .unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "weight_ng"));
        }
    }

    #[test]
    fn test_double_digest_rejects_negative_weight() {
        let result = DoubleDigestPlan::new(
            BasePairs(3000.0),
            2,
            Nanograms(-1000.0),
            &catalog::ECORI,
            &catalog::PSTI,
            &ProtocolSettings::default(),
        );
        assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_double_digest_doses_are_independent() {
        let plan = double(EnzymeKind::EcoRI, EnzymeKind::PstI).unwrap();
        assert_eq!(plan.first.units, single(EnzymeKind::EcoRI).dose.units);
        assert_eq!(plan.second.units, single(EnzymeKind::PstI).dose.units);
        assert_eq!(plan.buffer.buffer, "TAKARA Universal Buffer H");
        assert!(plan.warning().is_none());
    }

    #[test]
    fn test_double_digest_unknown_pair() {
        let err = double(EnzymeKind::SpeI, EnzymeKind::SpeI).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_conditions_take_pairwise_maximum() {
        let a = DigestConditions {
            temperature_c: 37.0,
            heat_inactivation: HeatInactivation {
                temperature_c: 80.0,
                minutes: 10.0,
            },
        };
        let b = DigestConditions {
            temperature_c: 50.0,
            heat_inactivation: HeatInactivation {
                temperature_c: 65.0,
                minutes: 20.0,
            },
        };
        let combined = a.combine(&b);
        assert_eq!(combined.temperature_c, 50.0);
        assert_eq!(combined.heat_inactivation.temperature_c, 80.0);
        assert_eq!(combined.heat_inactivation.minutes, 20.0);
        assert_eq!(b.combine(&a), combined);
    }

    #[test]
    fn test_single_rst_report() {
        let report = single(EnzymeKind::SpeI).to_rst();
        assert!(report.contains(" Single Restriction Digest Protocol"));
        assert!(report.contains("Name: Spe I"));
        assert!(report.contains("Substrate name: Adenovirus-2"));
        assert!(report.contains("-   10x TAKARA Universal Buffer M: 2 [ul]"));
        assert!(report.contains("-   DW: volume to 20 [ul]"));
        assert!(report.contains("Heat inactivate: 60 [celsius], 15 [min]"));
    }

    #[test]
    fn test_double_rst_report_surfaces_warning() {
        let plan = double(EnzymeKind::EcoRI, EnzymeKind::XbaI).unwrap();
        assert!(plan.warning().is_some());
        let report = plan.to_rst();
        assert!(report.starts_with(".. WARNING::"));
        assert!(report.contains("star activity"));
        assert!(report.contains("Recommended buffer: TAKARA Universal Buffer M"));
        assert!(report.contains("Enzyme2"));
    }

    #[test]
    fn test_double_rst_report_without_warning() {
        let report = double(EnzymeKind::SpeI, EnzymeKind::XbaI).unwrap().to_rst();
        assert!(!report.contains("WARNING"));
        assert!(report.contains("-   TAKARA Spe I:"));
        assert!(report.contains("-   TAKARA Xba I:"));
        assert!(report.contains("Size: 3000 [bp]"));
        assert!(report.contains("-   DNA: volume to 1000.000 [ng]"));
    }

    #[test]
    fn test_double_json_report() {
        let plan = double(EnzymeKind::PstI, EnzymeKind::XbaI).unwrap();
        let json = render(&plan, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["buffer"]["recommended"], false);
        assert_eq!(value["first"]["enzyme"]["kind"], "PstI");
        assert_eq!(value["conditions"]["temperature_c"], 37.0);
    }
}
