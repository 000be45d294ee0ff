//! Gel extraction planning (Promega Wizard SV Gel and PCR Clean-Up System).

use serde::Serialize;

use super::{rst_section, rst_title, ProtocolReport};
use crate::calibration::{recovery_on_size, recovery_on_volume};
use crate::calculations::gel_extraction::{final_weight, prep_weight};
use crate::errors::{require_positive, CalcResult};
use crate::units::{BasePairs, Nanograms};

/// How much DNA to load so that a desired mass survives extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GelPrepPlan {
    pub size: BasePairs,
    pub desired_weight: Nanograms,
    pub size_recovery: f64,
    pub prep_weight: Nanograms,
}

impl GelPrepPlan {
    pub fn new(desired_weight: Nanograms, size: BasePairs) -> CalcResult<Self> {
        require_positive("weight_ng", desired_weight.0)?;
        require_positive("size_bp", size.0)?;
        Ok(GelPrepPlan {
            size,
            desired_weight,
            size_recovery: recovery_on_size(size.0),
            prep_weight: Nanograms(prep_weight(desired_weight.0, size.0)?),
        })
    }
}

/// Expected DNA mass after extracting a known load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GelRecoveryPlan {
    pub size: BasePairs,
    pub volume: f64,
    pub start_weight: Nanograms,
    pub size_recovery: f64,
    pub volume_recovery: f64,
    pub final_weight: Nanograms,
}

impl GelRecoveryPlan {
    pub fn new(start_weight: Nanograms, size: BasePairs, volume: f64) -> CalcResult<Self> {
        require_positive("weight_ng", start_weight.0)?;
        require_positive("size_bp", size.0)?;
        require_positive("volume", volume)?;
        Ok(GelRecoveryPlan {
            size,
            volume,
            start_weight,
            size_recovery: recovery_on_size(size.0),
            volume_recovery: recovery_on_volume(volume),
            final_weight: Nanograms(final_weight(start_weight.0, size.0, volume)),
        })
    }
}

impl ProtocolReport for GelPrepPlan {
    fn to_rst(&self) -> String {
        let mut out = rst_title("Gel Extraction Preparation");
        out.push_str(&rst_section("Information"));
        out.push_str(&format!(
            "DNA size: {}\n\
             Desired DNA weight: {}\n\
             Recovery on size: {:.0} [%]\n\
             DNA weight to load: {}\n\n",
            self.size,
            self.desired_weight,
            self.size_recovery * 100.0,
            self.prep_weight,
        ));
        out
    }
}

impl ProtocolReport for GelRecoveryPlan {
    fn to_rst(&self) -> String {
        let mut out = rst_title("Gel Extraction Recovery");
        out.push_str(&rst_section("Information"));
        out.push_str(&format!(
            "DNA size: {}\n\
             Elution volume: {}\n\
             Loaded DNA weight: {}\n\
             Recovery on size: {:.0} [%]\n\
             Recovery on volume: {:.0} [%]\n\
             Expected DNA weight: {}\n\n",
            self.size,
            self.volume,
            self.start_weight,
            self.size_recovery * 100.0,
            self.volume_recovery * 100.0,
            self.final_weight,
        ));
        out
    }
}
