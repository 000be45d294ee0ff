//! # Protocol Settings
//!
//! Bench constants the protocol generator applies on top of the raw
//! calculators: the enzyme excess factor, reaction and buffer volumes, and
//! the ligation incubation conditions.
//!
//! Settings serialize to JSON. Every field is optional on input and falls
//! back to its default, so a settings file only needs the values it changes:
//!
//! ```json
//! { "excess_factor": 5.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bench_core::settings::ProtocolSettings;
//!
//! let settings = ProtocolSettings::from_json(r#"{ "reaction_volume_ul": 50.0 }"#).unwrap();
//! assert_eq!(settings.reaction_volume_ul, 50.0);
//! assert_eq!(settings.excess_factor, 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Settings shared by every protocol builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolSettings {
    /// Multiplier applied to calculated enzyme units
    pub excess_factor: f64,

    /// Total digestion reaction volume in µl (topped up with water)
    pub reaction_volume_ul: f64,

    /// Volume of 10x buffer per reaction in µl
    pub buffer_volume_ul: f64,

    /// Ligation incubation conditions
    pub ligation: LigationConditions,
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        ProtocolSettings {
            excess_factor: 3.0,
            reaction_volume_ul: 20.0,
            buffer_volume_ul: 2.0,
            ligation: LigationConditions::default(),
        }
    }
}

impl ProtocolSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: ProtocolSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate that every factor and volume is usable.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("excess_factor", self.excess_factor)?;
        require_positive("reaction_volume_ul", self.reaction_volume_ul)?;
        require_positive("buffer_volume_ul", self.buffer_volume_ul)?;
        self.ligation.validate()
    }
}

/// Incubation for the ligation mix (Mighty Mix style kits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LigationConditions {
    pub temperature_c: f64,
    pub minutes: f64,
    /// Shortcut incubation when in a hurry
    pub quick_temperature_c: f64,
    pub quick_minutes: f64,
}

impl Default for LigationConditions {
    fn default() -> Self {
        LigationConditions {
            temperature_c: 16.0,
            minutes: 30.0,
            quick_temperature_c: 25.0,
            quick_minutes: 5.0,
        }
    }
}

impl LigationConditions {
    fn validate(&self) -> CalcResult<()> {
        require_positive("ligation.minutes", self.minutes)?;
        require_positive("ligation.quick_minutes", self.quick_minutes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ProtocolSettings::default();
        assert_eq!(settings.excess_factor, 3.0);
        assert_eq!(settings.reaction_volume_ul, 20.0);
        assert_eq!(settings.buffer_volume_ul, 2.0);
        assert_eq!(settings.ligation.temperature_c, 16.0);
        assert_eq!(settings.ligation.minutes, 30.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings = ProtocolSettings::from_json("{}").unwrap();
        assert_eq!(settings, ProtocolSettings::default());
    }

    #[test]
    fn test_partial_nested_json() {
        let settings = ProtocolSettings::from_json(r#"{ "ligation": { "minutes": 60.0 } }"#).unwrap();
        assert_eq!(settings.ligation.minutes, 60.0);
        assert_eq!(settings.ligation.temperature_c, 16.0);
        assert_eq!(settings.excess_factor, 3.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ProtocolSettings::from_json(r#"{ "excess_factor": 0.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(ProtocolSettings::from_json(r#"{ "reaction_volume_ul": -1.0 }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = ProtocolSettings::from_json("{ excess_factor").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut settings = ProtocolSettings::default();
        settings.excess_factor = 4.0;
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(ProtocolSettings::from_json(&json).unwrap(), settings);
    }
}
