//! # Recovery Calibration Tables
//!
//! Empirical recovery efficiencies for the Promega Wizard SV Gel and PCR
//! Clean-Up System, keyed by DNA fragment size and by elution volume.
//!
//! Lookups snap to the nearest calibrated breakpoint rather than
//! interpolating between them:
//!
//! ```text
//! value < first threshold          -> first efficiency
//! value > last threshold           -> last efficiency
//! lhs <= value <= rhs              -> efficiency of the closer endpoint
//!                                     (lhs on an exact midpoint)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bench_core::calibration::{nearest_efficiency, SIZE_TABLE};
//!
//! assert_eq!(nearest_efficiency(20.0, &SIZE_TABLE), 0.26);
//! assert_eq!(nearest_efficiency(900.0, &SIZE_TABLE), 0.92);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One calibrated (threshold, efficiency) breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    /// Breakpoint on the key axis (bp for size, solution units for volume)
    pub threshold: f64,
    /// Fraction of DNA mass recovered, 0.0 - 1.0
    pub efficiency: f64,
}

impl CalibrationPoint {
    /// Create a calibration point
    pub const fn new(threshold: f64, efficiency: f64) -> Self {
        Self { threshold, efficiency }
    }
}

/// Ordered, non-empty calibration table with strictly increasing thresholds.
///
/// The shipped tables are constants; [`CalibrationTable::new`] validates
/// custom ones so that an empty or unordered table can never reach
/// [`nearest_efficiency`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationTable {
    name: &'static str,
    points: &'static [CalibrationPoint],
}

impl CalibrationTable {
    /// Build a validated table from static breakpoints.
    pub fn new(name: &'static str, points: &'static [CalibrationPoint]) -> CalcResult<Self> {
        let table = Self { name, points };
        table.validate()?;
        Ok(table)
    }

    /// Human-readable table name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Breakpoints in ascending threshold order
    pub fn points(&self) -> &'static [CalibrationPoint] {
        self.points
    }

    /// Check the table invariants.
    pub fn validate(&self) -> CalcResult<()> {
        if self.points.is_empty() {
            return Err(CalcError::invalid_input(self.name, "[]", "Calibration table must not be empty"));
        }
        for point in self.points {
            if !point.threshold.is_finite() {
                return Err(CalcError::invalid_input(
                    self.name,
                    point.threshold.to_string(),
                    "Threshold must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&point.efficiency) {
                return Err(CalcError::invalid_input(
                    self.name,
                    point.efficiency.to_string(),
                    "Efficiency must be between 0 and 1",
                ));
            }
        }
        for pair in self.points.windows(2) {
            if pair[0].threshold >= pair[1].threshold {
                return Err(CalcError::invalid_input(
                    self.name,
                    format!("{} -> {}", pair[0].threshold, pair[1].threshold),
                    "Thresholds must be strictly increasing",
                ));
            }
        }
        Ok(())
    }
}

/// Recovery by DNA fragment size in bp
pub const SIZE_TABLE: CalibrationTable = CalibrationTable {
    name: "recovery_on_size",
    points: &[
        CalibrationPoint::new(55.0, 0.26),
        CalibrationPoint::new(70.0, 0.39),
        CalibrationPoint::new(85.0, 0.55),
        CalibrationPoint::new(100.0, 0.84),
        CalibrationPoint::new(500.0, 0.89),
        CalibrationPoint::new(1000.0, 0.92),
        CalibrationPoint::new(3199.0, 0.95),
        CalibrationPoint::new(9416.0, 0.95),
        CalibrationPoint::new(23130.0, 0.47),
    ],
};

/// Recovery by elution volume of the extraction mix
pub const VOLUME_TABLE: CalibrationTable = CalibrationTable {
    name: "recovery_on_volume",
    points: &[
        CalibrationPoint::new(10.0, 0.35),
        CalibrationPoint::new(15.0, 0.98),
        CalibrationPoint::new(25.0, 0.98),
        CalibrationPoint::new(50.0, 1.00),
        CalibrationPoint::new(75.0, 1.00),
        CalibrationPoint::new(100.0, 1.00),
    ],
};

/// Efficiency of the breakpoint nearest to `value`.
///
/// Values outside the calibrated range clamp to the end entries. Inside the
/// range the closer endpoint of the bracketing pair wins, and an exact
/// midpoint resolves to the lower threshold. A NaN matches no bracket and
/// falls through to the last entry.
pub fn nearest_efficiency(value: f64, table: &CalibrationTable) -> f64 {
    // non-empty by construction
    let points = table.points();
    let first = points[0];
    let last = points[points.len() - 1];

    if value < first.threshold {
        return first.efficiency;
    }
    if value > last.threshold {
        return last.efficiency;
    }

    for pair in points.windows(2) {
        let (lhs, rhs) = (pair[0], pair[1]);
        if lhs.threshold <= value && value <= rhs.threshold {
            return if value - lhs.threshold <= rhs.threshold - value {
                lhs.efficiency
            } else {
                rhs.efficiency
            };
        }
    }

    last.efficiency
}

/// Recovery efficiency for a fragment of `size_bp`
pub fn recovery_on_size(size_bp: f64) -> f64 {
    nearest_efficiency(size_bp, &SIZE_TABLE)
}

/// Recovery efficiency for an elution `volume`
pub fn recovery_on_volume(volume: f64) -> f64 {
    nearest_efficiency(volume, &VOLUME_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_table_efficiency(efficiency: f64, table: &CalibrationTable) -> bool {
        table.points().iter().any(|p| p.efficiency == efficiency)
    }

    #[test]
    fn test_shipped_tables_are_valid() {
        assert!(SIZE_TABLE.validate().is_ok());
        assert!(VOLUME_TABLE.validate().is_ok());
    }

    proptest! {
        #[test]
        fn below_range_clamps_to_first(size in -1.0e12f64..55.0, volume in -1.0e12f64..10.0) {
            prop_assert_eq!(nearest_efficiency(size, &SIZE_TABLE), 0.26);
            prop_assert_eq!(nearest_efficiency(volume, &VOLUME_TABLE), 0.35);
        }

        #[test]
        fn above_range_clamps_to_last(size in 23130.0f64..1.0e12, volume in 100.0f64..1.0e12) {
            prop_assert_eq!(nearest_efficiency(size, &SIZE_TABLE), 0.47);
            prop_assert_eq!(nearest_efficiency(volume, &VOLUME_TABLE), 1.00);
        }

        #[test]
        fn result_is_always_a_table_efficiency(value in any::<f64>()) {
            prop_assert!(is_table_efficiency(nearest_efficiency(value, &SIZE_TABLE), &SIZE_TABLE));
            prop_assert!(is_table_efficiency(nearest_efficiency(value, &VOLUME_TABLE), &VOLUME_TABLE));
        }

        #[test]
        fn lookup_is_deterministic(value in -1.0e6f64..1.0e6) {
            let first = nearest_efficiency(value, &SIZE_TABLE);
            prop_assert_eq!(first, nearest_efficiency(value, &SIZE_TABLE));
            prop_assert_eq!(recovery_on_size(value), first);
        }
    }

    #[test]
    fn test_exact_thresholds() {
        for point in SIZE_TABLE.points() {
            assert_eq!(nearest_efficiency(point.threshold, &SIZE_TABLE), point.efficiency);
        }
        for point in VOLUME_TABLE.points() {
            assert_eq!(nearest_efficiency(point.threshold, &VOLUME_TABLE), point.efficiency);
        }
    }

    #[test]
    fn test_nearest_endpoint_wins() {
        // 100 .. 500: 250 is closer to 100
        assert_eq!(nearest_efficiency(250.0, &SIZE_TABLE), 0.84);
        // 100 .. 500: 350 is closer to 500
        assert_eq!(nearest_efficiency(350.0, &SIZE_TABLE), 0.89);
        // 10 .. 15: 11 is closer to 10
        assert_eq!(nearest_efficiency(11.0, &VOLUME_TABLE), 0.35);
        assert_eq!(nearest_efficiency(14.0, &VOLUME_TABLE), 0.98);
    }

    #[test]
    fn test_midpoint_prefers_lower_threshold() {
        assert_eq!(nearest_efficiency(300.0, &SIZE_TABLE), 0.84);
        assert_eq!(nearest_efficiency(62.5, &SIZE_TABLE), 0.26);
        assert_eq!(nearest_efficiency(12.5, &VOLUME_TABLE), 0.35);
    }

    #[test]
    fn test_nan_falls_through_to_last() {
        assert_eq!(nearest_efficiency(f64::NAN, &SIZE_TABLE), 0.47);
    }

    #[test]
    fn test_single_point_table() {
        static POINTS: [CalibrationPoint; 1] = [CalibrationPoint::new(50.0, 0.5)];
        let table = CalibrationTable::new("single", &POINTS).unwrap();
        assert_eq!(nearest_efficiency(0.0, &table), 0.5);
        assert_eq!(nearest_efficiency(50.0, &table), 0.5);
        assert_eq!(nearest_efficiency(100.0, &table), 0.5);
    }

    #[test]
    fn test_invalid_tables_rejected() {
        static EMPTY: [CalibrationPoint; 0] = [];
        assert!(CalibrationTable::new("empty", &EMPTY).is_err());

        static UNORDERED: [CalibrationPoint; 2] =
            [CalibrationPoint::new(10.0, 0.5), CalibrationPoint::new(10.0, 0.6)];
        assert!(CalibrationTable::new("unordered", &UNORDERED).is_err());

        static OUT_OF_RANGE: [CalibrationPoint; 1] = [CalibrationPoint::new(10.0, 1.5)];
        assert!(CalibrationTable::new("out_of_range", &OUT_OF_RANGE).is_err());
    }

    #[test]
    fn test_named_shortcuts() {
        assert_eq!(recovery_on_size(1000.0), 0.92);
        assert_eq!(recovery_on_volume(50.0), 1.00);
    }
}
