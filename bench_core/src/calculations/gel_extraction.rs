//! # Gel Extraction Calculation
//!
//! Mass bookkeeping around a lossy gel extraction step. Recovery depends on
//! fragment size and on the elution volume, both looked up in the
//! [`calibration`](crate::calibration) tables.
//!
//! ```text
//! prep  = desired / r(size)
//! final = start × r(size) × r(volume)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bench_core::calculations::gel_extraction::{final_weight, prep_weight};
//!
//! // 1 kb fragment recovers at 92%
//! let load = prep_weight(92.0, 1000.0).unwrap();
//! assert!((load - 100.0).abs() < 1e-9);
//!
//! let recovered = final_weight(100.0, 1000.0, 50.0);
//! assert!((recovered - 92.0).abs() < 1e-9);
//! ```

use tracing::debug;

use crate::calibration::{recovery_on_size, recovery_on_volume};
use crate::errors::{CalcError, CalcResult};

/// DNA mass to load before extraction so that `desired_weight` remains after
/// recovery losses.
///
/// # Errors
///
/// `CalculationFailed` if the size table yields a zero efficiency, which
/// would otherwise turn the result into infinity.
pub fn prep_weight(desired_weight: f64, size_bp: f64) -> CalcResult<f64> {
    let recovery = recovery_on_size(size_bp);
    if recovery <= 0.0 {
        return Err(CalcError::calculation_failed(
            "prep_weight",
            format!("recovery efficiency for {} bp is zero", size_bp),
        ));
    }
    let weight = desired_weight / recovery;
    debug!(desired_weight, size_bp, recovery, weight, "gel extraction prep weight");
    Ok(weight)
}

/// DNA mass expected after extracting `start_weight` of a `size_bp` fragment
/// eluted in `volume`.
pub fn final_weight(start_weight: f64, size_bp: f64, volume: f64) -> f64 {
    let size_recovery = recovery_on_size(size_bp);
    let volume_recovery = recovery_on_volume(volume);
    let weight = start_weight * size_recovery * volume_recovery;
    debug!(start_weight, size_bp, volume, size_recovery, volume_recovery, weight, "gel extraction final weight");
    weight
}
