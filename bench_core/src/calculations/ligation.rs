//! # Ligation Calculation
//!
//! Vector and insert amounts for a vector:insert ligation.
//!
//! ## Assumptions
//!
//! - 50 ng is the optimum for a 2,700 bp pUC-type vector, scaled linearly
//!   with vector size (50 / 2,700 = 1 / 54)
//! - Target molar ratio vector:insert = 1:6
//!
//! ```text
//! vector_ng = vector_bp / 54
//! insert_ng = 6 × vector_ng × insert_bp / vector_bp
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bench_core::calculations::ligation::required_weights;
//!
//! let (vector_ng, insert_ng) = required_weights(5400.0, 540.0).unwrap();
//! assert_eq!(vector_ng, 100.0);
//! assert_eq!(insert_ng, 60.0);
//! ```

use tracing::debug;

use crate::errors::{require_positive, CalcResult};

/// Vector size (bp) per ng at the ligation optimum
pub const VECTOR_BP_PER_NG: f64 = 54.0;

/// Insert molecules per vector molecule
pub const INSERT_MOLAR_RATIO: f64 = 6.0;

/// Optimal vector mass in ng for a vector of `vector_bp`.
pub fn required_vector_weight(vector_bp: f64) -> CalcResult<f64> {
    let vector_bp = require_positive("vector_bp", vector_bp)?;
    Ok(vector_bp / VECTOR_BP_PER_NG)
}

/// Insert mass in ng matching `vector_ng` of vector at the 1:6 molar ratio.
pub fn required_insert_weight(vector_ng: f64, vector_bp: f64, insert_bp: f64) -> CalcResult<f64> {
    let vector_bp = require_positive("vector_bp", vector_bp)?;
    Ok(INSERT_MOLAR_RATIO * vector_ng * insert_bp / vector_bp)
}

/// Vector and insert masses in ng, as `(vector_ng, insert_ng)`.
pub fn required_weights(vector_bp: f64, insert_bp: f64) -> CalcResult<(f64, f64)> {
    let vector_ng = required_vector_weight(vector_bp)?;
    let insert_ng = required_insert_weight(vector_ng, vector_bp, insert_bp)?;
    debug!(vector_bp, insert_bp, vector_ng, insert_ng, "ligation weights");
    Ok((vector_ng, insert_ng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use proptest::prelude::*;

    #[test]
    fn test_required_vector_weight() {
        assert_eq!(required_vector_weight(5400.0).unwrap(), 100.0);
        // pUC reference point
        assert!((required_vector_weight(2700.0).unwrap() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_required_insert_weight() {
        assert_eq!(required_insert_weight(100.0, 5400.0, 540.0).unwrap(), 60.0);
    }

    #[test]
    fn test_required_weights() {
        assert_eq!(required_weights(5400.0, 540.0).unwrap(), (100.0, 60.0));
    }

    proptest! {
        #[test]
        fn composition_matches_required_weights(vector_bp in 1.0f64..1.0e6, insert_bp in 1.0f64..1.0e6) {
            let vector_ng = required_vector_weight(vector_bp).unwrap();
            let insert_ng = required_insert_weight(vector_ng, vector_bp, insert_bp).unwrap();
            prop_assert_eq!(required_weights(vector_bp, insert_bp).unwrap(), (vector_ng, insert_ng));
        }

        #[test]
        fn insert_weight_is_a_ninth_of_insert_size(vector_bp in 1.0f64..1.0e6, insert_bp in 1.0f64..1.0e6) {
            let (_, insert_ng) = required_weights(vector_bp, insert_bp).unwrap();
            prop_assert!((insert_ng - insert_bp / 9.0).abs() <= 1e-9 * insert_bp.max(1.0));
        }
    }

    #[test]
    fn test_insert_weight_is_independent_of_vector_size_at_optimum() {
        // 6 × (v / 54) × i / v = i / 9
        let (_, insert_ng) = required_weights(8000.0, 900.0).unwrap();
        assert!((insert_ng - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_vector_size_rejected() {
        let err = required_weights(0.0, 540.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "vector_bp"));
    }

    #[test]
    fn test_negative_vector_size_rejected() {
        assert!(required_vector_weight(-2700.0).is_err());
        assert!(required_insert_weight(50.0, -2700.0, 100.0).is_err());
    }
}
