//! # Unit Types
//!
//! Lightweight newtype wrappers for the quantities that cross the boundary
//! between the CLI and the protocol builders. The raw calculators stay on
//! `f64` so their formulas read like the bench sheets they come from.
//!
//! ## Conventions
//!
//! - DNA length: base pairs (bp)
//! - DNA mass: nanograms (ng) at the bench, micrograms (µg) for enzyme units
//!
//! ## Example
//!
//! ```rust
//! use bench_core::units::{Micrograms, Nanograms};
//!
//! let loaded = Nanograms(500.0);
//! let mass: Micrograms = loaded.into();
//! assert_eq!(mass.0, 0.5);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// DNA fragment length in base pairs
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasePairs(pub f64);

impl std::fmt::Display for BasePairs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [bp]", self.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// DNA mass in nanograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nanograms(pub f64);

/// DNA mass in micrograms (1 µg = 1000 ng)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Micrograms(pub f64);

impl From<Nanograms> for Micrograms {
    fn from(ng: Nanograms) -> Self {
        Micrograms(ng.0 / 1000.0)
    }
}

impl std::fmt::Display for Nanograms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} [ng]", self.0)
    }
}
