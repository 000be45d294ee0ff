//! # Restriction Digest Calculation
//!
//! Enzyme units needed to cut every recognition site in a DNA sample.
//!
//! One enzyme unit is defined on a reference substrate (usually lambda DNA)
//! as the activity that cuts 1 µg of it completely in one hour. Scaling that
//! cutting rate to the target DNA gives:
//!
//! ```text
//! X = molar sites of target / unit activity
//!   = {n_t × w_t / (l_t × A)} / {n_u / (l_u × A)}
//!   = n_t × w_t × l_u / (n_u × l_t)
//!
//! n  - number of sites      t - target DNA
//! w  - weight in µg         u - unit substrate
//! l  - size in bp           A - molecular weight of one base pair (660)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bench_core::calculations::digestion::units_required;
//! use bench_core::enzymes::EnzymeKind;
//!
//! // 1 µg of lambda DNA is exactly the Xba I unit definition
//! let units = units_required(1, 48502.0, 1.0, EnzymeKind::XbaI.enzyme()).unwrap();
//! assert!((units - 1.0).abs() < 1e-9);
//! ```

use tracing::debug;

use crate::enzymes::Enzyme;
use crate::errors::{require_positive, CalcError, CalcResult};

/// Average molecular weight of one base pair of double-stranded DNA (g/mol)
pub const BASE_PAIR_MOLECULAR_WEIGHT: f64 = 660.0;

/// Molecular weight of a double-stranded DNA of `size_bp`.
pub fn molecular_weight(size_bp: f64) -> f64 {
    size_bp * BASE_PAIR_MOLECULAR_WEIGHT
}

/// Moles in `weight` grams of a molecule of molecular weight `mw`.
///
/// ```text
/// 1 [mol] : mw [g] = x [mol] : weight [g]
/// ```
pub fn weight_to_molar(mw: f64, weight: f64) -> CalcResult<f64> {
    let mw = require_positive("molecular_weight", mw)?;
    Ok(weight / mw)
}

/// Moles of recognition sites in `weight` of a DNA of `size_bp` carrying
/// `sites` sites per molecule.
pub fn site_molar(sites: u32, weight: f64, size_bp: f64) -> CalcResult<f64> {
    let size_bp = require_positive("size_bp", size_bp)?;
    let molar = weight_to_molar(molecular_weight(size_bp), weight)?;
    Ok(f64::from(sites) * molar)
}

/// Moles of sites one unit of `enzyme` cuts per hour, i.e. the site molar
/// of 1 µg of its reference substrate.
pub fn unit_activity(enzyme: &Enzyme) -> CalcResult<f64> {
    site_molar(enzyme.substrate.sites, 1.0, f64::from(enzyme.substrate.size_bp))
}

/// Units of `enzyme` needed to cut all `sites` in `weight_ug` of a DNA of
/// `size_bp` within one hour.
///
/// # Errors
///
/// `InvalidInput` when `size_bp` is not positive or the enzyme's reference
/// substrate has no sites.
pub fn units_required(sites: u32, size_bp: f64, weight_ug: f64, enzyme: &Enzyme) -> CalcResult<f64> {
    let size_bp = require_positive("size_bp", size_bp)?;
    let substrate = &enzyme.substrate;
    if substrate.sites == 0 {
        return Err(CalcError::invalid_input(
            "substrate.sites",
            "0",
            format!("{} reference substrate has no recognition sites", enzyme.name),
        ));
    }

    let units = f64::from(sites) * weight_ug * f64::from(substrate.size_bp)
        / (f64::from(substrate.sites) * size_bp);
    debug!(enzyme = enzyme.name, sites, size_bp, weight_ug, units, "units required");
    Ok(units)
}
