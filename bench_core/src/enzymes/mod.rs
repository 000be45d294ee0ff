//! # Restriction Enzyme Registry
//!
//! Reference data for the restriction enzymes the protocol generator knows
//! about. Each enzyme kind maps to exactly one immutable [`Enzyme`] record
//! (see [`catalog`]); double-digestion buffer choices live in [`buffers`].
//!
//! ## Example
//!
//! ```rust
//! use bench_core::enzymes::{lookup_by_index, recommended_buffer, EnzymeKind};
//!
//! let ecori = lookup_by_index(0).unwrap();
//! assert_eq!(ecori.name, "EcoR I");
//! assert_eq!(ecori.substrate.sites, 5);
//!
//! let rec = recommended_buffer(EnzymeKind::EcoRI, EnzymeKind::PstI).unwrap();
//! assert!(rec.recommended);
//! ```

pub mod buffers;
pub mod catalog;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use buffers::{recommended_buffer, BufferRecommendation, EnzymePair};

/// Supported restriction enzymes, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnzymeKind {
    /// EcoR I, G^AATTC
    EcoRI,
    /// Pst I, CTGCA^G
    PstI,
    /// Spe I, A^CTAGT
    SpeI,
    /// Xba I, T^CTAGA
    XbaI,
}

impl EnzymeKind {
    /// All enzyme kinds in menu order
    pub const ALL: [EnzymeKind; 4] = [
        EnzymeKind::EcoRI,
        EnzymeKind::PstI,
        EnzymeKind::SpeI,
        EnzymeKind::XbaI,
    ];

    /// The shared reference record for this kind
    pub fn enzyme(&self) -> &'static Enzyme {
        match self {
            EnzymeKind::EcoRI => &catalog::ECORI,
            EnzymeKind::PstI => &catalog::PSTI,
            EnzymeKind::SpeI => &catalog::SPEI,
            EnzymeKind::XbaI => &catalog::XBAI,
        }
    }

    /// Short identifier (e.g., "EcoRI")
    pub fn code(&self) -> &'static str {
        match self {
            EnzymeKind::EcoRI => "EcoRI",
            EnzymeKind::PstI => "PstI",
            EnzymeKind::SpeI => "SpeI",
            EnzymeKind::XbaI => "XbaI",
        }
    }

    /// Kind at a 0-based menu position
    pub fn from_index(index: usize) -> CalcResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| CalcError::not_found("Enzyme", format!("index {}", index)))
    }
}

impl std::fmt::Display for EnzymeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.enzyme().name)
    }
}

impl FromStr for EnzymeKind {
    type Err = CalcError;

    /// Accepts "EcoRI", "EcoR I", "ecori", "ECO-RI" and the like.
    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().to_uppercase() == normalized)
            .ok_or_else(|| CalcError::not_found("Enzyme", s))
    }
}

/// Reference substrate used to define one enzyme unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Substrate {
    /// Substrate DNA (e.g., "lambda")
    pub name: &'static str,
    /// Substrate length in bp
    pub size_bp: u32,
    /// Number of recognition sites in the substrate
    pub sites: u32,
}

/// Heat inactivation condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatInactivation {
    pub temperature_c: f64,
    pub minutes: f64,
}

/// Immutable reference record for one restriction enzyme.
///
/// One unit cuts 1 µg of [`Enzyme::substrate`] completely in one hour at
/// [`Enzyme::temperature_c`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Enzyme {
    /// Identity of this record
    pub kind: EnzymeKind,
    /// Display name (e.g., "EcoR I")
    pub name: &'static str,
    /// Recognition site with the cut position marked by `'`
    pub site: &'static str,
    /// Unit definition substrate
    pub substrate: Substrate,
    /// Optimal reaction temperature in °C
    pub temperature_c: f64,
    /// Heat inactivation condition
    pub heat_inactivation: HeatInactivation,
    /// Stock concentration in U/µl
    pub concentration_u_per_ul: f64,
    /// Supplier buffer for single digestion
    pub buffer: &'static str,
}

impl std::fmt::Display for Enzyme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Enzyme record at a 0-based menu position.
///
/// # Errors
///
/// `NotFound` when `index` is past the end of [`EnzymeKind::ALL`].
pub fn lookup_by_index(index: usize) -> CalcResult<&'static Enzyme> {
    EnzymeKind::from_index(index).map(|kind| kind.enzyme())
}

/// All enzyme records in menu order
pub fn all_enzymes() -> impl Iterator<Item = &'static Enzyme> {
    EnzymeKind::ALL.into_iter().map(|kind| kind.enzyme())
}
