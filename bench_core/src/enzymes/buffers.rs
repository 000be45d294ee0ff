//! Double digestion buffer compatibility.
//!
//! Keyed by an unordered pair of enzyme kinds: `(EcoRI, XbaI)` and
//! `(XbaI, EcoRI)` resolve to the same entry. Some supported pairs are not
//! recommended because one enzyme shows star activity in the shared buffer;
//! those carry a warning the caller must surface.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::EnzymeKind;
use crate::errors::{CalcError, CalcResult};

/// Buffer choice for a two-enzyme reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BufferRecommendation {
    /// 10x buffer to use for the combined reaction
    pub buffer: &'static str,
    /// False when the pair works but with side effects
    pub recommended: bool,
    /// Present whenever `recommended` is false
    pub warning: Option<&'static str>,
}

/// Unordered pair of enzyme kinds, stored with the lower kind first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnzymePair {
    first: EnzymeKind,
    second: EnzymeKind,
}

impl EnzymePair {
    /// Pair `a` and `b` regardless of order.
    pub fn new(a: EnzymeKind, b: EnzymeKind) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// Both kinds, lower first
    pub fn kinds(&self) -> (EnzymeKind, EnzymeKind) {
        (self.first, self.second)
    }
}

const BUFFER_H: &str = "TAKARA Universal Buffer H";
const BUFFER_M: &str = "TAKARA Universal Buffer M";

static RECOMMENDATIONS: Lazy<HashMap<EnzymePair, BufferRecommendation>> = Lazy::new(|| {
    use EnzymeKind::*;

    let ok = |buffer| BufferRecommendation {
        buffer,
        recommended: true,
        warning: None,
    };
    let star_activity = |buffer, warning| BufferRecommendation {
        buffer,
        recommended: false,
        warning: Some(warning),
    };

    HashMap::from([
        (EnzymePair::new(EcoRI, PstI), ok(BUFFER_H)),
        (EnzymePair::new(EcoRI, SpeI), ok(BUFFER_H)),
        (
            EnzymePair::new(EcoRI, XbaI),
            star_activity(
                BUFFER_M,
                "Double digestion of EcoR I and Xba I is not recommended. \
                 EcoR I exhibits significant star activity in this buffer.",
            ),
        ),
        (EnzymePair::new(PstI, SpeI), ok(BUFFER_H)),
        (
            EnzymePair::new(PstI, XbaI),
            star_activity(
                BUFFER_M,
                "Double digestion of Pst I and Xba I is not recommended. \
                 Pst I exhibits star activity in this buffer.",
            ),
        ),
        (EnzymePair::new(SpeI, XbaI), ok(BUFFER_M)),
    ])
});

/// Buffer recommendation for digesting with `a` and `b` together.
///
/// # Errors
///
/// `NotFound` when the pair has no known combination, including an enzyme
/// paired with itself.
pub fn recommended_buffer(a: EnzymeKind, b: EnzymeKind) -> CalcResult<BufferRecommendation> {
    RECOMMENDATIONS
        .get(&EnzymePair::new(a, b))
        .copied()
        .ok_or_else(|| CalcError::not_found("Enzyme combination", format!("{} and {}", a, b)))
}
