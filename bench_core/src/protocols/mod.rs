//! # Lab Protocols
//!
//! Plan builders that chain the raw calculators into bench-ready numbers,
//! and renderers that turn a plan into a report.
//!
//! Each plan follows the same pattern:
//!
//! - `*Plan::new(..)` - validate inputs, run the calculators, apply
//!   [`ProtocolSettings`](crate::settings::ProtocolSettings)
//! - [`ProtocolReport::to_rst`] - plain-text protocol sheet
//! - [`render`] - dispatch on [`ReportFormat`]
//!
//! ## Example
//!
//! ```rust
//! use bench_core::protocols::{render, LigationPlan, ReportFormat};
//! use bench_core::settings::ProtocolSettings;
//! use bench_core::units::BasePairs;
//!
//! let plan = LigationPlan::new(BasePairs(5400.0), BasePairs(540.0), &ProtocolSettings::default()).unwrap();
//! let report = render(&plan, ReportFormat::Rst).unwrap();
//! assert!(report.contains("Required Insert DNA weight: 60.000 [ng]"));
//! ```

pub mod digestion;
pub mod gel_extraction;
pub mod ligation;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use digestion::{DigestConditions, DigestTarget, DoubleDigestPlan, EnzymeDose, SingleDigestPlan};
pub use gel_extraction::{GelPrepPlan, GelRecoveryPlan};
pub use ligation::LigationPlan;

/// Output style for generated protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// reStructuredText-flavoured plain text
    #[default]
    Rst,
    /// Pretty-printed JSON of the plan
    Json,
}

impl ReportFormat {
    /// All formats for help text
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Rst, ReportFormat::Json];

    /// Format tag as accepted on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            ReportFormat::Rst => "rst",
            ReportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ReportFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "rst" => Ok(ReportFormat::Rst),
            "json" => Ok(ReportFormat::Json),
            _ => Err(CalcError::invalid_input("format", s, "Supported formats are 'rst' and 'json'")),
        }
    }
}

/// A plan that can be written out as a protocol sheet.
pub trait ProtocolReport: Serialize {
    /// Plain-text protocol in reStructuredText style
    fn to_rst(&self) -> String;
}

/// Render `plan` in the requested format.
pub fn render<P: ProtocolReport>(plan: &P, format: ReportFormat) -> CalcResult<String> {
    match format {
        ReportFormat::Rst => Ok(plan.to_rst()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
    }
}

// ============================================================================
// Text helpers shared by the rst renderers
// ============================================================================

/// Starred title block
fn rst_title(title: &str) -> String {
    let bar = "*".repeat(title.len() + 2);
    format!("{bar}\n {title}\n{bar}\n\n")
}

/// Section heading underlined with `=`
fn rst_section(name: &str) -> String {
    format!("{name}\n{}\n", "=".repeat(32))
}

/// Sub-section heading underlined with `-`
fn rst_subsection(name: &str) -> String {
    format!("{name}\n{}\n", "-".repeat(32))
}

/// Admonition block, body indented by four spaces
fn rst_admonition(kind: &str, body: &str) -> String {
    format!(".. {kind}::\n\n    {body}\n\n")
}
