//! # bench_core - Molecular-Biology Bench Calculators
//!
//! `bench_core` is the computational heart of Benchtop: small formula
//! calculators for everyday cloning work, plus protocol builders that turn
//! the numbers into a printable bench sheet.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over scalars and static reference tables
//! - **JSON-First**: Plans and results implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bench_core::calculations::ligation::required_weights;
//!
//! let (vector_ng, insert_ng) = required_weights(5400.0, 540.0).unwrap();
//! assert_eq!((vector_ng, insert_ng), (100.0, 60.0));
//! ```
//!
//! ## Modules
//!
//! - [`calibration`] - Recovery calibration tables and nearest-breakpoint lookup
//! - [`calculations`] - Gel extraction, ligation and restriction digest formulas
//! - [`enzymes`] - Restriction enzyme catalog and double digestion buffers
//! - [`protocols`] - Protocol plans and report rendering
//! - [`settings`] - Protocol constants (excess factor, volumes, incubation)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod calibration;
pub mod enzymes;
pub mod errors;
pub mod protocols;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use enzymes::{Enzyme, EnzymeKind};
pub use errors::{CalcError, CalcResult};
pub use protocols::{render, ProtocolReport, ReportFormat};
pub use settings::ProtocolSettings;
