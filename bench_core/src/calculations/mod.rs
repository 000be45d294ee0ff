//! # Bench Calculations
//!
//! Pure formula modules. Each function takes plain scalars (sizes in bp,
//! masses in ng or µg, volumes) and returns a scalar or tuple; none of them
//! hold state or perform I/O.
//!
//! ## Available Calculations
//!
//! - [`gel_extraction`] - DNA mass before/after gel extraction
//! - [`ligation`] - vector and insert masses for a 1:6 ligation
//! - [`digestion`] - restriction enzyme units for a digest

pub mod digestion;
pub mod gel_extraction;
pub mod ligation;

// Re-export commonly used functions
pub use digestion::{molecular_weight, site_molar, unit_activity, units_required, weight_to_molar};
pub use gel_extraction::{final_weight, prep_weight};
pub use ligation::{required_insert_weight, required_vector_weight, required_weights};
