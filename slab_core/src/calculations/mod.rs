//! # Slab Calculations
//!
//! The design pipeline, bottom-up:
//!
//! - [`influence`] - Influence curves for neighbouring loads
//! - [`stress`] - Factored stress of one case at one thickness
//! - [`thickness`] - Minimum-thickness search and governing case selection
//! - [`slab`] - Top-level `calculate(input) -> Result<SlabDesignResult, CalcError>`
//!
//! All inputs and results are JSON-serializable. Calculations are pure
//! functions of their input; the same input always gives the same result.

pub mod influence;
pub mod slab;
pub mod stress;
pub mod thickness;

// Re-export commonly used types
pub use influence::InfluenceCurve;
pub use slab::{calculate, DerivedParameters, SlabDesignInput, SlabDesignResult};
pub use stress::{DesignParameters, StressBreakdown, StressEngine};
pub use thickness::{governing_case, solve, CalculationResult};
