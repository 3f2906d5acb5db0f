//! # slab_core - Ground Slab Thickness Design Engine
//!
//! `slab_core` sizes unreinforced concrete ground slabs under racking legs,
//! isolated baseplates and wheel loads, following the CCANZ TM38 method with
//! Westergaard plate-on-elastic-foundation stresses. All inputs and outputs
//! are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Settings**: Search range and constants travel with the input
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::calculations::{calculate, SlabDesignInput};
//! use slab_core::geometry::ContactFootprint;
//! use slab_core::loads::{JointType, Layout, PointLoadLayout};
//! use slab_core::materials::{ConcreteProperties, GroundInput};
//! use slab_core::settings::SolverSettings;
//!
//! let input = SlabDesignInput {
//!     label: "Mezzanine column".to_string(),
//!     ground: GroundInput::cbr(10.0),
//!     concrete: ConcreteProperties::new(32.0),
//!     joint: JointType::NoTransfer,
//!     layout: Layout::PointLoad(PointLoadLayout {
//!         load_kn: 60.0,
//!         baseplate: ContactFootprint::Square { side_mm: 50.0 },
//!     }),
//!     settings: SolverSettings::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.passes());
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"governing\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Stress engine, thickness solver and top-level design
//! - [`equations`] - Closed-form formulas and the equation registry
//! - [`geometry`] - Contact footprints and radii
//! - [`loads`] - Load cases, joints and layout builders
//! - [`materials`] - Subgrade and concrete models
//! - [`settings`] - Solver configuration
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationResult, SlabDesignInput, SlabDesignResult};
pub use errors::{CalcError, CalcResult};
pub use settings::SolverSettings;
