//! # Slab Design Equations
//!
//! All closed-form formulas live here so they can be checked against their
//! references in one place and shared by every load case.
//!
//! ## Modules
//!
//! - [`slab`] - Westergaard stresses, stiffness radius and contact radii
//! - [`registry`] - Equation metadata and usage tracking for audit output
//!
//! ## Conventions
//!
//! - **Lengths**: mm
//! - **Loads**: N inside the formulas
//! - **Stresses**: MPa (N/mm²), tension at the slab soffit positive
//! - **Subgrade modulus**: MN/m³, converted to N/mm³ where needed
//!
//! ## References
//!
//! - CCANZ TM38: Concrete ground floors and pavements
//! - Westergaard (1926): Stresses in concrete pavements
//! - NZS 3101: Concrete Structures Standard

pub mod registry;
pub mod slab;

pub use slab::{
    area_equivalent_radius,
    corner_stress,
    dual_tyre_radius,
    edge_contact_radius,
    edge_stress,
    equivalent_contact_radius,
    interior_stress,
    radius_of_relative_stiffness,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
