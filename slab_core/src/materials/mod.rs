//! # Materials
//!
//! Ground and concrete models that produce the scalar design parameters
//! shared by every load case.
//!
//! - [`subgrade`] - CBR / penetrometer → modulus of subgrade reaction `k`
//! - [`concrete`] - f'c, age, repetitions → elastic modulus and allowable stress
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::{ConcreteProperties, GroundInput};
//!
//! let k = GroundInput::cbr(10.0).modulus();
//! assert_eq!(k.design_k_mn_m3, 54.0);
//!
//! let allowable = ConcreteProperties::new(32.0).allowable_stress();
//! println!("fr = {:.2} MPa", allowable.modulus_of_rupture_mpa);
//! ```

pub mod concrete;
pub mod subgrade;

pub use concrete::{AllowableStress, ConcreteProperties, CuringAge, LoadRepetitions};
pub use subgrade::{GroundAssessment, GroundInput, SubBase, SubgradeModulus};
