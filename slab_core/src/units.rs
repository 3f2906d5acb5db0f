//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in slab design. These are plain
//! `f64` newtypes that serialize as bare numbers.
//!
//! ## Working Units
//!
//! The stress equations work in a consistent N-mm system:
//! - Length: millimetres (mm)
//! - Force: newtons (N), entered by users as kilonewtons (kN)
//! - Stress: N/mm² = megapascals (MPa)
//! - Subgrade reaction: entered as MN/m³, used as N/mm³ (1 MN/m³ = 0.001 N/mm³)
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{KiloNewtons, Newtons, MegaPascals, KiloPascals};
//!
//! let leg = KiloNewtons(60.0);
//! let n: Newtons = leg.into();
//! assert_eq!(n.0, 60_000.0);
//!
//! let kpa: KiloPascals = MegaPascals(4.5).into();
//! assert_eq!(kpa.0, 4500.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

/// Stress in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

impl From<MegaPascals> for KiloPascals {
    fn from(mpa: MegaPascals) -> Self {
        KiloPascals(mpa.0 * 1000.0)
    }
}

impl From<KiloPascals> for MegaPascals {
    fn from(kpa: KiloPascals) -> Self {
        MegaPascals(kpa.0 / 1000.0)
    }
}

// ============================================================================
// Subgrade Reaction
// ============================================================================

/// Modulus of subgrade reaction in MN/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MnPerCubicMetre(pub f64);

impl MnPerCubicMetre {
    /// Convert to N/mm³ for use alongside mm and MPa
    pub fn to_n_per_mm3(self) -> f64 {
        self.0 * 1.0e-3
    }
}
