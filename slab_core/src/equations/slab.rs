//! # Slab-on-Grade Formulas
//!
//! Closed-form equations for a concrete slab resting on an elastic (Winkler)
//! foundation, as used by the CCANZ TM38 design method.
//!
//! ## Notation
//!
//! - `P` = Load on one contact area (N)
//! - `h` = Slab thickness (mm)
//! - `E` = Elastic modulus of concrete (MPa)
//! - `k` = Modulus of subgrade reaction (MN/m³)
//! - `μ` = Poisson's ratio of concrete
//! - `ℓ` = Radius of relative stiffness (mm)
//! - `a` = Radius of the contact area (mm)
//! - `b` = Equivalent contact radius used in the stress equations (mm)
//!
//! ## Degenerate Inputs
//!
//! Every function returns `0.0` when a thickness, radius or stiffness that
//! feeds a logarithm or fractional power is not strictly positive. Stresses
//! are never negative.
//!
//! ## References
//!
//! - CCANZ TM38: Concrete ground floors and pavements
//! - Westergaard, H.M. (1926) Stresses in concrete pavements computed by
//!   theoretical analysis
//! - NZS 3101: Concrete Structures Standard

use std::f64::consts::{PI, SQRT_2};

use crate::units::MnPerCubicMetre;

/// Poisson's ratio for concrete
pub const POISSON_RATIO: f64 = 0.15;

/// Interior stress coefficient (Westergaard, log10 form)
pub const INTERIOR_COEFFICIENT: f64 = 0.275;
/// Constant term inside the interior log bracket
pub const INTERIOR_LOG_CONSTANT: f64 = 1.069;

/// Edge stress coefficient (Westergaard, log10 form)
pub const EDGE_COEFFICIENT: f64 = 0.529;
/// Constant term inside the edge log bracket
pub const EDGE_LOG_CONSTANT: f64 = 0.359;

/// Corner stress coefficient
pub const CORNER_COEFFICIENT: f64 = 3.0;
/// Exponent on the corner radius ratio
pub const CORNER_EXPONENT: f64 = 0.6;

/// Contact radii at or above `1.72h` are used unmodified in the stress formulas
pub const EQUIVALENT_RADIUS_LIMIT: f64 = 1.72;

/// Edge stress multiplier when the joint transfers load (dowels or ties)
pub const EDGE_LOAD_TRANSFER_FACTOR: f64 = 0.85;
/// Corner stress multiplier when the joint transfers load (dowels or ties)
pub const CORNER_LOAD_TRANSFER_FACTOR: f64 = 0.70;

// =============================================================================
// SLAB STIFFNESS
// =============================================================================

/// Radius of relative stiffness of a plate on an elastic foundation.
///
/// # Formula
/// ```text
/// ℓ = ( E·h³ / (12·(1 − μ²)·k) )^0.25
/// ```
///
/// `k` is converted from MN/m³ to N/mm³ so that `ℓ` comes out in mm.
///
/// # Arguments
/// * `e_mpa` - Elastic modulus of concrete (MPa)
/// * `h_mm` - Slab thickness (mm)
/// * `k_mn_m3` - Modulus of subgrade reaction (MN/m³)
/// * `mu` - Poisson's ratio
///
/// # Example
/// ```rust
/// use slab_core::equations::slab::{radius_of_relative_stiffness, POISSON_RATIO};
///
/// let l = radius_of_relative_stiffness(26_587.0, 150.0, 54.0, POISSON_RATIO);
/// assert!((l - 613.0).abs() < 2.0);
/// ```
#[inline]
pub fn radius_of_relative_stiffness(e_mpa: f64, h_mm: f64, k_mn_m3: f64, mu: f64) -> f64 {
    let k = MnPerCubicMetre(k_mn_m3).to_n_per_mm3();
    if e_mpa <= 0.0 || h_mm <= 0.0 || k <= 0.0 {
        return 0.0;
    }
    let flexural_rigidity = e_mpa * h_mm.powi(3) / (12.0 * (1.0 - mu * mu));
    (flexural_rigidity / k).powf(0.25)
}

// =============================================================================
// CONTACT RADII
// =============================================================================

/// Radius of a circle with the same area as the contact footprint.
///
/// # Formula
/// a = √(A/π)
#[inline]
pub fn area_equivalent_radius(area_mm2: f64) -> f64 {
    if area_mm2 <= 0.0 {
        return 0.0;
    }
    (area_mm2 / PI).sqrt()
}

/// Equivalent single radius for a pair of dual tyres.
///
/// # Formula
/// ```text
/// a = √(r² + 2·tc·r/π)
/// ```
///
/// # Arguments
/// * `tyre_radius_mm` - Contact radius of one tyre
/// * `clear_spacing_mm` - Clear gap between the two tyre footprints
#[inline]
pub fn dual_tyre_radius(tyre_radius_mm: f64, clear_spacing_mm: f64) -> f64 {
    if tyre_radius_mm <= 0.0 {
        return 0.0;
    }
    let r = tyre_radius_mm;
    (r * r + 2.0 * clear_spacing_mm.max(0.0) * r / PI).sqrt()
}

/// Contact radius for a load at a free edge or corner.
///
/// Only half of the footprint is bearing on the slab side of the joint, so
/// the radius of the equivalent semicircle is √2 times the interior radius.
#[inline]
pub fn edge_contact_radius(interior_radius_mm: f64) -> f64 {
    interior_radius_mm.max(0.0) * SQRT_2
}

/// Equivalent contact radius `b` used inside the stress equations.
///
/// # Formula (Westergaard)
/// ```text
/// b = a                          for a ≥ 1.72h
/// b = √(1.6a² + h²) − 0.675h     for a < 1.72h
/// ```
///
/// # Example
/// ```rust
/// use slab_core::equations::slab::equivalent_contact_radius;
///
/// // Small plate on a thick slab is enlarged
/// let b = equivalent_contact_radius(28.2, 150.0);
/// assert!((b - 52.9).abs() < 0.1);
///
/// // Large contact areas pass through unchanged
/// assert_eq!(equivalent_contact_radius(300.0, 150.0), 300.0);
/// ```
#[inline]
pub fn equivalent_contact_radius(a_mm: f64, h_mm: f64) -> f64 {
    if a_mm <= 0.0 || h_mm <= 0.0 {
        return 0.0;
    }
    if a_mm >= EQUIVALENT_RADIUS_LIMIT * h_mm {
        a_mm
    } else {
        (1.6 * a_mm * a_mm + h_mm * h_mm).sqrt() - 0.675 * h_mm
    }
}

// =============================================================================
// LOAD POSITION STRESSES
// =============================================================================

/// Flexural stress under a load remote from any edge.
///
/// # Formula (Westergaard interior)
/// ```text
/// σi = 0.275·(1 + μ)·(P/h²)·[4·log10(ℓ/b) + 1.069]
/// ```
///
/// # Arguments
/// * `p_n` - Load on the contact area (N)
/// * `h_mm` - Slab thickness (mm)
/// * `l_mm` - Radius of relative stiffness (mm)
/// * `b_mm` - Equivalent contact radius (mm)
/// * `mu` - Poisson's ratio
///
/// # Returns
/// Stress in MPa
#[inline]
pub fn interior_stress(p_n: f64, h_mm: f64, l_mm: f64, b_mm: f64, mu: f64) -> f64 {
    if h_mm <= 0.0 || l_mm <= 0.0 || b_mm <= 0.0 {
        return 0.0;
    }
    let bracket = 4.0 * (l_mm / b_mm).log10() + INTERIOR_LOG_CONSTANT;
    let sigma = INTERIOR_COEFFICIENT * (1.0 + mu) * p_n / (h_mm * h_mm) * bracket;
    sigma.max(0.0)
}

/// Flexural stress under a load at a free edge (no load transfer).
///
/// # Formula (Westergaard edge)
/// ```text
/// σe = 0.529·(1 + 0.54μ)·(P/h²)·[4·log10(ℓ/b) + 0.359]
/// ```
///
/// Apply [`EDGE_LOAD_TRANSFER_FACTOR`] separately when the joint is dowelled
/// or tied.
#[inline]
pub fn edge_stress(p_n: f64, h_mm: f64, l_mm: f64, b_mm: f64, mu: f64) -> f64 {
    if h_mm <= 0.0 || l_mm <= 0.0 || b_mm <= 0.0 {
        return 0.0;
    }
    let bracket = 4.0 * (l_mm / b_mm).log10() + EDGE_LOG_CONSTANT;
    let sigma = EDGE_COEFFICIENT * (1.0 + 0.54 * mu) * p_n / (h_mm * h_mm) * bracket;
    sigma.max(0.0)
}

/// Flexural stress under a load at a free corner (no load transfer).
///
/// # Formula (Westergaard corner)
/// ```text
/// σc = 3·(P/h²)·[1 − (b·√2/ℓ)^0.6]
/// ```
#[inline]
pub fn corner_stress(p_n: f64, h_mm: f64, l_mm: f64, b_mm: f64) -> f64 {
    if h_mm <= 0.0 || l_mm <= 0.0 || b_mm <= 0.0 {
        return 0.0;
    }
    let ratio = b_mm * SQRT_2 / l_mm;
    let sigma = CORNER_COEFFICIENT * p_n / (h_mm * h_mm) * (1.0 - ratio.powf(CORNER_EXPONENT));
    sigma.max(0.0)
}
