//! # Contact Geometry
//!
//! Converts a baseplate or tyre footprint into the contact radii used by the
//! stress equations.
//!
//! ```text
//!   Circular      a = D/2
//!   Square        a = √(s²/π)
//!   Rectangular   a = √(w·l/π)
//!   Tyre          a = √((P/p)/π)            footprint from load ÷ pressure
//!   Dual tyre     a = √(r² + 2·tc·r/π)      r = single tyre radius at P/2
//!
//!   Edge/corner   a_e = √2 · a
//! ```
//!
//! The thickness-dependent adjustment from `a` to `b` lives in
//! [`equivalent_contact_radius`](crate::equations::slab::equivalent_contact_radius)
//! because it has to be re-evaluated at every trial thickness.

use serde::{Deserialize, Serialize};

use crate::equations::slab::{area_equivalent_radius, dual_tyre_radius, edge_contact_radius};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{KiloNewtons, KiloPascals, MegaPascals, Newtons};

/// Shape and size of the area through which a load reaches the slab.
///
/// ## JSON Examples
///
/// ```json
/// { "shape": "square", "side_mm": 100.0 }
/// { "shape": "tyre", "pressure_kpa": 900.0 }
/// { "shape": "dual_tyre", "pressure_kpa": 700.0, "clear_spacing_mm": 60.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ContactFootprint {
    /// Circular plate or pad
    Circular { diameter_mm: f64 },
    /// Square baseplate
    Square { side_mm: f64 },
    /// Rectangular baseplate
    Rectangular { width_mm: f64, length_mm: f64 },
    /// Single tyre; contact area is load ÷ inflation pressure
    Tyre { pressure_kpa: f64 },
    /// Pair of tyres on one wheel position, sharing the load equally
    DualTyre { pressure_kpa: f64, clear_spacing_mm: f64 },
}

impl ContactFootprint {
    /// Validate that all dimensions and pressures are positive.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            ContactFootprint::Circular { diameter_mm } => {
                require_positive("diameter_mm", diameter_mm)
            }
            ContactFootprint::Square { side_mm } => require_positive("side_mm", side_mm),
            ContactFootprint::Rectangular { width_mm, length_mm } => {
                require_positive("width_mm", width_mm)?;
                require_positive("length_mm", length_mm)
            }
            ContactFootprint::Tyre { pressure_kpa } => {
                require_positive("pressure_kpa", pressure_kpa)
            }
            ContactFootprint::DualTyre { pressure_kpa, clear_spacing_mm } => {
                require_positive("pressure_kpa", pressure_kpa)?;
                if !clear_spacing_mm.is_finite() || clear_spacing_mm < 0.0 {
                    return Err(CalcError::invalid_input(
                        "clear_spacing_mm",
                        clear_spacing_mm.to_string(),
                        "Clear spacing cannot be negative",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Interior contact radius `a` (mm) for the given load per contact.
    pub fn contact_radius_mm(&self, load: KiloNewtons) -> f64 {
        match *self {
            ContactFootprint::Circular { diameter_mm } => diameter_mm.max(0.0) / 2.0,
            ContactFootprint::Square { side_mm } => area_equivalent_radius(side_mm * side_mm),
            ContactFootprint::Rectangular { width_mm, length_mm } => {
                area_equivalent_radius(width_mm * length_mm)
            }
            ContactFootprint::Tyre { pressure_kpa } => tyre_radius_mm(load, pressure_kpa),
            ContactFootprint::DualTyre { pressure_kpa, clear_spacing_mm } => {
                let single = tyre_radius_mm(KiloNewtons(load.0 / 2.0), pressure_kpa);
                dual_tyre_radius(single, clear_spacing_mm)
            }
        }
    }

    /// Interior and edge/corner contact radii for the given load.
    pub fn radii(&self, load: KiloNewtons) -> ContactRadii {
        let interior_mm = self.contact_radius_mm(load);
        ContactRadii {
            interior_mm,
            edge_mm: edge_contact_radius(interior_mm),
        }
    }

    /// Short description for reports
    pub fn describe(&self) -> String {
        match *self {
            ContactFootprint::Circular { diameter_mm } => {
                format!("{:.0} mm dia. plate", diameter_mm)
            }
            ContactFootprint::Square { side_mm } => format!("{0:.0} x {0:.0} mm plate", side_mm),
            ContactFootprint::Rectangular { width_mm, length_mm } => {
                format!("{:.0} x {:.0} mm plate", width_mm, length_mm)
            }
            ContactFootprint::Tyre { pressure_kpa } => {
                format!("single tyre @ {:.0} kPa", pressure_kpa)
            }
            ContactFootprint::DualTyre { pressure_kpa, clear_spacing_mm } => {
                format!("dual tyres @ {:.0} kPa, {:.0} mm gap", pressure_kpa, clear_spacing_mm)
            }
        }
    }
}

/// Contact radii for one loaded footprint (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactRadii {
    /// Radius for loads remote from an edge
    pub interior_mm: f64,
    /// Radius for loads at an edge or corner (√2 × interior)
    pub edge_mm: f64,
}

/// Radius of a circular tyre footprint: area = load ÷ pressure.
fn tyre_radius_mm(load: KiloNewtons, pressure_kpa: f64) -> f64 {
    let pressure: MegaPascals = KiloPascals(pressure_kpa).into();
    if pressure.0 <= 0.0 {
        return 0.0;
    }
    let n: Newtons = load.into();
    // N ÷ (N/mm²) = mm²
    area_equivalent_radius(n.0 / pressure.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, SQRT_2};

    #[test]
    fn test_circular_radius() {
        let fp = ContactFootprint::Circular { diameter_mm: 150.0 };
        assert_eq!(fp.contact_radius_mm(KiloNewtons(50.0)), 75.0);
    }

    #[test]
    fn test_square_radius() {
        let fp = ContactFootprint::Square { side_mm: 50.0 };
        assert!((fp.contact_radius_mm(KiloNewtons(60.0)) - 28.21).abs() < 0.01);
    }

    #[test]
    fn test_rectangular_matches_equal_area_square() {
        let rect = ContactFootprint::Rectangular { width_mm: 50.0, length_mm: 200.0 };
        let square = ContactFootprint::Square { side_mm: 100.0 };
        let load = KiloNewtons(10.0);
        assert!((rect.contact_radius_mm(load) - square.contact_radius_mm(load)).abs() < 1e-9);
    }

    #[test]
    fn test_tyre_radius_from_pressure() {
        // 40 kN at 1000 kPa → 40,000 mm² → a = √(40000/π) = 112.8 mm
        let fp = ContactFootprint::Tyre { pressure_kpa: 1000.0 };
        let a = fp.contact_radius_mm(KiloNewtons(40.0));
        assert!((a - (40_000.0 / PI).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_dual_tyre_radius() {
        let fp = ContactFootprint::DualTyre { pressure_kpa: 1000.0, clear_spacing_mm: 100.0 };
        let a = fp.contact_radius_mm(KiloNewtons(40.0));
        let r = (20_000.0 / PI).sqrt();
        let expected = (r * r + 2.0 * 100.0 * r / PI).sqrt();
        assert!((a - expected).abs() < 1e-9);
        // Spreading over two tyres gives a larger radius than one tyre at half load
        assert!(a > r);
    }

    #[test]
    fn test_edge_radius_scale() {
        let radii = ContactFootprint::Square { side_mm: 100.0 }.radii(KiloNewtons(30.0));
        assert!((radii.edge_mm - SQRT_2 * radii.interior_mm).abs() < 1e-9);
    }

    #[test]
    fn test_validation() {
        assert!(ContactFootprint::Square { side_mm: 100.0 }.validate().is_ok());
        assert!(ContactFootprint::Square { side_mm: 0.0 }.validate().is_err());
        assert!(ContactFootprint::Rectangular { width_mm: 100.0, length_mm: -5.0 }
            .validate()
            .is_err());
        assert!(ContactFootprint::DualTyre { pressure_kpa: 700.0, clear_spacing_mm: -1.0 }
            .validate()
            .is_err());
        assert!(ContactFootprint::Tyre { pressure_kpa: 0.0 }.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let fp = ContactFootprint::DualTyre { pressure_kpa: 700.0, clear_spacing_mm: 60.0 };
        let json = serde_json::to_string(&fp).unwrap();
        assert!(json.contains("\"shape\":\"dual_tyre\""));
        let roundtrip: ContactFootprint = serde_json::from_str(&json).unwrap();
        assert_eq!(fp, roundtrip);
    }
}
