//! # Thickness Solver
//!
//! Finds the minimum slab thickness at which the factored stress of a load
//! case does not exceed the allowable stress, by stepping through the trial
//! range in [`SolverSettings`].
//!
//! A search that reaches the ceiling without success is reported as an
//! inadequate [`CalculationResult`], not as an error, so that every case of a
//! layout is always reported.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::stress::{DesignParameters, StressBreakdown, StressEngine};
use crate::loads::{LoadCase, LoadCaseId};
use crate::settings::SolverSettings;
use crate::units::KiloNewtons;

/// Outcome of the thickness search for one load case.
///
/// ## JSON Example
///
/// ```json
/// {
///   "case": "corner",
///   "thickness_mm": 212,
///   "stress_mpa": 4.48,
///   "allowable_mpa": 4.49,
///   "adequate": true,
///   "iterations": 88,
///   "radius_of_relative_stiffness_mm": 789.3,
///   "contact_radius_mm": 75.1,
///   "primary_stress_mpa": 2.87,
///   "adjacent_stress_mpa": 0.12
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Load case solved
    pub case: LoadCaseId,
    /// Required thickness, or the last trial thickness when inadequate (mm)
    pub thickness_mm: u32,
    /// Factored stress at that thickness (MPa)
    pub stress_mpa: f64,
    /// Allowable stress (MPa)
    pub allowable_mpa: f64,
    /// True when stress ≤ allowable within the search range
    pub adequate: bool,
    /// Number of trial thicknesses evaluated
    pub iterations: u32,
    /// ℓ at the reported thickness (mm)
    pub radius_of_relative_stiffness_mm: f64,
    /// Equivalent contact radius b at the reported thickness (mm)
    pub contact_radius_mm: f64,
    /// Unfactored stress from the primary load (MPa)
    pub primary_stress_mpa: f64,
    /// Unfactored stress from neighbours (MPa)
    pub adjacent_stress_mpa: f64,
}

impl CalculationResult {
    fn from_breakdown(
        case: LoadCaseId,
        thickness_mm: u32,
        stress: &StressBreakdown,
        allowable_mpa: f64,
        adequate: bool,
        iterations: u32,
    ) -> Self {
        CalculationResult {
            case,
            thickness_mm,
            stress_mpa: stress.factored_mpa,
            allowable_mpa,
            adequate,
            iterations,
            radius_of_relative_stiffness_mm: stress.l_mm,
            contact_radius_mm: stress.b_mm,
            primary_stress_mpa: stress.primary_mpa,
            adjacent_stress_mpa: stress.adjacent_mpa,
        }
    }

    /// Factored stress ÷ allowable (infinite when allowable is zero)
    pub fn utilisation(&self) -> f64 {
        if self.allowable_mpa > 0.0 {
            self.stress_mpa / self.allowable_mpa
        } else {
            f64::INFINITY
        }
    }
}

/// Search for the minimum adequate thickness of one load case.
///
/// # Example
/// ```rust
/// use slab_core::calculations::stress::DesignParameters;
/// use slab_core::calculations::thickness::solve;
/// use slab_core::geometry::ContactFootprint;
/// use slab_core::loads::{JointType, LoadCase, LoadCaseId};
/// use slab_core::settings::SolverSettings;
///
/// let params = DesignParameters {
///     subgrade_k_mn_m3: 54.0,
///     elastic_modulus_mpa: 26_587.0,
///     allowable_stress_mpa: 4.49,
///     joint: JointType::NoTransfer,
/// };
/// let plate = ContactFootprint::Square { side_mm: 50.0 };
/// let case = LoadCase::new(LoadCaseId::Interior, 60.0, plate);
///
/// let result = solve(&case, &params, &SolverSettings::default());
/// assert!(result.adequate);
/// assert!(result.stress_mpa <= result.allowable_mpa);
/// ```
pub fn solve(
    case: &LoadCase,
    params: &DesignParameters,
    settings: &SolverSettings,
) -> CalculationResult {
    let allowable = params.allowable_stress_mpa;
    let engine = StressEngine::new(*params, *settings);
    let radii = case.footprint.radii(KiloNewtons(case.load_kn));

    let degenerate_case =
        case.validate().is_err() || radii.interior_mm.is_nan() || radii.interior_mm <= 0.0;
    if !params.is_valid() || degenerate_case {
        warn!(
            case = %case.id,
            k = params.subgrade_k_mn_m3,
            e = params.elastic_modulus_mpa,
            contact_radius_mm = radii.interior_mm,
            "invalid design parameters or load case, no thickness can be found"
        );
        let floor = settings.min_thickness_mm;
        let stress = engine.evaluate(case, radii, f64::from(floor));
        return CalculationResult::from_breakdown(case.id, floor, &stress, allowable, false, 0);
    }

    let step = settings.step_mm.max(1);
    let mut h = settings.min_thickness_mm;
    let mut iterations = 0u32;
    let mut last: Option<(u32, StressBreakdown)> = None;

    while h <= settings.max_thickness_mm {
        iterations += 1;
        let stress = engine.evaluate(case, radii, f64::from(h));
        trace!(case = %case.id, h, stress = stress.factored_mpa, allowable);

        if stress.factored_mpa <= allowable {
            debug!(
                case = %case.id,
                thickness_mm = h,
                stress = stress.factored_mpa,
                allowable,
                iterations,
                "load case solved"
            );
            return CalculationResult::from_breakdown(
                case.id, h, &stress, allowable, true, iterations,
            );
        }

        last = Some((h, stress));
        h = match h.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    let (h, stress) = match last {
        Some(found) => found,
        // Empty range: report the floor
        None => (
            settings.min_thickness_mm,
            engine.evaluate(case, radii, f64::from(settings.min_thickness_mm)),
        ),
    };
    warn!(
        case = %case.id,
        thickness_mm = h,
        stress = stress.factored_mpa,
        allowable,
        "thickness search exhausted without an adequate slab"
    );
    CalculationResult::from_breakdown(case.id, h, &stress, allowable, false, iterations)
}

/// Select the governing case.
///
/// Any inadequate case governs; otherwise the greatest thickness, with ties
/// broken corner > edge > interior.
pub fn governing_case(results: &[CalculationResult]) -> Option<&CalculationResult> {
    results
        .iter()
        .max_by_key(|r| (!r.adequate, r.thickness_mm, r.case.position().priority()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ContactFootprint;
    use crate::loads::{AdjacentLoad, JointType};

    fn params() -> DesignParameters {
        DesignParameters {
            subgrade_k_mn_m3: 54.0,
            elastic_modulus_mpa: 26_587.0,
            allowable_stress_mpa: 4.49,
            joint: JointType::NoTransfer,
        }
    }

    fn case(id: LoadCaseId) -> LoadCase {
        LoadCase::new(id, 60.0, ContactFootprint::Square { side_mm: 50.0 })
    }

    fn result(case: LoadCaseId, thickness_mm: u32, adequate: bool) -> CalculationResult {
        CalculationResult {
            case,
            thickness_mm,
            stress_mpa: 4.0,
            allowable_mpa: 4.49,
            adequate,
            iterations: 1,
            radius_of_relative_stiffness_mm: 600.0,
            contact_radius_mm: 50.0,
            primary_stress_mpa: 2.6,
            adjacent_stress_mpa: 0.0,
        }
    }

    #[test]
    fn test_solves_to_first_adequate_thickness() {
        let settings = SolverSettings::default();
        let r = solve(&case(LoadCaseId::Interior), &params(), &settings);
        assert!(r.adequate);
        assert!(r.thickness_mm >= settings.min_thickness_mm);
        assert!(r.stress_mpa <= r.allowable_mpa);
        assert_eq!(r.iterations, r.thickness_mm - settings.min_thickness_mm + 1);

        // One millimetre thinner must fail, unless the floor already passed
        if r.thickness_mm > settings.min_thickness_mm {
            let engine = StressEngine::new(params(), settings);
            let c = case(LoadCaseId::Interior);
            let radii = c.footprint.radii(KiloNewtons(c.load_kn));
            let thinner = engine.evaluate(&c, radii, f64::from(r.thickness_mm - 1));
            assert!(thinner.factored_mpa > r.allowable_mpa);
        }
    }

    #[test]
    fn test_corner_needs_more_than_interior() {
        let settings = SolverSettings::default();
        let interior = solve(&case(LoadCaseId::Interior), &params(), &settings);
        let corner = solve(&case(LoadCaseId::Corner), &params(), &settings);
        assert!(corner.thickness_mm > interior.thickness_mm);
    }

    #[test]
    fn test_light_load_stops_at_floor() {
        let plate = ContactFootprint::Square { side_mm: 100.0 };
        let light = LoadCase::new(LoadCaseId::Interior, 1.0, plate);
        let r = solve(&light, &params(), &SolverSettings::default());
        assert!(r.adequate);
        assert_eq!(r.thickness_mm, 125);
        assert_eq!(r.iterations, 1);
    }

    #[test]
    fn test_exhaustion_reports_inadequate() {
        let mut p = params();
        p.allowable_stress_mpa = 0.0;
        let settings = SolverSettings::default();
        let r = solve(&case(LoadCaseId::Corner), &p, &settings);
        assert!(!r.adequate);
        assert_eq!(r.thickness_mm, settings.max_thickness_mm);
        assert_eq!(r.iterations, settings.trial_count());
        assert!(r.stress_mpa > 0.0);
    }

    #[test]
    fn test_terminates_with_coarse_step() {
        let settings = SolverSettings {
            step_mm: 300,
            ..SolverSettings::default()
        };
        let mut p = params();
        p.allowable_stress_mpa = 0.0;
        let r = solve(&case(LoadCaseId::Interior), &p, &settings);
        // 125, 425, 725
        assert_eq!(r.iterations, 3);
        assert_eq!(r.thickness_mm, 725);
        assert!(!r.adequate);
    }

    #[test]
    fn test_invalid_parameters_not_adequate() {
        let mut p = params();
        p.subgrade_k_mn_m3 = 0.0;
        let r = solve(&case(LoadCaseId::Interior), &p, &SolverSettings::default());
        assert!(!r.adequate);
        assert_eq!(r.iterations, 0);
    }

    #[test]
    fn test_zero_area_footprint_not_adequate() {
        let settings = SolverSettings::default();
        for footprint in [
            ContactFootprint::Square { side_mm: 0.0 },
            ContactFootprint::Circular { diameter_mm: 0.0 },
            ContactFootprint::Tyre { pressure_kpa: 0.0 },
        ] {
            let c = LoadCase::new(LoadCaseId::Interior, 60.0, footprint);
            let r = solve(&c, &params(), &settings);
            assert!(!r.adequate, "{:?} reported adequate", footprint);
            assert_eq!(r.iterations, 0);
            assert_eq!(r.thickness_mm, settings.min_thickness_mm);
        }
    }

    #[test]
    fn test_zero_load_not_adequate() {
        let c = LoadCase::new(LoadCaseId::Corner, 0.0, ContactFootprint::Square { side_mm: 50.0 });
        let r = solve(&c, &params(), &SolverSettings::default());
        assert!(!r.adequate);
        assert_eq!(r.iterations, 0);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let c = case(LoadCaseId::Edge).with_neighbour(AdjacentLoad::edge_radial(1200.0));
        let settings = SolverSettings::default();
        assert_eq!(solve(&c, &params(), &settings), solve(&c, &params(), &settings));
    }

    #[test]
    fn test_governing_is_thickest() {
        let results = vec![
            result(LoadCaseId::Interior, 150, true),
            result(LoadCaseId::Edge, 175, true),
            result(LoadCaseId::Corner, 200, true),
        ];
        let g = governing_case(&results).unwrap();
        assert_eq!(g.case, LoadCaseId::Corner);
        assert_eq!(g.thickness_mm, 200);
    }

    #[test]
    fn test_governing_tie_prefers_corner_then_edge() {
        let results = vec![
            result(LoadCaseId::Corner, 180, true),
            result(LoadCaseId::Edge, 180, true),
            result(LoadCaseId::Interior, 180, true),
        ];
        assert_eq!(governing_case(&results).unwrap().case, LoadCaseId::Corner);

        let results = vec![
            result(LoadCaseId::EdgeLong, 180, true),
            result(LoadCaseId::Interior, 180, true),
        ];
        assert_eq!(governing_case(&results).unwrap().case, LoadCaseId::EdgeLong);
    }

    #[test]
    fn test_inadequate_case_governs() {
        let results = vec![
            result(LoadCaseId::Interior, 800, false),
            result(LoadCaseId::Corner, 300, true),
        ];
        let g = governing_case(&results).unwrap();
        assert_eq!(g.case, LoadCaseId::Interior);
        assert!(!g.adequate);
    }

    #[test]
    fn test_governing_empty() {
        assert!(governing_case(&[]).is_none());
    }

    #[test]
    fn test_utilisation() {
        let r = result(LoadCaseId::Interior, 150, true);
        assert!((r.utilisation() - 4.0 / 4.49).abs() < 1e-12);
    }
}
