//! # Stress Engine
//!
//! Evaluates the factored flexural stress for one load case at one trial
//! thickness:
//!
//! ```text
//! σ_factored = load_factor · ( σ_primary + Σ σ_neighbour · f(d/ℓ) )
//! ```
//!
//! where `σ_primary` is the Westergaard stress for the case's position,
//! `σ_neighbour` is each neighbour's own baseline stress and `f` is the
//! influence fraction from [`influence`](super::influence).
//!
//! Neighbours carry the same load as the primary point.

use serde::{Deserialize, Serialize};

use super::influence::{influence, InfluenceCurve};
use crate::equations::slab::{
    corner_stress, edge_stress, equivalent_contact_radius, interior_stress,
    radius_of_relative_stiffness, CORNER_LOAD_TRANSFER_FACTOR, EDGE_LOAD_TRANSFER_FACTOR,
};
use crate::geometry::ContactRadii;
use crate::loads::{JointType, LoadCase, LoadPosition};
use crate::settings::SolverSettings;
use crate::units::{KiloNewtons, Newtons};

/// Material and support parameters shared by every load case of a design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    /// Design modulus of subgrade reaction (MN/m³)
    pub subgrade_k_mn_m3: f64,
    /// Elastic modulus of concrete (MPa)
    pub elastic_modulus_mpa: f64,
    /// Allowable flexural stress (MPa)
    pub allowable_stress_mpa: f64,
    /// Joint detail at edges and corners
    pub joint: JointType,
}

impl DesignParameters {
    /// False when k or E cannot produce a radius of relative stiffness
    pub fn is_valid(&self) -> bool {
        self.subgrade_k_mn_m3.is_finite()
            && self.subgrade_k_mn_m3 > 0.0
            && self.elastic_modulus_mpa.is_finite()
            && self.elastic_modulus_mpa > 0.0
    }

    /// Multiplier on the primary formula for the joint detail at this position
    pub fn joint_factor(&self, position: LoadPosition) -> f64 {
        match (position, self.joint.transfers_load()) {
            (LoadPosition::Edge, true) => EDGE_LOAD_TRANSFER_FACTOR,
            (LoadPosition::Corner, true) => CORNER_LOAD_TRANSFER_FACTOR,
            _ => 1.0,
        }
    }
}

/// Stress components at one trial thickness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressBreakdown {
    /// Trial thickness (mm)
    pub thickness_mm: f64,
    /// Radius of relative stiffness ℓ (mm)
    pub l_mm: f64,
    /// Equivalent contact radius b of the primary load (mm)
    pub b_mm: f64,
    /// Unfactored stress from the primary load (MPa)
    pub primary_mpa: f64,
    /// Unfactored stress added by neighbours (MPa, may be negative)
    pub adjacent_mpa: f64,
    /// Factored combined stress (MPa)
    pub factored_mpa: f64,
}

/// Stress evaluator for a fixed set of design parameters and settings.
#[derive(Debug, Clone, Copy)]
pub struct StressEngine {
    params: DesignParameters,
    settings: SolverSettings,
}

impl StressEngine {
    pub fn new(params: DesignParameters, settings: SolverSettings) -> Self {
        StressEngine { params, settings }
    }

    pub fn params(&self) -> &DesignParameters {
        &self.params
    }

    /// ℓ at thickness `h_mm`
    pub fn radius_of_relative_stiffness(&self, h_mm: f64) -> f64 {
        radius_of_relative_stiffness(
            self.params.elastic_modulus_mpa,
            h_mm,
            self.params.subgrade_k_mn_m3,
            self.settings.poisson_ratio,
        )
    }

    /// Equivalent contact radius for a load at `position`
    pub fn contact_radius(&self, position: LoadPosition, radii: ContactRadii, h_mm: f64) -> f64 {
        let a = match position {
            LoadPosition::Interior => radii.interior_mm,
            LoadPosition::Edge | LoadPosition::Corner => radii.edge_mm,
        };
        equivalent_contact_radius(a, h_mm)
    }

    /// Unfactored stress of a single load at `position`, joint reduction included.
    pub fn baseline_stress(
        &self,
        position: LoadPosition,
        load: Newtons,
        radii: ContactRadii,
        h_mm: f64,
        l_mm: f64,
    ) -> f64 {
        let mu = self.settings.poisson_ratio;
        let b = self.contact_radius(position, radii, h_mm);
        let sigma = match position {
            LoadPosition::Interior => interior_stress(load.0, h_mm, l_mm, b, mu),
            LoadPosition::Edge => edge_stress(load.0, h_mm, l_mm, b, mu),
            LoadPosition::Corner => corner_stress(load.0, h_mm, l_mm, b),
        };
        sigma * self.params.joint_factor(position)
    }

    /// Stress added at the primary load by all of its neighbours.
    pub fn neighbour_contribution(
        &self,
        case: &LoadCase,
        load: Newtons,
        radii: ContactRadii,
        h_mm: f64,
        l_mm: f64,
    ) -> f64 {
        if l_mm <= 0.0 {
            return 0.0;
        }
        let primary = case.position();
        case.neighbours
            .iter()
            .map(|n| {
                let own = self.baseline_stress(n.position, load, radii, h_mm, l_mm);
                let curve = InfluenceCurve::select(primary, n.direction);
                own * influence(n.distance_mm / l_mm, curve)
            })
            .sum()
    }

    /// Full stress evaluation of `case` at thickness `h_mm`.
    pub fn evaluate(&self, case: &LoadCase, radii: ContactRadii, h_mm: f64) -> StressBreakdown {
        let load: Newtons = KiloNewtons(case.load_kn).into();
        let l_mm = self.radius_of_relative_stiffness(h_mm);
        let position = case.position();

        let primary_mpa = self.baseline_stress(position, load, radii, h_mm, l_mm);
        let adjacent_mpa = self.neighbour_contribution(case, load, radii, h_mm, l_mm);
        let factored_mpa = ((primary_mpa + adjacent_mpa) * self.settings.load_factor).max(0.0);

        StressBreakdown {
            thickness_mm: h_mm,
            l_mm,
            b_mm: self.contact_radius(position, radii, h_mm),
            primary_mpa,
            adjacent_mpa,
            factored_mpa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ContactFootprint;
    use crate::loads::{AdjacentLoad, LoadCaseId};

    fn params(joint: JointType) -> DesignParameters {
        DesignParameters {
            subgrade_k_mn_m3: 54.0,
            elastic_modulus_mpa: 26_587.0,
            allowable_stress_mpa: 4.49,
            joint,
        }
    }

    fn engine(joint: JointType) -> StressEngine {
        StressEngine::new(params(joint), SolverSettings::default())
    }

    fn plate() -> ContactFootprint {
        ContactFootprint::Square { side_mm: 50.0 }
    }

    #[test]
    fn test_primary_stress_decreases_with_thickness() {
        let engine = engine(JointType::NoTransfer);
        for id in [LoadCaseId::Interior, LoadCaseId::Edge, LoadCaseId::Corner] {
            let case = LoadCase::new(id, 60.0, plate());
            let radii = plate().radii(KiloNewtons(60.0));
            let mut previous = f64::INFINITY;
            for h in (100..=500).step_by(25) {
                let s = engine.evaluate(&case, radii, h as f64).factored_mpa;
                assert!(s > 0.0);
                assert!(s < previous, "{} not decreasing at h = {}", id, h);
                previous = s;
            }
        }
    }

    #[test]
    fn test_load_factor_applied() {
        let engine = engine(JointType::NoTransfer);
        let case = LoadCase::new(LoadCaseId::Interior, 60.0, plate());
        let s = engine.evaluate(&case, plate().radii(KiloNewtons(60.0)), 150.0);
        assert!((s.factored_mpa - 1.5 * s.primary_mpa).abs() < 1e-12);
        assert_eq!(s.adjacent_mpa, 0.0);
    }

    #[test]
    fn test_joint_reduction() {
        let free = engine(JointType::NoTransfer);
        let dowel = engine(JointType::Dowel);
        let radii = plate().radii(KiloNewtons(60.0));
        let p = Newtons(60_000.0);
        let l = free.radius_of_relative_stiffness(150.0);

        let edge_ratio = dowel.baseline_stress(LoadPosition::Edge, p, radii, 150.0, l)
            / free.baseline_stress(LoadPosition::Edge, p, radii, 150.0, l);
        assert!((edge_ratio - 0.85).abs() < 1e-12);

        let corner_ratio = dowel.baseline_stress(LoadPosition::Corner, p, radii, 150.0, l)
            / free.baseline_stress(LoadPosition::Corner, p, radii, 150.0, l);
        assert!((corner_ratio - 0.70).abs() < 1e-12);

        let interior_ratio = dowel.baseline_stress(LoadPosition::Interior, p, radii, 150.0, l)
            / free.baseline_stress(LoadPosition::Interior, p, radii, 150.0, l);
        assert!((interior_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_close_neighbour_adds_stress() {
        let engine = engine(JointType::NoTransfer);
        let radii = plate().radii(KiloNewtons(60.0));
        let alone = LoadCase::new(LoadCaseId::Interior, 60.0, plate());
        let paired = alone.clone().with_neighbour(AdjacentLoad::interior_tangential(300.0));

        let s_alone = engine.evaluate(&alone, radii, 150.0);
        let s_paired = engine.evaluate(&paired, radii, 150.0);
        assert!(s_paired.adjacent_mpa > 0.0);
        assert!(s_paired.factored_mpa > s_alone.factored_mpa);
    }

    #[test]
    fn test_layout_stress_decreases_with_thickness() {
        use crate::loads::{
            BackToBackRackLayout, Layout, PointLoadLayout, RackLayout, WheelAxleLayout,
        };

        let baseplate = ContactFootprint::Square { side_mm: 100.0 };
        let layouts = [
            Layout::PointLoad(PointLoadLayout { load_kn: 60.0, baseplate }),
            Layout::SingleRack(RackLayout {
                leg_load_kn: 60.0,
                baseplate,
                leg_spacing_mm: 2700.0,
                frame_depth_mm: 1100.0,
            }),
            Layout::BackToBackRack(BackToBackRackLayout {
                leg_load_kn: 60.0,
                baseplate,
                leg_spacing_mm: 2700.0,
                frame_depth_mm: 1100.0,
                back_to_back_gap_mm: 300.0,
            }),
            Layout::WheelAxle(WheelAxleLayout {
                axle_load_kn: 80.0,
                footprint: ContactFootprint::Tyre { pressure_kpa: 700.0 },
                wheel_track_mm: 900.0,
            }),
        ];

        for joint in [JointType::NoTransfer, JointType::Dowel] {
            let engine = engine(joint);
            for layout in &layouts {
                for case in layout.load_cases() {
                    let radii = case.footprint.radii(KiloNewtons(case.load_kn));
                    let mut previous = f64::INFINITY;
                    for h in (100..=500).step_by(25) {
                        let s = engine.evaluate(&case, radii, h as f64).factored_mpa;
                        assert!(
                            s < previous,
                            "{} / {} not decreasing at h = {}",
                            layout.name(),
                            case.id,
                            h
                        );
                        previous = s;
                    }
                }
            }
        }
    }

    #[test]
    fn test_neighbour_superposition_matches_hand_sum() {
        let engine = engine(JointType::NoTransfer);
        let radii = plate().radii(KiloNewtons(60.0));
        let p = Newtons(60_000.0);
        let h = 150.0;
        let l = engine.radius_of_relative_stiffness(h);

        let case = LoadCase::new(LoadCaseId::EdgeLong, 60.0, plate()).with_neighbours([
            AdjacentLoad::edge_radial(900.0),
            AdjacentLoad::interior_tangential(500.0),
        ]);

        let expected = engine.baseline_stress(LoadPosition::Edge, p, radii, h, l)
            * influence(900.0 / l, InfluenceCurve::EdgeRadial)
            + engine.baseline_stress(LoadPosition::Interior, p, radii, h, l)
                * influence(500.0 / l, InfluenceCurve::InteriorTangential);

        let s = engine.evaluate(&case, radii, h);
        assert!(expected > 0.0);
        assert!((s.adjacent_mpa - expected).abs() < 1e-12);
        assert!((s.factored_mpa - 1.5 * (s.primary_mpa + expected)).abs() < 1e-12);
    }

    #[test]
    fn test_distant_neighbour_has_no_effect() {
        let engine = engine(JointType::NoTransfer);
        let radii = plate().radii(KiloNewtons(60.0));
        let case = LoadCase::new(LoadCaseId::Corner, 60.0, plate())
            .with_neighbour(AdjacentLoad::edge_radial(50_000.0));
        let s = engine.evaluate(&case, radii, 150.0);
        assert_eq!(s.adjacent_mpa, 0.0);
    }

    #[test]
    fn test_invalid_parameters_give_zero_stress() {
        let mut p = params(JointType::NoTransfer);
        p.subgrade_k_mn_m3 = 0.0;
        assert!(!p.is_valid());
        let engine = StressEngine::new(p, SolverSettings::default());
        let case = LoadCase::new(LoadCaseId::Interior, 60.0, plate())
            .with_neighbour(AdjacentLoad::interior_radial(1000.0));
        let s = engine.evaluate(&case, plate().radii(KiloNewtons(60.0)), 150.0);
        assert_eq!(s.l_mm, 0.0);
        assert_eq!(s.factored_mpa, 0.0);
    }
}
