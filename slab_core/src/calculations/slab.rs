//! # Ground Slab Thickness Design
//!
//! Sizes an unreinforced concrete ground slab for racking, point or wheel
//! loads following the CCANZ TM38 method.
//!
//! ## Procedure
//!
//! 1. Ground reading → modulus of subgrade reaction `k` (with sub-base)
//! 2. Concrete strength → elastic modulus `E` and allowable stress
//! 3. Layout → load cases (interior, edge variants, corner)
//! 4. Each case: step thickness until factored stress ≤ allowable
//! 5. Governing case: thickest requirement (any failure governs)
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::slab::{calculate, SlabDesignInput};
//! use slab_core::geometry::ContactFootprint;
//! use slab_core::loads::{JointType, Layout, RackLayout};
//! use slab_core::materials::{ConcreteProperties, GroundInput};
//! use slab_core::settings::SolverSettings;
//!
//! let input = SlabDesignInput {
//!     label: "Warehouse aisle 3".to_string(),
//!     ground: GroundInput::cbr(10.0).with_sub_base(150.0),
//!     concrete: ConcreteProperties::new(32.0),
//!     joint: JointType::Dowel,
//!     layout: Layout::SingleRack(RackLayout {
//!         leg_load_kn: 60.0,
//!         baseplate: ContactFootprint::Square { side_mm: 100.0 },
//!         leg_spacing_mm: 2700.0,
//!         frame_depth_mm: 1100.0,
//!     }),
//!     settings: SolverSettings::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Governing: {} at {} mm", result.governing, result.governing_thickness_mm);
//! assert_eq!(result.cases.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stress::DesignParameters;
use super::thickness::{governing_case, solve, CalculationResult};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::ContactFootprint;
use crate::loads::{JointType, Layout, LoadCase, LoadCaseId, LoadPosition};
use crate::materials::{
    AllowableStress, ConcreteProperties, GroundAssessment, GroundInput, SubgradeModulus,
};
use crate::settings::SolverSettings;

/// Complete input for one slab design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Dock leveller apron",
///   "ground": { "assessment": { "method": "penetrometer", "mm_per_blow": 20.0 } },
///   "concrete": { "fc_mpa": 40.0, "repetitions": "50000" },
///   "joint": "dowel",
///   "layout": {
///     "layout": "wheel_axle",
///     "axle_load_kn": 80.0,
///     "footprint": { "shape": "tyre", "pressure_kpa": 900.0 },
///     "wheel_track_mm": 1000.0
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabDesignInput {
    /// User label for this design (e.g., "Aisle 3 racking")
    pub label: String,

    /// Ground reading and sub-base
    pub ground: GroundInput,

    /// Concrete strength, age and load repetitions
    pub concrete: ConcreteProperties,

    /// Joint detail at slab edges
    #[serde(default)]
    pub joint: JointType,

    /// Loading layout
    pub layout: Layout,

    /// Search range and analysis constants
    #[serde(default)]
    pub settings: SolverSettings,
}

impl SlabDesignInput {
    /// Validate all inputs before calculating.
    pub fn validate(&self) -> CalcResult<()> {
        self.ground.validate()?;
        self.concrete.validate()?;
        self.layout.validate()?;
        self.settings.validate()?;
        for case in self.layout.load_cases() {
            case.validate()?;
        }
        Ok(())
    }
}

/// Parameters derived once per design and shared by every case
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedParameters {
    /// Subgrade modulus and its components
    pub subgrade: SubgradeModulus,
    /// Elastic modulus of concrete (MPa)
    pub elastic_modulus_mpa: f64,
    /// Allowable stress and its components
    pub allowable: AllowableStress,
    /// Joint detail used for edge and corner reductions
    pub joint: JointType,
}

impl DerivedParameters {
    /// Values handed to the thickness solver
    pub fn design_parameters(&self) -> DesignParameters {
        DesignParameters {
            subgrade_k_mn_m3: self.subgrade.design_k_mn_m3,
            elastic_modulus_mpa: self.elastic_modulus_mpa,
            allowable_stress_mpa: self.allowable.allowable_mpa,
            joint: self.joint,
        }
    }
}

/// Design result for all load cases of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabDesignResult {
    /// Label from the input
    pub label: String,
    /// Layout type
    pub layout: String,
    /// Subgrade, concrete and joint parameters used
    pub parameters: DerivedParameters,
    /// One result per load case, in layout order
    pub cases: Vec<CalculationResult>,
    /// Governing load case
    pub governing: LoadCaseId,
    /// Required thickness of the governing case (mm)
    pub governing_thickness_mm: u32,
    /// Equations used, in first-use order
    pub equations: Vec<Equation>,
}

impl SlabDesignResult {
    /// True when every case found an adequate thickness
    pub fn passes(&self) -> bool {
        self.cases.iter().all(|c| c.adequate)
    }

    /// Result for a particular case
    pub fn case(&self, id: LoadCaseId) -> Option<&CalculationResult> {
        self.cases.iter().find(|c| c.case == id)
    }

    /// Result of the governing case
    pub fn governing_result(&self) -> Option<&CalculationResult> {
        self.case(self.governing)
    }
}

/// Design the slab for every load case of the layout.
///
/// Design failures are reported per case (`adequate = false`); an `Err` is
/// returned only for invalid input.
pub fn calculate(input: &SlabDesignInput) -> CalcResult<SlabDesignResult> {
    input.validate()?;

    let mut tracker = EquationTracker::new();

    let subgrade = input.ground.modulus();
    record_ground(&mut tracker, &input.ground, &subgrade);

    let elastic_modulus_mpa = input.concrete.elastic_modulus_mpa();
    let allowable = input.concrete.allowable_stress();
    tracker.record(Equation::ElasticModulus, "Concrete");
    tracker.record(Equation::ModulusOfRupture, "Concrete");
    tracker.record(Equation::AllowableStress, "Concrete");

    let parameters = DerivedParameters {
        subgrade,
        elastic_modulus_mpa,
        allowable,
        joint: input.joint,
    };
    let design = parameters.design_parameters();

    debug!(
        label = %input.label,
        layout = input.layout.name(),
        k = subgrade.design_k_mn_m3,
        e = elastic_modulus_mpa,
        allowable = allowable.allowable_mpa,
        "derived design parameters"
    );

    record_footprint(&mut tracker, &input.layout.footprint());

    let cases = input.layout.load_cases();
    let results: Vec<CalculationResult> = cases
        .iter()
        .map(|case| {
            record_case(&mut tracker, case, input.joint);
            solve(case, &design, &input.settings)
        })
        .collect();

    let governing = governing_case(&results).ok_or_else(|| {
        CalcError::calculation_failed("Slab thickness", "Layout produced no load cases")
    })?;
    let (governing_id, governing_thickness_mm) = (governing.case, governing.thickness_mm);

    debug!(
        label = %input.label,
        governing = %governing_id,
        thickness_mm = governing_thickness_mm,
        adequate = governing.adequate,
        "slab design complete"
    );

    Ok(SlabDesignResult {
        label: input.label.clone(),
        layout: input.layout.name().to_string(),
        parameters,
        cases: results,
        governing: governing_id,
        governing_thickness_mm,
        equations: tracker.unique_equations(),
    })
}

fn record_ground(tracker: &mut EquationTracker, ground: &GroundInput, subgrade: &SubgradeModulus) {
    if matches!(ground.assessment, GroundAssessment::Penetrometer { .. }) {
        tracker.record(Equation::PenetrometerToCbr, "Ground");
    }
    tracker.record(Equation::SubgradeModulusFromCbr, "Ground");
    if subgrade.sub_base_factor > 1.0 {
        tracker.record(Equation::SubBaseEnhancement, "Sub-base");
    }
}

fn record_footprint(tracker: &mut EquationTracker, footprint: &ContactFootprint) {
    match footprint {
        ContactFootprint::Circular { .. } => {}
        ContactFootprint::Square { .. } | ContactFootprint::Rectangular { .. } => {
            tracker.record(Equation::AreaEquivalentRadius, footprint.describe());
        }
        ContactFootprint::Tyre { .. } => {
            tracker.record(Equation::TyreContactRadius, footprint.describe());
        }
        ContactFootprint::DualTyre { .. } => {
            tracker.record(Equation::TyreContactRadius, footprint.describe());
            tracker.record(Equation::DualTyreContactRadius, footprint.describe());
        }
    }
}

fn record_case(tracker: &mut EquationTracker, case: &LoadCase, joint: JointType) {
    let context = case.id.display_name();
    let position = case.position();

    if position != LoadPosition::Interior {
        tracker.record(Equation::EdgeContactRadius, context);
    }
    tracker.record(Equation::EquivalentContactRadius, context);
    tracker.record(Equation::RadiusOfRelativeStiffness, context);

    let stress = match position {
        LoadPosition::Interior => Equation::InteriorStress,
        LoadPosition::Edge => Equation::EdgeStress,
        LoadPosition::Corner => Equation::CornerStress,
    };
    tracker.record(stress, context);
    if position != LoadPosition::Interior && joint.transfers_load() {
        tracker.record(Equation::JointLoadTransfer, context);
    }

    if !case.neighbours.is_empty() {
        tracker.record(Equation::InfluenceSuperposition, context);
    }
    tracker.record(Equation::FactoredStress, context);
    tracker.record(Equation::ThicknessCheck, context);
}
