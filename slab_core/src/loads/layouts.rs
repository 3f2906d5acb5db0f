//! Loading layouts
//!
//! Each layout describes one kind of calculator input (a single baseplate,
//! a run of racking, back-to-back racking, or a wheeled axle) and turns it
//! into the list of [`LoadCase`]s to solve. The neighbour lists are plain
//! data; the solver treats every case the same way.
//!
//! ```text
//!   Rack plan (legs ●)            x = leg spacing along the run
//!                                 y = frame depth
//!   ●───────●───────●             z = gap between back-to-back frames
//!   │   y   │       │
//!   ●───────●───────●
//!       x
//! ```

use serde::{Deserialize, Serialize};

use super::{AdjacentLoad, LoadCase, LoadCaseId};
use crate::errors::{require_positive, CalcResult};
use crate::geometry::ContactFootprint;

/// Single isolated point load on a baseplate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoadLayout {
    /// Unfactored load (kN)
    pub load_kn: f64,
    /// Baseplate footprint
    pub baseplate: ContactFootprint,
}

/// Single-sided run of racking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RackLayout {
    /// Unfactored load per leg (kN)
    pub leg_load_kn: f64,
    /// Baseplate footprint
    pub baseplate: ContactFootprint,
    /// Leg spacing along the run, x (mm)
    pub leg_spacing_mm: f64,
    /// Frame depth between front and back legs, y (mm)
    pub frame_depth_mm: f64,
}

/// Two runs of racking placed back to back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackToBackRackLayout {
    /// Unfactored load per leg (kN)
    pub leg_load_kn: f64,
    /// Baseplate footprint
    pub baseplate: ContactFootprint,
    /// Leg spacing along the run, x (mm)
    pub leg_spacing_mm: f64,
    /// Frame depth between front and back legs, y (mm)
    pub frame_depth_mm: f64,
    /// Distance between the back legs of the two frames, z (mm)
    pub back_to_back_gap_mm: f64,
}

/// Axle of a forklift or vehicle; each wheel carries half the axle load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelAxleLayout {
    /// Unfactored axle load (kN)
    pub axle_load_kn: f64,
    /// Wheel contact footprint (tyre, dual tyre or plate)
    pub footprint: ContactFootprint,
    /// Centre-to-centre distance between the wheels on the axle (mm)
    pub wheel_track_mm: f64,
}

/// Loading layout supplied by the caller.
///
/// ## JSON Example
///
/// ```json
/// {
///   "layout": "single_rack",
///   "leg_load_kn": 60.0,
///   "baseplate": { "shape": "square", "side_mm": 100.0 },
///   "leg_spacing_mm": 2700.0,
///   "frame_depth_mm": 1100.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Layout {
    PointLoad(PointLoadLayout),
    SingleRack(RackLayout),
    BackToBackRack(BackToBackRackLayout),
    WheelAxle(WheelAxleLayout),
}

impl Layout {
    /// Layout type as a string
    pub fn name(&self) -> &'static str {
        match self {
            Layout::PointLoad(_) => "Point load",
            Layout::SingleRack(_) => "Single rack",
            Layout::BackToBackRack(_) => "Back-to-back rack",
            Layout::WheelAxle(_) => "Wheel axle",
        }
    }

    /// Contact footprint shared by all cases of this layout
    pub fn footprint(&self) -> ContactFootprint {
        match self {
            Layout::PointLoad(l) => l.baseplate,
            Layout::SingleRack(l) => l.baseplate,
            Layout::BackToBackRack(l) => l.baseplate,
            Layout::WheelAxle(l) => l.footprint,
        }
    }

    /// Validate loads and spacings. Footprints are checked per case.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            Layout::PointLoad(l) => require_positive("load_kn", l.load_kn),
            Layout::SingleRack(l) => {
                require_positive("leg_load_kn", l.leg_load_kn)?;
                require_positive("leg_spacing_mm", l.leg_spacing_mm)?;
                require_positive("frame_depth_mm", l.frame_depth_mm)
            }
            Layout::BackToBackRack(l) => {
                require_positive("leg_load_kn", l.leg_load_kn)?;
                require_positive("leg_spacing_mm", l.leg_spacing_mm)?;
                require_positive("frame_depth_mm", l.frame_depth_mm)?;
                require_positive("back_to_back_gap_mm", l.back_to_back_gap_mm)
            }
            Layout::WheelAxle(l) => {
                require_positive("axle_load_kn", l.axle_load_kn)?;
                require_positive("wheel_track_mm", l.wheel_track_mm)
            }
        }
    }

    /// Build the load cases to solve, in reporting order.
    pub fn load_cases(&self) -> Vec<LoadCase> {
        match self {
            Layout::PointLoad(l) => point_load_cases(l),
            Layout::SingleRack(l) => rack_cases(
                l.leg_load_kn,
                l.baseplate,
                l.leg_spacing_mm,
                l.frame_depth_mm,
                None,
            ),
            Layout::BackToBackRack(l) => rack_cases(
                l.leg_load_kn,
                l.baseplate,
                l.leg_spacing_mm,
                l.frame_depth_mm,
                Some(l.back_to_back_gap_mm),
            ),
            Layout::WheelAxle(l) => wheel_cases(l),
        }
    }
}

fn point_load_cases(layout: &PointLoadLayout) -> Vec<LoadCase> {
    [LoadCaseId::Interior, LoadCaseId::Edge, LoadCaseId::Corner]
        .into_iter()
        .map(|id| LoadCase::new(id, layout.load_kn, layout.baseplate))
        .collect()
}

fn rack_cases(
    leg_load_kn: f64,
    baseplate: ContactFootprint,
    x: f64,
    y: f64,
    back_to_back_gap: Option<f64>,
) -> Vec<LoadCase> {
    // Legs either side along the run, frame partner across the depth
    let mut interior = LoadCase::new(LoadCaseId::Interior, leg_load_kn, baseplate).with_neighbours([
        AdjacentLoad::interior_radial(y),
        AdjacentLoad::interior_tangential(x),
        AdjacentLoad::interior_tangential(x),
    ]);

    // Run parallel to the edge: legs along the edge both sides, frame partner inboard
    let mut edge_long = LoadCase::new(LoadCaseId::EdgeLong, leg_load_kn, baseplate)
        .with_neighbours([
            AdjacentLoad::edge_radial(x),
            AdjacentLoad::edge_radial(x),
            AdjacentLoad::interior_tangential(y),
        ]);

    // Run ends at the edge: frame partner along the edge, next frame inboard
    let mut edge_short = LoadCase::new(LoadCaseId::EdgeShort, leg_load_kn, baseplate)
        .with_neighbours([
            AdjacentLoad::edge_radial(y),
            AdjacentLoad::interior_tangential(x),
        ]);

    let mut corner = LoadCase::new(LoadCaseId::Corner, leg_load_kn, baseplate).with_neighbours([
        AdjacentLoad::edge_radial(x),
        AdjacentLoad::edge_radial(y),
    ]);

    if let Some(z) = back_to_back_gap {
        interior.neighbours.push(AdjacentLoad::interior_radial(z));
        edge_long.neighbours.push(AdjacentLoad::interior_tangential(z));
        edge_short.neighbours.push(AdjacentLoad::edge_radial(z));
        corner.neighbours.push(AdjacentLoad::edge_radial(z));
    }

    vec![interior, edge_long, edge_short, corner]
}

fn wheel_cases(layout: &WheelAxleLayout) -> Vec<LoadCase> {
    let wheel_load_kn = layout.axle_load_kn / 2.0;
    let w = layout.wheel_track_mm;
    let fp = layout.footprint;

    vec![
        LoadCase::new(LoadCaseId::Interior, wheel_load_kn, fp)
            .with_neighbour(AdjacentLoad::interior_radial(w)),
        // Travelling along the edge puts the other wheel inboard
        LoadCase::new(LoadCaseId::EdgeParallel, wheel_load_kn, fp)
            .with_neighbour(AdjacentLoad::interior_tangential(w)),
        // Crossing the joint puts both wheels on the edge
        LoadCase::new(LoadCaseId::EdgePerpendicular, wheel_load_kn, fp)
            .with_neighbour(AdjacentLoad::edge_radial(w)),
        LoadCase::new(LoadCaseId::Corner, wheel_load_kn, fp)
            .with_neighbour(AdjacentLoad::edge_radial(w)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{Direction, LoadPosition};

    fn plate() -> ContactFootprint {
        ContactFootprint::Square { side_mm: 100.0 }
    }

    fn rack() -> RackLayout {
        RackLayout {
            leg_load_kn: 60.0,
            baseplate: plate(),
            leg_spacing_mm: 2700.0,
            frame_depth_mm: 1100.0,
        }
    }

    #[test]
    fn test_point_load_cases() {
        let layout = Layout::PointLoad(PointLoadLayout { load_kn: 60.0, baseplate: plate() });
        let cases = layout.load_cases();
        let ids: Vec<_> = cases.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![LoadCaseId::Interior, LoadCaseId::Edge, LoadCaseId::Corner]);
        assert!(cases.iter().all(|c| c.neighbours.is_empty()));
    }

    #[test]
    fn test_single_rack_cases() {
        let cases = Layout::SingleRack(rack()).load_cases();
        assert_eq!(cases.len(), 4);

        let interior = &cases[0];
        assert_eq!(interior.id, LoadCaseId::Interior);
        assert_eq!(interior.neighbours.len(), 3);
        assert_eq!(interior.neighbours[0].distance_mm, 1100.0);
        assert_eq!(interior.neighbours[0].direction, Direction::Radial);

        let corner = &cases[3];
        assert_eq!(corner.id, LoadCaseId::Corner);
        assert!(corner.neighbours.iter().all(|n| n.position == LoadPosition::Edge));
    }

    #[test]
    fn test_back_to_back_adds_partner() {
        let single = Layout::SingleRack(rack()).load_cases();
        let b2b = Layout::BackToBackRack(BackToBackRackLayout {
            leg_load_kn: 60.0,
            baseplate: plate(),
            leg_spacing_mm: 2700.0,
            frame_depth_mm: 1100.0,
            back_to_back_gap_mm: 300.0,
        })
        .load_cases();

        for (s, b) in single.iter().zip(b2b.iter()) {
            assert_eq!(s.id, b.id);
            assert_eq!(b.neighbours.len(), s.neighbours.len() + 1);
            assert_eq!(b.neighbours.last().map(|n| n.distance_mm), Some(300.0));
        }
    }

    #[test]
    fn test_wheel_load_is_half_axle() {
        let cases = Layout::WheelAxle(WheelAxleLayout {
            axle_load_kn: 80.0,
            footprint: ContactFootprint::Tyre { pressure_kpa: 900.0 },
            wheel_track_mm: 1000.0,
        })
        .load_cases();
        let ids: Vec<_> = cases.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                LoadCaseId::Interior,
                LoadCaseId::EdgeParallel,
                LoadCaseId::EdgePerpendicular,
                LoadCaseId::Corner
            ]
        );
        assert!(cases.iter().all(|c| c.load_kn == 40.0));
    }

    #[test]
    fn test_validation() {
        assert!(Layout::SingleRack(rack()).validate().is_ok());
        let mut bad = rack();
        bad.frame_depth_mm = 0.0;
        assert!(Layout::SingleRack(bad).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let layout = Layout::SingleRack(rack());
        let json = serde_json::to_string(&layout).unwrap();
        assert!(json.contains("\"layout\":\"single_rack\""));
        let roundtrip: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, roundtrip);
    }
}
