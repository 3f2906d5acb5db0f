//! Load cases for slab design
//!
//! A [`LoadCase`] is one position of the primary load on the slab (interior,
//! edge or corner) together with the neighbouring loads whose stress fields
//! add to it.
//!
//! # Overview
//!
//! - [`LoadPosition`] - Interior / edge / corner classification
//! - [`LoadCaseId`] - Named case, including the edge variants of each layout
//! - [`AdjacentLoad`] - A neighbouring load at a given distance
//! - [`JointType`] - Whether the nearby joint transfers load
//! - [`layouts`] - Builders producing the cases for racks, plates and wheels
//!
//! # Example
//!
//! ```
//! use slab_core::geometry::ContactFootprint;
//! use slab_core::loads::{AdjacentLoad, LoadCase, LoadCaseId};
//!
//! let plate = ContactFootprint::Square { side_mm: 100.0 };
//! let case = LoadCase::new(LoadCaseId::Interior, 60.0, plate)
//!     .with_neighbour(AdjacentLoad::interior_radial(1100.0));
//!
//! assert_eq!(case.neighbours.len(), 1);
//! ```

pub mod layouts;

pub use layouts::{BackToBackRackLayout, Layout, PointLoadLayout, RackLayout, WheelAxleLayout};

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::geometry::ContactFootprint;

/// Position class of a load relative to the slab joints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPosition {
    /// Remote from any edge or joint
    Interior,
    /// At a free edge or joint
    Edge,
    /// At the intersection of two edges or joints
    Corner,
}

impl LoadPosition {
    /// Tie-break priority for governing case selection (higher wins)
    pub fn priority(&self) -> u8 {
        match self {
            LoadPosition::Interior => 0,
            LoadPosition::Edge => 1,
            LoadPosition::Corner => 2,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadPosition::Interior => "Interior",
            LoadPosition::Edge => "Edge",
            LoadPosition::Corner => "Corner",
        }
    }
}

/// Direction of measurement from the primary load to a neighbour.
///
/// Radial: the stress of interest acts along the line joining the loads.
/// Tangential: it acts perpendicular to that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Radial,
    Tangential,
}

/// Joint detail at the slab edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JointType {
    /// Dowel bars across the joint
    Dowel,
    /// Tie bars across the joint
    Tied,
    /// Free edge, no load transfer
    #[default]
    #[serde(rename = "none")]
    NoTransfer,
}

impl JointType {
    /// True when the joint shares load with the adjacent panel
    pub fn transfers_load(&self) -> bool {
        matches!(self, JointType::Dowel | JointType::Tied)
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            JointType::Dowel => "Dowelled",
            JointType::Tied => "Tied",
            JointType::NoTransfer => "No load transfer",
        }
    }
}

impl std::fmt::Display for JointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Named load case. Layouts split the edge position into the variants that
/// matter for their geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadCaseId {
    Interior,
    Edge,
    /// Rack run parallel to the edge
    EdgeLong,
    /// Rack run perpendicular to the edge
    EdgeShort,
    /// Travel parallel to the edge
    EdgeParallel,
    /// Travel perpendicular to the edge
    EdgePerpendicular,
    Corner,
}

impl LoadCaseId {
    /// Position class used to pick the stress equation
    pub fn position(&self) -> LoadPosition {
        match self {
            LoadCaseId::Interior => LoadPosition::Interior,
            LoadCaseId::Edge
            | LoadCaseId::EdgeLong
            | LoadCaseId::EdgeShort
            | LoadCaseId::EdgeParallel
            | LoadCaseId::EdgePerpendicular => LoadPosition::Edge,
            LoadCaseId::Corner => LoadPosition::Corner,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadCaseId::Interior => "Interior",
            LoadCaseId::Edge => "Edge",
            LoadCaseId::EdgeLong => "Edge (long)",
            LoadCaseId::EdgeShort => "Edge (short)",
            LoadCaseId::EdgeParallel => "Edge (parallel)",
            LoadCaseId::EdgePerpendicular => "Edge (perpendicular)",
            LoadCaseId::Corner => "Corner",
        }
    }
}

impl std::fmt::Display for LoadCaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A neighbouring load whose stress field adds to the primary load.
///
/// The neighbour carries the same load as the primary point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjacentLoad {
    /// Centre-to-centre distance from the primary load (mm)
    pub distance_mm: f64,
    /// Position class of the neighbour itself (interior or edge)
    pub position: LoadPosition,
    /// Direction of measurement relative to the line joining the loads
    pub direction: Direction,
}

impl AdjacentLoad {
    pub fn new(distance_mm: f64, position: LoadPosition, direction: Direction) -> Self {
        AdjacentLoad {
            distance_mm,
            position,
            direction,
        }
    }

    /// Interior-type neighbour measured radially
    pub fn interior_radial(distance_mm: f64) -> Self {
        Self::new(distance_mm, LoadPosition::Interior, Direction::Radial)
    }

    /// Interior-type neighbour measured tangentially
    pub fn interior_tangential(distance_mm: f64) -> Self {
        Self::new(distance_mm, LoadPosition::Interior, Direction::Tangential)
    }

    /// Edge-type neighbour measured radially (along the edge)
    pub fn edge_radial(distance_mm: f64) -> Self {
        Self::new(distance_mm, LoadPosition::Edge, Direction::Radial)
    }
}

/// One loading case handed to the thickness solver.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "edge_long",
///   "load_kn": 60.0,
///   "footprint": { "shape": "square", "side_mm": 100.0 },
///   "neighbours": [
///     { "distance_mm": 2700.0, "position": "edge", "direction": "radial" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Case name
    pub id: LoadCaseId,
    /// Unfactored load per footing or wheel (kN)
    pub load_kn: f64,
    /// Contact footprint of the load
    pub footprint: ContactFootprint,
    /// Neighbouring loads to superpose
    #[serde(default)]
    pub neighbours: Vec<AdjacentLoad>,
}

impl LoadCase {
    pub fn new(id: LoadCaseId, load_kn: f64, footprint: ContactFootprint) -> Self {
        LoadCase {
            id,
            load_kn,
            footprint,
            neighbours: Vec::new(),
        }
    }

    /// Add a neighbouring load (builder pattern)
    pub fn with_neighbour(mut self, neighbour: AdjacentLoad) -> Self {
        self.neighbours.push(neighbour);
        self
    }

    /// Add several neighbouring loads (builder pattern)
    pub fn with_neighbours(mut self, neighbours: impl IntoIterator<Item = AdjacentLoad>) -> Self {
        self.neighbours.extend(neighbours);
        self
    }

    /// Position class of the primary load
    pub fn position(&self) -> LoadPosition {
        self.id.position()
    }

    /// Validate load, footprint and neighbour distances.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("load_kn", self.load_kn)?;
        self.footprint.validate()?;
        for neighbour in &self.neighbours {
            require_positive("neighbours.distance_mm", neighbour.distance_mm)?;
        }
        Ok(())
    }
}
