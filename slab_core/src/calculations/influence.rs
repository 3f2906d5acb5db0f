//! # Influence Curves
//!
//! Empirical curves giving the fraction of a load's own stress that is felt
//! at a point a distance `d` away, as a function of `d/ℓ`. Used to superpose
//! neighbouring rack legs and wheels onto the primary load.
//!
//! Each curve is a static table of `(d/ℓ, percent)` pairs sharing a single
//! piecewise-linear interpolation routine:
//!
//! - below the first breakpoint → first value
//! - above the last breakpoint → last value (no extrapolation)
//! - in between → linear interpolation
//!
//! The radial curves dip slightly negative (reverse bending) before decaying
//! to zero, so fractions lie in roughly `[-0.06, 1.0]`.

use serde::{Deserialize, Serialize};

use crate::loads::{Direction, LoadPosition};

/// Interior load, stress along the line joining the loads
const INTERIOR_RADIAL: [(f64, f64); 15] = [
    (0.0, 100.0),
    (0.2, 76.0),
    (0.4, 53.0),
    (0.6, 36.0),
    (0.8, 22.0),
    (1.0, 12.0),
    (1.2, 5.0),
    (1.4, 0.0),
    (1.6, -3.0),
    (2.0, -6.0),
    (2.4, -6.0),
    (2.8, -5.0),
    (3.2, -3.0),
    (4.0, -1.0),
    (5.0, 0.0),
];

/// Interior load, stress perpendicular to the line joining the loads
const INTERIOR_TANGENTIAL: [(f64, f64); 12] = [
    (0.0, 100.0),
    (0.2, 84.0),
    (0.4, 68.0),
    (0.6, 55.0),
    (0.8, 44.0),
    (1.0, 35.0),
    (1.4, 22.0),
    (1.8, 13.0),
    (2.2, 7.0),
    (2.6, 3.0),
    (3.0, 1.0),
    (4.0, 0.0),
];

/// Edge load, stress along the edge
const EDGE_RADIAL: [(f64, f64); 13] = [
    (0.0, 100.0),
    (0.2, 88.0),
    (0.4, 74.0),
    (0.6, 61.0),
    (0.8, 49.0),
    (1.0, 38.0),
    (1.4, 21.0),
    (1.8, 9.0),
    (2.2, 1.0),
    (2.6, -3.0),
    (3.0, -4.0),
    (4.0, -2.0),
    (5.0, 0.0),
];

/// Identifier of an influence curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluenceCurve {
    InteriorRadial,
    InteriorTangential,
    EdgeRadial,
}

impl InfluenceCurve {
    pub const ALL: [InfluenceCurve; 3] = [
        InfluenceCurve::InteriorRadial,
        InfluenceCurve::InteriorTangential,
        InfluenceCurve::EdgeRadial,
    ];

    /// Curve for a neighbour of a primary load at `primary`, measured in `direction`.
    ///
    /// Edge and corner loads use the edge curve along the edge; there is no
    /// separate edge-tangential curve, so tangential neighbours of an edge
    /// load use the interior tangential curve.
    pub fn select(primary: LoadPosition, direction: Direction) -> Self {
        match (primary, direction) {
            (LoadPosition::Interior, Direction::Radial) => InfluenceCurve::InteriorRadial,
            (LoadPosition::Interior, Direction::Tangential) => InfluenceCurve::InteriorTangential,
            (LoadPosition::Edge | LoadPosition::Corner, Direction::Radial) => {
                InfluenceCurve::EdgeRadial
            }
            (LoadPosition::Edge | LoadPosition::Corner, Direction::Tangential) => {
                InfluenceCurve::InteriorTangential
            }
        }
    }

    /// `(d/ℓ, percent)` breakpoints
    pub fn table(&self) -> &'static [(f64, f64)] {
        match self {
            InfluenceCurve::InteriorRadial => &INTERIOR_RADIAL,
            InfluenceCurve::InteriorTangential => &INTERIOR_TANGENTIAL,
            InfluenceCurve::EdgeRadial => &EDGE_RADIAL,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            InfluenceCurve::InteriorRadial => "Interior radial",
            InfluenceCurve::InteriorTangential => "Interior tangential",
            InfluenceCurve::EdgeRadial => "Edge radial",
        }
    }
}

/// Fraction of a neighbour's stress felt at distance ratio `d/ℓ`.
///
/// # Example
/// ```rust
/// use slab_core::calculations::influence::{influence, InfluenceCurve};
///
/// assert_eq!(influence(0.0, InfluenceCurve::InteriorRadial), 1.0);
/// assert!((influence(0.1, InfluenceCurve::InteriorRadial) - 0.88).abs() < 1e-9);
/// assert_eq!(influence(20.0, InfluenceCurve::EdgeRadial), 0.0);
/// ```
pub fn influence(distance_over_l: f64, curve: InfluenceCurve) -> f64 {
    interpolate(curve.table(), distance_over_l) / 100.0
}

/// Piecewise-linear interpolation over ascending `(x, y)` breakpoints,
/// clamped to the end values outside the table.
pub fn interpolate(table: &[(f64, f64)], x: f64) -> f64 {
    let (first, last) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };
    if x.is_nan() || x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }
    for pair in table.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    last.1
}
