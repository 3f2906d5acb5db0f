//! Subgrade Model
//!
//! Converts a ground-strength reading into a modulus of subgrade reaction `k`,
//! optionally enhanced by a granular sub-base.
//!
//! ## Policy
//!
//! - Scala penetrometer → CBR: `log10(CBR) = 2.55 − 1.14·log10(mm/blow)`
//! - CBR → k: discretised step table (see [`base_modulus_from_cbr`])
//! - Sub-base: capped multiplier `min(1 + t/400, 2.0)` for t ≥ 100 mm
//!
//! An invalid reading produces `k = 0`. Callers check
//! [`SubgradeModulus::is_valid`] (or run [`GroundInput::validate`]) before
//! using it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CalcError, CalcResult};

/// Scala penetrometer correlation: log10(CBR) = A − B·log10(mm/blow)
const PENETROMETER_LOG_INTERCEPT: f64 = 2.55;
const PENETROMETER_LOG_SLOPE: f64 = 1.14;

/// Sub-base layers thinner than this give no enhancement (mm)
pub const MIN_SUB_BASE_THICKNESS_MM: f64 = 100.0;

/// Sub-base thickness giving one full multiple of base k (mm)
const SUB_BASE_THICKNESS_PER_MULTIPLE_MM: f64 = 400.0;

/// Upper bound on the sub-base enhancement multiplier
pub const MAX_SUB_BASE_FACTOR: f64 = 2.0;

/// CBR → k step table: (upper CBR bound, k in MN/m³)
const CBR_TO_K: [(f64, f64); 5] = [
    (2.0, 15.0),
    (5.0, 37.0),
    (10.0, 54.0),
    (20.0, 68.0),
    (40.0, 82.0),
];

/// k for any CBR above the last table bound (MN/m³)
const K_ABOVE_TABLE: f64 = 109.0;

/// How the ground strength was assessed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum GroundAssessment {
    /// California Bearing Ratio (%)
    Cbr { cbr_percent: f64 },
    /// Scala dynamic cone penetrometer (mm per blow)
    Penetrometer { mm_per_blow: f64 },
}

impl GroundAssessment {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            GroundAssessment::Cbr { .. } => "CBR",
            GroundAssessment::Penetrometer { .. } => "Scala penetrometer",
        }
    }
}

/// Granular sub-base layer between the subgrade and the slab
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubBase {
    /// Compacted thickness (mm)
    pub thickness_mm: f64,
}

/// Ground assessment inputs.
///
/// ## JSON Example
///
/// ```json
/// {
///   "assessment": { "method": "cbr", "cbr_percent": 10.0 },
///   "sub_base": { "thickness_mm": 150.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundInput {
    /// Ground strength reading
    pub assessment: GroundAssessment,

    /// Optional granular sub-base
    #[serde(default)]
    pub sub_base: Option<SubBase>,
}

impl GroundInput {
    /// Ground assessed by CBR with no sub-base
    pub fn cbr(cbr_percent: f64) -> Self {
        GroundInput {
            assessment: GroundAssessment::Cbr { cbr_percent },
            sub_base: None,
        }
    }

    /// Ground assessed by Scala penetrometer with no sub-base
    pub fn penetrometer(mm_per_blow: f64) -> Self {
        GroundInput {
            assessment: GroundAssessment::Penetrometer { mm_per_blow },
            sub_base: None,
        }
    }

    /// Add a sub-base layer
    pub fn with_sub_base(mut self, thickness_mm: f64) -> Self {
        self.sub_base = Some(SubBase { thickness_mm });
        self
    }

    /// Validate the reading and sub-base thickness.
    pub fn validate(&self) -> CalcResult<()> {
        match self.assessment {
            GroundAssessment::Cbr { cbr_percent } => {
                if !cbr_percent.is_finite() || cbr_percent <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "cbr_percent",
                        cbr_percent.to_string(),
                        "CBR must be positive",
                    ));
                }
                if cbr_percent > 100.0 {
                    return Err(CalcError::invalid_input(
                        "cbr_percent",
                        cbr_percent.to_string(),
                        "CBR cannot exceed 100%",
                    ));
                }
            }
            GroundAssessment::Penetrometer { mm_per_blow } => {
                if !mm_per_blow.is_finite() || mm_per_blow <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "mm_per_blow",
                        mm_per_blow.to_string(),
                        "Penetrometer reading must be positive",
                    ));
                }
            }
        }
        if let Some(sub_base) = self.sub_base {
            if !sub_base.thickness_mm.is_finite() || sub_base.thickness_mm <= 0.0 {
                return Err(CalcError::invalid_input(
                    "sub_base.thickness_mm",
                    sub_base.thickness_mm.to_string(),
                    "Sub-base thickness must be positive",
                ));
            }
        }
        Ok(())
    }

    /// CBR used for the modulus lookup (penetrometer readings converted)
    pub fn equivalent_cbr(&self) -> f64 {
        match self.assessment {
            GroundAssessment::Cbr { cbr_percent } => cbr_percent,
            GroundAssessment::Penetrometer { mm_per_blow } => penetrometer_to_cbr(mm_per_blow),
        }
    }

    /// Derive the design modulus of subgrade reaction.
    pub fn modulus(&self) -> SubgradeModulus {
        let equivalent_cbr = self.equivalent_cbr();
        let base_k = base_modulus_from_cbr(equivalent_cbr);
        let factor = self
            .sub_base
            .map(|s| sub_base_factor(s.thickness_mm))
            .unwrap_or(1.0);

        if base_k <= 0.0 {
            warn!(cbr = equivalent_cbr, "ground reading gives no valid subgrade modulus");
        }

        SubgradeModulus {
            equivalent_cbr,
            base_k_mn_m3: base_k,
            sub_base_factor: factor,
            design_k_mn_m3: base_k * factor,
        }
    }
}

/// Derived subgrade stiffness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubgradeModulus {
    /// CBR used for the lookup (%)
    pub equivalent_cbr: f64,
    /// k from the CBR table before sub-base enhancement (MN/m³)
    pub base_k_mn_m3: f64,
    /// Sub-base multiplier applied (1.0 when none)
    pub sub_base_factor: f64,
    /// k used in design (MN/m³)
    pub design_k_mn_m3: f64,
}

impl SubgradeModulus {
    /// False when the ground reading could not produce a usable k
    pub fn is_valid(&self) -> bool {
        self.design_k_mn_m3 > 0.0
    }
}

/// Convert a Scala penetrometer reading to an equivalent CBR.
///
/// # Formula
/// ```text
/// CBR = 10^(2.55 − 1.14·log10(p))  ≈  354.8 · p^−1.14
/// ```
///
/// Returns 0 for non-positive or non-finite readings.
///
/// # Example
/// ```rust
/// use slab_core::materials::subgrade::penetrometer_to_cbr;
///
/// // 20 mm/blow is roughly CBR 11.7
/// let cbr = penetrometer_to_cbr(20.0);
/// assert!((cbr - 11.7).abs() < 0.2);
/// ```
pub fn penetrometer_to_cbr(mm_per_blow: f64) -> f64 {
    if !mm_per_blow.is_finite() || mm_per_blow <= 0.0 {
        return 0.0;
    }
    10f64.powf(PENETROMETER_LOG_INTERCEPT - PENETROMETER_LOG_SLOPE * mm_per_blow.log10())
}

/// Base modulus of subgrade reaction from CBR (MN/m³).
///
/// | CBR (%)   | k (MN/m³) |
/// |-----------|-----------|
/// | ≤ 0       | 0 (invalid) |
/// | ≤ 2       | 15        |
/// | ≤ 5       | 37        |
/// | ≤ 10      | 54        |
/// | ≤ 20      | 68        |
/// | ≤ 40      | 82        |
/// | > 40      | 109       |
pub fn base_modulus_from_cbr(cbr: f64) -> f64 {
    if cbr.is_nan() || cbr <= 0.0 {
        return 0.0;
    }
    CBR_TO_K
        .iter()
        .find(|(limit, _)| cbr <= *limit)
        .map(|(_, k)| *k)
        .unwrap_or(K_ABOVE_TABLE)
}

/// Sub-base enhancement multiplier on base k.
///
/// No enhancement below 100 mm; above that `1 + t/400`, capped at 2.0.
pub fn sub_base_factor(thickness_mm: f64) -> f64 {
    if thickness_mm.is_nan() || thickness_mm < MIN_SUB_BASE_THICKNESS_MM {
        return 1.0;
    }
    (1.0 + thickness_mm / SUB_BASE_THICKNESS_PER_MULTIPLE_MM).min(MAX_SUB_BASE_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cbr_table_fixtures() {
        let fixtures = [
            (1.0, 15.0),
            (2.0, 15.0),
            (3.0, 37.0),
            (5.0, 37.0),
            (10.0, 54.0),
            (15.0, 68.0),
            (40.0, 82.0),
            (41.0, 109.0),
            (100.0, 109.0),
        ];
        for (cbr, k) in fixtures {
            assert_eq!(base_modulus_from_cbr(cbr), k, "CBR {}", cbr);
        }
    }

    #[test]
    fn test_invalid_cbr_gives_zero() {
        assert_eq!(base_modulus_from_cbr(0.0), 0.0);
        assert_eq!(base_modulus_from_cbr(-3.0), 0.0);
        assert_eq!(base_modulus_from_cbr(f64::NAN), 0.0);
        assert!(!GroundInput::cbr(0.0).modulus().is_valid());
    }

    #[test]
    fn test_penetrometer_conversion() {
        // 10 mm/blow → 10^(2.55 − 1.14) = 25.7
        assert!((penetrometer_to_cbr(10.0) - 25.7).abs() < 0.1);
        // Softer ground (more mm per blow) gives lower CBR
        assert!(penetrometer_to_cbr(40.0) < penetrometer_to_cbr(20.0));
        assert_eq!(penetrometer_to_cbr(0.0), 0.0);
    }

    #[test]
    fn test_penetrometer_ground_uses_converted_cbr() {
        // 20 mm/blow ≈ CBR 11.7 → k = 68
        let k = GroundInput::penetrometer(20.0).modulus();
        assert_eq!(k.base_k_mn_m3, 68.0);
    }

    #[test]
    fn test_sub_base_threshold() {
        assert_eq!(sub_base_factor(0.0), 1.0);
        assert_eq!(sub_base_factor(99.9), 1.0);
        assert!((sub_base_factor(100.0) - 1.25).abs() < 1e-12);
        assert!((sub_base_factor(200.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_sub_base_enhancement_bounded() {
        for t in (0..=1000).step_by(25) {
            let ground = GroundInput::cbr(10.0).with_sub_base(t as f64 + 1.0);
            let k = ground.modulus();
            assert!(k.design_k_mn_m3 >= k.base_k_mn_m3);
            assert!(k.design_k_mn_m3 <= MAX_SUB_BASE_FACTOR * k.base_k_mn_m3);
        }
        assert_eq!(sub_base_factor(5000.0), MAX_SUB_BASE_FACTOR);
    }

    #[test]
    fn test_no_sub_base() {
        let k = GroundInput::cbr(10.0).modulus();
        assert_eq!(k.design_k_mn_m3, 54.0);
        assert_eq!(k.sub_base_factor, 1.0);
    }

    #[test]
    fn test_validation() {
        assert!(GroundInput::cbr(10.0).validate().is_ok());
        assert!(GroundInput::cbr(0.0).validate().is_err());
        assert!(GroundInput::cbr(150.0).validate().is_err());
        assert!(GroundInput::penetrometer(-1.0).validate().is_err());
        assert!(GroundInput::cbr(5.0).with_sub_base(-10.0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let ground = GroundInput::penetrometer(25.0).with_sub_base(150.0);
        let json = serde_json::to_string(&ground).unwrap();
        assert!(json.contains("\"method\":\"penetrometer\""));
        let roundtrip: GroundInput = serde_json::from_str(&json).unwrap();
        assert_eq!(ground, roundtrip);
    }
}
