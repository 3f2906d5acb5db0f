//! # Solver Settings
//!
//! Explicit configuration for a design run. Settings travel inside
//! [`SlabDesignInput`](crate::calculations::SlabDesignInput) and are passed by
//! value; nothing is read from global state.
//!
//! ## Defaults
//!
//! | Setting            | Default |
//! |--------------------|---------|
//! | Minimum thickness  | 125 mm  |
//! | Maximum thickness  | 800 mm  |
//! | Thickness step     | 1 mm    |
//! | Load factor        | 1.5     |
//! | Poisson's ratio    | 0.15    |

use serde::{Deserialize, Serialize};

use crate::equations::slab::POISSON_RATIO;
use crate::errors::{CalcError, CalcResult};

/// Factor applied to the combined service stress
pub const LOAD_FACTOR: f64 = 1.5;

/// Thickness search and analysis settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// First trial thickness (mm)
    pub min_thickness_mm: u32,
    /// Last trial thickness (mm)
    pub max_thickness_mm: u32,
    /// Increment between trial thicknesses (mm)
    pub step_mm: u32,
    /// Factor applied to the summed stress
    pub load_factor: f64,
    /// Poisson's ratio of the concrete
    pub poisson_ratio: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            min_thickness_mm: 125,
            max_thickness_mm: 800,
            step_mm: 1,
            load_factor: LOAD_FACTOR,
            poisson_ratio: POISSON_RATIO,
        }
    }
}

impl SolverSettings {
    /// Validate search bounds and analysis constants.
    pub fn validate(&self) -> CalcResult<()> {
        if self.min_thickness_mm == 0 {
            return Err(CalcError::invalid_input(
                "min_thickness_mm",
                "0",
                "Minimum thickness must be positive",
            ));
        }
        if self.max_thickness_mm < self.min_thickness_mm {
            return Err(CalcError::invalid_input(
                "max_thickness_mm",
                self.max_thickness_mm.to_string(),
                "Maximum thickness must not be less than the minimum",
            ));
        }
        if self.step_mm == 0 {
            return Err(CalcError::invalid_input("step_mm", "0", "Step must be positive"));
        }
        if !self.load_factor.is_finite() || self.load_factor < 1.0 {
            return Err(CalcError::invalid_input(
                "load_factor",
                self.load_factor.to_string(),
                "Load factor must be at least 1.0",
            ));
        }
        if !(0.0..0.5).contains(&self.poisson_ratio) {
            return Err(CalcError::invalid_input(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson's ratio must be in [0, 0.5)",
            ));
        }
        Ok(())
    }

    /// Number of trial thicknesses in the search range
    pub fn trial_count(&self) -> u32 {
        if self.step_mm == 0 || self.max_thickness_mm < self.min_thickness_mm {
            return 0;
        }
        (self.max_thickness_mm - self.min_thickness_mm) / self.step_mm + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = SolverSettings::default();
        assert_eq!(s.min_thickness_mm, 125);
        assert_eq!(s.max_thickness_mm, 800);
        assert_eq!(s.step_mm, 1);
        assert_eq!(s.load_factor, 1.5);
        assert_eq!(s.poisson_ratio, 0.15);
        assert!(s.validate().is_ok());
        assert_eq!(s.trial_count(), 676);
    }

    #[test]
    fn test_invalid_settings() {
        let mut s = SolverSettings::default();
        s.step_mm = 0;
        assert!(s.validate().is_err());

        let mut s = SolverSettings::default();
        s.max_thickness_mm = 100;
        assert!(s.validate().is_err());

        let mut s = SolverSettings::default();
        s.load_factor = 0.9;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: SolverSettings = serde_json::from_str(r#"{ "step_mm": 25 }"#).unwrap();
        assert_eq!(s.step_mm, 25);
        assert_eq!(s.min_thickness_mm, 125);
        assert_eq!(s.load_factor, 1.5);
    }
}
