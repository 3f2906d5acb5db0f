//! Concrete Model
//!
//! Elastic modulus and allowable flexural stress for slab concrete.
//!
//! ```text
//! fr        = 0.456 · k1 · k2 · f'c^0.66
//! allowable = fr + residual prestress
//! E         = 4700 · √f'c
//! ```
//!
//! - `k1` accounts for strength gain between 28 and 90 days
//! - `k2` accounts for fatigue under repeated loading
//!
//! A non-positive f'c gives an allowable stress of zero, so every thickness
//! search reports an inadequate slab rather than a false pass.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Coefficient on f'c^0.66 for the modulus of rupture
const RUPTURE_COEFFICIENT: f64 = 0.456;
/// Exponent on f'c for the modulus of rupture
const RUPTURE_EXPONENT: f64 = 0.66;
/// Coefficient on √f'c for the elastic modulus (NZS 3101)
const ELASTIC_MODULUS_COEFFICIENT: f64 = 4700.0;

/// Plausible structural range for f'c at the input boundary (MPa)
pub const MIN_FC_MPA: f64 = 10.0;
pub const MAX_FC_MPA: f64 = 100.0;

/// Age of the concrete when the design load is first applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CuringAge {
    /// Loaded at 28 days: k1 = 1.0
    #[default]
    #[serde(rename = "28_days")]
    Days28,
    /// Loaded at 90 days or later: k1 = 1.1
    #[serde(rename = "90_days")]
    Days90,
}

impl CuringAge {
    /// Age factor k1
    pub fn factor(&self) -> f64 {
        match self {
            CuringAge::Days28 => 1.0,
            CuringAge::Days90 => 1.1,
        }
    }

    /// Age in days
    pub fn days(&self) -> u32 {
        match self {
            CuringAge::Days28 => 28,
            CuringAge::Days90 => 90,
        }
    }
}

impl std::fmt::Display for CuringAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.days())
    }
}

/// Cumulative number of load repetitions over the design life, bucketed.
///
/// Each bucket covers counts up to its label; the last covers anything above
/// 300,000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum LoadRepetitions {
    /// Up to 8,000 repetitions: k2 = 1.00
    #[default]
    #[serde(rename = "8000")]
    UpTo8000,
    /// Up to 10,000 repetitions: k2 = 0.97
    #[serde(rename = "10000")]
    UpTo10000,
    /// Up to 30,000 repetitions: k2 = 0.92
    #[serde(rename = "30000")]
    UpTo30000,
    /// Up to 50,000 repetitions: k2 = 0.89
    #[serde(rename = "50000")]
    UpTo50000,
    /// Up to 100,000 repetitions: k2 = 0.86
    #[serde(rename = "100000")]
    UpTo100000,
    /// Up to 200,000 repetitions: k2 = 0.82
    #[serde(rename = "200000")]
    UpTo200000,
    /// Up to 300,000 repetitions: k2 = 0.79
    #[serde(rename = "300000")]
    UpTo300000,
    /// 400,000 repetitions and above: k2 = 0.77
    #[serde(rename = "400000+")]
    AtLeast400000,
}

impl LoadRepetitions {
    /// All buckets in increasing order of repetitions
    pub const ALL: [LoadRepetitions; 8] = [
        LoadRepetitions::UpTo8000,
        LoadRepetitions::UpTo10000,
        LoadRepetitions::UpTo30000,
        LoadRepetitions::UpTo50000,
        LoadRepetitions::UpTo100000,
        LoadRepetitions::UpTo200000,
        LoadRepetitions::UpTo300000,
        LoadRepetitions::AtLeast400000,
    ];

    /// Smallest bucket covering a raw repetition count
    pub fn from_count(count: u64) -> Self {
        match count {
            0..=8_000 => LoadRepetitions::UpTo8000,
            8_001..=10_000 => LoadRepetitions::UpTo10000,
            10_001..=30_000 => LoadRepetitions::UpTo30000,
            30_001..=50_000 => LoadRepetitions::UpTo50000,
            50_001..=100_000 => LoadRepetitions::UpTo100000,
            100_001..=200_000 => LoadRepetitions::UpTo200000,
            200_001..=300_000 => LoadRepetitions::UpTo300000,
            _ => LoadRepetitions::AtLeast400000,
        }
    }

    /// Fatigue factor k2
    pub fn factor(&self) -> f64 {
        match self {
            LoadRepetitions::UpTo8000 => 1.00,
            LoadRepetitions::UpTo10000 => 0.97,
            LoadRepetitions::UpTo30000 => 0.92,
            LoadRepetitions::UpTo50000 => 0.89,
            LoadRepetitions::UpTo100000 => 0.86,
            LoadRepetitions::UpTo200000 => 0.82,
            LoadRepetitions::UpTo300000 => 0.79,
            LoadRepetitions::AtLeast400000 => 0.77,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadRepetitions::UpTo8000 => "Up to 8,000",
            LoadRepetitions::UpTo10000 => "10,000",
            LoadRepetitions::UpTo30000 => "30,000",
            LoadRepetitions::UpTo50000 => "50,000",
            LoadRepetitions::UpTo100000 => "100,000",
            LoadRepetitions::UpTo200000 => "200,000",
            LoadRepetitions::UpTo300000 => "300,000",
            LoadRepetitions::AtLeast400000 => "400,000+",
        }
    }
}

impl std::fmt::Display for LoadRepetitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Concrete inputs for the slab.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fc_mpa": 32.0,
///   "age": "28_days",
///   "repetitions": "8000",
///   "residual_prestress_mpa": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Specified compressive strength f'c (MPa)
    pub fc_mpa: f64,

    /// Age at first loading
    #[serde(default)]
    pub age: CuringAge,

    /// Load repetitions over the design life
    #[serde(default)]
    pub repetitions: LoadRepetitions,

    /// Residual prestress for post-tensioned slabs (MPa); `None` otherwise
    #[serde(default)]
    pub residual_prestress_mpa: Option<f64>,
}

impl ConcreteProperties {
    /// Plain (not post-tensioned) concrete loaded at 28 days, ≤ 8000 repetitions
    pub fn new(fc_mpa: f64) -> Self {
        ConcreteProperties {
            fc_mpa,
            age: CuringAge::Days28,
            repetitions: LoadRepetitions::UpTo8000,
            residual_prestress_mpa: None,
        }
    }

    pub fn with_age(mut self, age: CuringAge) -> Self {
        self.age = age;
        self
    }

    pub fn with_repetitions(mut self, repetitions: LoadRepetitions) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Mark as post-tensioned with the given residual prestress
    pub fn with_prestress(mut self, prestress_mpa: f64) -> Self {
        self.residual_prestress_mpa = Some(prestress_mpa);
        self
    }

    /// Validate f'c range and prestress sign.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.fc_mpa.is_finite() || self.fc_mpa < MIN_FC_MPA || self.fc_mpa > MAX_FC_MPA {
            return Err(CalcError::invalid_input(
                "fc_mpa",
                self.fc_mpa.to_string(),
                format!("f'c must be between {} and {} MPa", MIN_FC_MPA, MAX_FC_MPA),
            ));
        }
        if let Some(p) = self.residual_prestress_mpa {
            if !p.is_finite() || p < 0.0 {
                return Err(CalcError::invalid_input(
                    "residual_prestress_mpa",
                    p.to_string(),
                    "Prestress cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Elastic modulus E (MPa)
    pub fn elastic_modulus_mpa(&self) -> f64 {
        elastic_modulus(self.fc_mpa)
    }

    /// Derive the allowable flexural stress.
    pub fn allowable_stress(&self) -> AllowableStress {
        let k1 = self.age.factor();
        let k2 = self.repetitions.factor();
        let fr = modulus_of_rupture(self.fc_mpa, k1, k2);
        let prestress = self.residual_prestress_mpa.unwrap_or(0.0).max(0.0);
        let allowable = if fr > 0.0 { fr + prestress } else { 0.0 };

        AllowableStress {
            k1,
            k2,
            modulus_of_rupture_mpa: fr,
            prestress_mpa: prestress,
            allowable_mpa: allowable,
        }
    }
}

/// Allowable flexural stress and its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllowableStress {
    /// Age factor
    pub k1: f64,
    /// Repetition (fatigue) factor
    pub k2: f64,
    /// Modulus of rupture fr (MPa)
    pub modulus_of_rupture_mpa: f64,
    /// Residual prestress added to fr (MPa)
    pub prestress_mpa: f64,
    /// Allowable stress compared with factored stress (MPa)
    pub allowable_mpa: f64,
}

/// Modulus of rupture `fr = 0.456·k1·k2·f'c^0.66` (MPa); 0 when f'c ≤ 0.
///
/// # Example
/// ```rust
/// use slab_core::materials::concrete::modulus_of_rupture;
///
/// let fr = modulus_of_rupture(32.0, 1.0, 1.0);
/// assert!((fr - 4.49).abs() < 0.01);
/// ```
pub fn modulus_of_rupture(fc_mpa: f64, k1: f64, k2: f64) -> f64 {
    if fc_mpa.is_nan() || fc_mpa <= 0.0 {
        return 0.0;
    }
    RUPTURE_COEFFICIENT * k1 * k2 * fc_mpa.powf(RUPTURE_EXPONENT)
}

/// Elastic modulus `E = 4700·√f'c` (MPa); 0 when f'c ≤ 0.
pub fn elastic_modulus(fc_mpa: f64) -> f64 {
    if fc_mpa.is_nan() || fc_mpa <= 0.0 {
        return 0.0;
    }
    ELASTIC_MODULUS_COEFFICIENT * fc_mpa.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_factor() {
        assert_eq!(CuringAge::Days28.factor(), 1.0);
        assert_eq!(CuringAge::Days90.factor(), 1.1);
    }

    #[test]
    fn test_k2_monotonic_over_buckets() {
        let counts = [
            8_000u64, 10_000, 30_000, 50_000, 100_000, 200_000, 300_000, 400_000, 1_000_000,
        ];
        let factors: Vec<f64> = counts
            .iter()
            .map(|&n| LoadRepetitions::from_count(n).factor())
            .collect();
        for pair in factors.windows(2) {
            assert!(pair[1] <= pair[0], "k2 increased: {:?}", factors);
        }
        assert_eq!(factors[0], 1.0);
        let floor = *factors.last().unwrap();
        assert!((0.75..=0.77).contains(&floor));
    }

    #[test]
    fn test_k2_monotonic_over_enum_order() {
        for pair in LoadRepetitions::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[1].factor() <= pair[0].factor());
        }
    }

    #[test]
    fn test_from_count_boundaries() {
        assert_eq!(LoadRepetitions::from_count(0), LoadRepetitions::UpTo8000);
        assert_eq!(LoadRepetitions::from_count(8_000), LoadRepetitions::UpTo8000);
        assert_eq!(LoadRepetitions::from_count(8_001), LoadRepetitions::UpTo10000);
        assert_eq!(LoadRepetitions::from_count(300_000), LoadRepetitions::UpTo300000);
        assert_eq!(LoadRepetitions::from_count(300_001), LoadRepetitions::AtLeast400000);
    }

    #[test]
    fn test_modulus_of_rupture() {
        // 0.456 × 32^0.66 = 4.49 MPa
        let allowable = ConcreteProperties::new(32.0).allowable_stress();
        assert_eq!(allowable.k1, 1.0);
        assert_eq!(allowable.k2, 1.0);
        assert!((allowable.modulus_of_rupture_mpa - 4.49).abs() < 0.01);
        assert_eq!(allowable.allowable_mpa, allowable.modulus_of_rupture_mpa);
    }

    #[test]
    fn test_age_and_fatigue_applied() {
        let base = ConcreteProperties::new(32.0).allowable_stress().allowable_mpa;
        let aged = ConcreteProperties::new(32.0)
            .with_age(CuringAge::Days90)
            .allowable_stress()
            .allowable_mpa;
        let fatigued = ConcreteProperties::new(32.0)
            .with_repetitions(LoadRepetitions::AtLeast400000)
            .allowable_stress()
            .allowable_mpa;
        assert!((aged - 1.1 * base).abs() < 1e-9);
        assert!((fatigued - 0.77 * base).abs() < 1e-9);
    }

    #[test]
    fn test_prestress_is_additive() {
        let plain = ConcreteProperties::new(32.0).allowable_stress();
        let pt = ConcreteProperties::new(32.0).with_prestress(1.2).allowable_stress();
        assert!((pt.allowable_mpa - plain.allowable_mpa - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_strength_gives_zero_allowable() {
        let props = ConcreteProperties::new(0.0).with_prestress(2.0);
        assert_eq!(props.allowable_stress().allowable_mpa, 0.0);
        assert_eq!(ConcreteProperties::new(-5.0).elastic_modulus_mpa(), 0.0);
    }

    #[test]
    fn test_elastic_modulus() {
        // 4700 × √32 = 26,587 MPa
        assert!((elastic_modulus(32.0) - 26_587.0).abs() < 1.0);
    }

    #[test]
    fn test_validation() {
        assert!(ConcreteProperties::new(32.0).validate().is_ok());
        assert!(ConcreteProperties::new(5.0).validate().is_err());
        assert!(ConcreteProperties::new(32.0).with_prestress(-0.5).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let props = ConcreteProperties::new(40.0)
            .with_age(CuringAge::Days90)
            .with_repetitions(LoadRepetitions::AtLeast400000);
        let json = serde_json::to_string(&props).unwrap();
        assert!(json.contains("\"90_days\""));
        assert!(json.contains("\"400000+\""));
        let roundtrip: ConcreteProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }
}
