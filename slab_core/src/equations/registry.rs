//! # Equation Registry
//!
//! Central registry of every formula used by the slab design. Each equation
//! carries metadata (plain-text formula, reference, variables, assumptions and
//! the function implementing it) so that a design can list exactly which
//! equations it relied on.
//!
//! ## Usage
//!
//! ```rust
//! use slab_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::InteriorStress, "Interior case");
//!
//! let meta = Equation::InteriorStress.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! assert_eq!(tracker.unique_equations(), vec![Equation::InteriorStress]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Source of an equation, cited in the audit list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// CCANZ TM38 Concrete ground floors and pavements
    Tm38 { topic: &'static str },
    /// Westergaard's plate-on-elastic-foundation analysis
    Westergaard { year: u16 },
    /// NZS 3101 Concrete Structures Standard
    Nzs3101 { clause: &'static str },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Tm38 { topic } => format!("CCANZ TM38, {}", topic),
            CodeReference::Westergaard { year } => format!("Westergaard ({})", year),
            CodeReference::Nzs3101 { clause } => format!("NZS 3101 Clause {}", clause),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Tm38 { .. } => "TM38",
            CodeReference::Westergaard { .. } => "Westergaard",
            CodeReference::Nzs3101 { .. } => "NZS 3101",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the audit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Ground reading to subgrade modulus
    Subgrade,
    /// Concrete strength and stiffness
    Materials,
    /// Contact radii of plates and tyres
    ContactGeometry,
    /// Slab stiffness relative to the foundation
    Stiffness,
    /// Westergaard flexural stresses
    Stresses,
    /// Neighbour superposition and load factoring
    Superposition,
    /// Thickness acceptance
    DesignChecks,
}

impl EquationCategory {
    /// All categories in display order
    pub const ALL: [EquationCategory; 7] = [
        EquationCategory::Subgrade,
        EquationCategory::Materials,
        EquationCategory::ContactGeometry,
        EquationCategory::Stiffness,
        EquationCategory::Stresses,
        EquationCategory::Superposition,
        EquationCategory::DesignChecks,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Subgrade => "Subgrade",
            EquationCategory::Materials => "Concrete Properties",
            EquationCategory::ContactGeometry => "Contact Geometry",
            EquationCategory::Stiffness => "Slab Stiffness",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Superposition => "Superposition",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "ℓ", "h", "k")
    pub symbol: &'static str,
    pub description: &'static str,
    /// Units (e.g., "mm", "MPa", "MN/m³")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the equation calculates
    pub description: &'static str,
    /// Formula in plain text
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation used by the slab design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Subgrade
    PenetrometerToCbr,
    SubgradeModulusFromCbr,
    SubBaseEnhancement,
    // Concrete
    ElasticModulus,
    ModulusOfRupture,
    AllowableStress,
    // Contact geometry
    AreaEquivalentRadius,
    TyreContactRadius,
    DualTyreContactRadius,
    EdgeContactRadius,
    EquivalentContactRadius,
    // Stiffness
    RadiusOfRelativeStiffness,
    // Stresses
    InteriorStress,
    EdgeStress,
    CornerStress,
    JointLoadTransfer,
    // Superposition
    InfluenceSuperposition,
    FactoredStress,
    // Checks
    ThicknessCheck,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::PenetrometerToCbr => EquationMetadata {
                name: "Scala Penetrometer to CBR",
                description: "Equivalent CBR from a dynamic cone penetrometer reading",
                formula_plain: "log10(CBR) = 2.55 - 1.14 * log10(p)",
                reference: CodeReference::Tm38 { topic: "Subgrade assessment" },
                variables: vec![
                    Variable::new("p", "Penetration per blow", "mm/blow"),
                    Variable::new("CBR", "California bearing ratio", "%"),
                ],
                assumptions: vec!["Fine-grained soils", "Reading averaged over the loaded depth"],
                category: EquationCategory::Subgrade,
                source_module: "materials/subgrade.rs",
                source_function: "penetrometer_to_cbr",
            },

            Equation::SubgradeModulusFromCbr => EquationMetadata {
                name: "Subgrade Modulus from CBR",
                description: "Modulus of subgrade reaction from a stepped CBR correlation",
                formula_plain: "k = 15 / 37 / 54 / 68 / 82 / 109 for CBR <= 2 / 5 / 10 / 20 / 40 / above",
                reference: CodeReference::Tm38 { topic: "Modulus of subgrade reaction" },
                variables: vec![
                    Variable::new("CBR", "California bearing ratio", "%"),
                    Variable::new("k", "Modulus of subgrade reaction", "MN/m³"),
                ],
                assumptions: vec!["CBR <= 0 gives k = 0 (invalid)"],
                category: EquationCategory::Subgrade,
                source_module: "materials/subgrade.rs",
                source_function: "base_modulus_from_cbr",
            },

            Equation::SubBaseEnhancement => EquationMetadata {
                name: "Sub-base Enhancement",
                description: "Increase in k from a compacted granular sub-base",
                formula_plain: "k_design = k * min(1 + t/400, 2.0) for t >= 100 mm",
                reference: CodeReference::Tm38 { topic: "Sub-base" },
                variables: vec![
                    Variable::new("t", "Sub-base thickness", "mm"),
                    Variable::new("k", "Base modulus of subgrade reaction", "MN/m³"),
                ],
                assumptions: vec!["No enhancement below 100 mm", "Enhancement capped at twice base k"],
                category: EquationCategory::Subgrade,
                source_module: "materials/subgrade.rs",
                source_function: "sub_base_factor",
            },

            Equation::ElasticModulus => EquationMetadata {
                name: "Elastic Modulus of Concrete",
                description: "Short-term elastic modulus from compressive strength",
                formula_plain: "E = 4700 * sqrt(f'c)",
                reference: CodeReference::Nzs3101 { clause: "5.2.3" },
                variables: vec![
                    Variable::new("E", "Elastic modulus", "MPa"),
                    Variable::new("f'c", "Specified compressive strength", "MPa"),
                ],
                assumptions: vec!["Normal-weight concrete"],
                category: EquationCategory::Materials,
                source_module: "materials/concrete.rs",
                source_function: "elastic_modulus",
            },

            Equation::ModulusOfRupture => EquationMetadata {
                name: "Design Modulus of Rupture",
                description: "Flexural tensile strength reduced for age and load repetitions",
                formula_plain: "fr = 0.456 * k1 * k2 * f'c^0.66",
                reference: CodeReference::Tm38 { topic: "Flexural strength" },
                variables: vec![
                    Variable::new("fr", "Modulus of rupture", "MPa"),
                    Variable::new("k1", "Curing age factor", "-"),
                    Variable::new("k2", "Load repetition factor", "-"),
                    Variable::new("f'c", "Specified compressive strength", "MPa"),
                ],
                assumptions: vec!["k1 = 1.0 at 28 days, 1.1 at 90 days", "k2 from repetition buckets"],
                category: EquationCategory::Materials,
                source_module: "materials/concrete.rs",
                source_function: "modulus_of_rupture",
            },

            Equation::AllowableStress => EquationMetadata {
                name: "Allowable Flexural Stress",
                description: "Stress limit compared with the factored slab stress",
                formula_plain: "f_allow = fr + f_p",
                reference: CodeReference::Tm38 { topic: "Allowable stress" },
                variables: vec![
                    Variable::new("fr", "Design modulus of rupture", "MPa"),
                    Variable::new("f_p", "Residual prestress (0 if none)", "MPa"),
                ],
                assumptions: vec!["f_allow = 0 when fr <= 0"],
                category: EquationCategory::Materials,
                source_module: "materials/concrete.rs",
                source_function: "ConcreteProperties::allowable_stress",
            },

            Equation::AreaEquivalentRadius => EquationMetadata {
                name: "Area-Equivalent Contact Radius",
                description: "Radius of a circle with the same area as a baseplate",
                formula_plain: "a = sqrt(A / pi)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("A", "Contact area", "mm²"),
                    Variable::new("a", "Contact radius", "mm"),
                ],
                assumptions: vec!["Rigid plate", "Uniform contact pressure"],
                category: EquationCategory::ContactGeometry,
                source_module: "equations/slab.rs",
                source_function: "area_equivalent_radius",
            },

            Equation::TyreContactRadius => EquationMetadata {
                name: "Tyre Contact Radius",
                description: "Contact radius of a tyre from load and inflation pressure",
                formula_plain: "a = sqrt((P / p) / pi)",
                reference: CodeReference::Tm38 { topic: "Wheel loads" },
                variables: vec![
                    Variable::new("P", "Wheel load", "N"),
                    Variable::new("p", "Tyre pressure", "MPa"),
                ],
                assumptions: vec!["Contact pressure equals inflation pressure"],
                category: EquationCategory::ContactGeometry,
                source_module: "geometry.rs",
                source_function: "ContactFootprint::contact_radius_mm",
            },

            Equation::DualTyreContactRadius => EquationMetadata {
                name: "Dual Tyre Contact Radius",
                description: "Single equivalent radius for a pair of tyres on one wheel position",
                formula_plain: "a = sqrt(r^2 + 2 * tc * r / pi)",
                reference: CodeReference::Tm38 { topic: "Wheel loads" },
                variables: vec![
                    Variable::new("r", "Radius of one tyre at half the wheel load", "mm"),
                    Variable::new("tc", "Clear spacing between tyres", "mm"),
                ],
                assumptions: vec!["Load shared equally between the tyres"],
                category: EquationCategory::ContactGeometry,
                source_module: "equations/slab.rs",
                source_function: "dual_tyre_radius",
            },

            Equation::EdgeContactRadius => EquationMetadata {
                name: "Edge Contact Radius",
                description: "Contact radius used for loads at an edge or corner",
                formula_plain: "a_e = sqrt(2) * a",
                reference: CodeReference::Tm38 { topic: "Edge and corner loads" },
                variables: vec![Variable::new("a", "Interior contact radius", "mm")],
                assumptions: vec!["Plate placed tight against the joint"],
                category: EquationCategory::ContactGeometry,
                source_module: "equations/slab.rs",
                source_function: "edge_contact_radius",
            },

            Equation::EquivalentContactRadius => EquationMetadata {
                name: "Equivalent Contact Radius",
                description: "Adjusted radius for small contact areas on thick slabs",
                formula_plain: "b = a for a >= 1.72h, else b = sqrt(1.6a^2 + h^2) - 0.675h",
                reference: CodeReference::Westergaard { year: 1926 },
                variables: vec![
                    Variable::new("a", "Contact radius", "mm"),
                    Variable::new("h", "Slab thickness", "mm"),
                    Variable::new("b", "Equivalent contact radius", "mm"),
                ],
                assumptions: vec!["Re-evaluated at every trial thickness"],
                category: EquationCategory::ContactGeometry,
                source_module: "equations/slab.rs",
                source_function: "equivalent_contact_radius",
            },

            Equation::RadiusOfRelativeStiffness => EquationMetadata {
                name: "Radius of Relative Stiffness",
                description: "Characteristic length of a slab on an elastic foundation",
                formula_plain: "l = (E * h^3 / (12 * (1 - mu^2) * k))^0.25",
                reference: CodeReference::Westergaard { year: 1926 },
                variables: vec![
                    Variable::new("E", "Elastic modulus of concrete", "MPa"),
                    Variable::new("h", "Slab thickness", "mm"),
                    Variable::new("mu", "Poisson's ratio", "-"),
                    Variable::new("k", "Modulus of subgrade reaction", "MN/m³ (x 10^-3 N/mm³)"),
                ],
                assumptions: vec!["Winkler foundation", "Homogeneous isotropic slab"],
                category: EquationCategory::Stiffness,
                source_module: "equations/slab.rs",
                source_function: "radius_of_relative_stiffness",
            },

            Equation::InteriorStress => EquationMetadata {
                name: "Interior Load Stress",
                description: "Maximum flexural stress under a load remote from edges",
                formula_plain: "sigma_i = 0.275 * (1 + mu) * (P / h^2) * [4 * log10(l / b) + 1.069]",
                reference: CodeReference::Westergaard { year: 1926 },
                variables: vec![
                    Variable::new("P", "Load on the contact area", "N"),
                    Variable::new("h", "Slab thickness", "mm"),
                    Variable::new("l", "Radius of relative stiffness", "mm"),
                    Variable::new("b", "Equivalent contact radius", "mm"),
                ],
                assumptions: vec!["Full subgrade contact", "Negative results clamp to zero"],
                category: EquationCategory::Stresses,
                source_module: "equations/slab.rs",
                source_function: "interior_stress",
            },

            Equation::EdgeStress => EquationMetadata {
                name: "Edge Load Stress",
                description: "Maximum flexural stress under a load at a free edge",
                formula_plain: "sigma_e = 0.529 * (1 + 0.54 * mu) * (P / h^2) * [4 * log10(l / b) + 0.359]",
                reference: CodeReference::Westergaard { year: 1926 },
                variables: vec![
                    Variable::new("P", "Load on the contact area", "N"),
                    Variable::new("b", "Equivalent contact radius (edge)", "mm"),
                ],
                assumptions: vec!["Edge radius a_e = sqrt(2) * a"],
                category: EquationCategory::Stresses,
                source_module: "equations/slab.rs",
                source_function: "edge_stress",
            },

            Equation::CornerStress => EquationMetadata {
                name: "Corner Load Stress",
                description: "Maximum flexural stress under a load at a free corner",
                formula_plain: "sigma_c = 3 * (P / h^2) * [1 - (b * sqrt(2) / l)^0.6]",
                reference: CodeReference::Westergaard { year: 1926 },
                variables: vec![
                    Variable::new("P", "Load on the contact area", "N"),
                    Variable::new("b", "Equivalent contact radius (edge)", "mm"),
                ],
                assumptions: vec!["Corner bisector loading"],
                category: EquationCategory::Stresses,
                source_module: "equations/slab.rs",
                source_function: "corner_stress",
            },

            Equation::JointLoadTransfer => EquationMetadata {
                name: "Joint Load Transfer",
                description: "Reduction of edge and corner stress across dowelled or tied joints",
                formula_plain: "sigma_e' = 0.85 * sigma_e, sigma_c' = 0.70 * sigma_c",
                reference: CodeReference::Tm38 { topic: "Joints" },
                variables: vec![],
                assumptions: vec!["Applies only to dowelled or tied joints"],
                category: EquationCategory::Stresses,
                source_module: "calculations/stress.rs",
                source_function: "DesignParameters::joint_factor",
            },

            Equation::InfluenceSuperposition => EquationMetadata {
                name: "Neighbour Superposition",
                description: "Stress added by nearby legs or wheels via influence curves",
                formula_plain: "sigma_adj = sum(sigma_n * f(d / l))",
                reference: CodeReference::Tm38 { topic: "Multiple loads" },
                variables: vec![
                    Variable::new("sigma_n", "Neighbour's own baseline stress", "MPa"),
                    Variable::new("d", "Centre-to-centre distance", "mm"),
                    Variable::new("f", "Influence fraction (interpolated)", "-"),
                ],
                assumptions: vec![
                    "Neighbours carry the same load as the primary point",
                    "Influence clamped to the end values outside the curve",
                ],
                category: EquationCategory::Superposition,
                source_module: "calculations/influence.rs",
                source_function: "influence",
            },

            Equation::FactoredStress => EquationMetadata {
                name: "Factored Stress",
                description: "Combined stress multiplied by the load factor",
                formula_plain: "sigma = 1.5 * (sigma_primary + sigma_adj)",
                reference: CodeReference::Tm38 { topic: "Load factors" },
                variables: vec![Variable::new("1.5", "Default load factor", "-")],
                assumptions: vec!["Load factor configurable"],
                category: EquationCategory::Superposition,
                source_module: "calculations/stress.rs",
                source_function: "StressEngine::evaluate",
            },

            Equation::ThicknessCheck => EquationMetadata {
                name: "Thickness Check",
                description: "Minimum trial thickness whose factored stress does not exceed the allowable",
                formula_plain: "sigma(h) <= f_allow, h = 125, 126, ... 800 mm",
                reference: CodeReference::Tm38 { topic: "Thickness design" },
                variables: vec![Variable::new("h", "Trial thickness", "mm")],
                assumptions: vec!["Search range and step configurable", "Exhausted search reported as inadequate"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/thickness.rs",
                source_function: "solve",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::PenetrometerToCbr,
    Equation::SubgradeModulusFromCbr,
    Equation::SubBaseEnhancement,
    Equation::ElasticModulus,
    Equation::ModulusOfRupture,
    Equation::AllowableStress,
    Equation::AreaEquivalentRadius,
    Equation::TyreContactRadius,
    Equation::DualTyreContactRadius,
    Equation::EdgeContactRadius,
    Equation::EquivalentContactRadius,
    Equation::RadiusOfRelativeStiffness,
    Equation::InteriorStress,
    Equation::EdgeStress,
    Equation::CornerStress,
    Equation::JointLoadTransfer,
    Equation::InfluenceSuperposition,
    Equation::FactoredStress,
    Equation::ThicknessCheck,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Where the equation was applied (e.g., "Corner case")
    pub context: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Unique equations in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Render the full equation list as markdown for auditing.
///
/// # Example
///
/// ```rust
/// use slab_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Radius of Relative Stiffness"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Slab Designer Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `slab_cli --equations`

Every formula used to size a ground-bearing slab, with its reference and the
function that implements it.

## Units

| Quantity | Unit |
|----------|------|
| Thickness, radii, distances | mm |
| Loads | N (inputs in kN) |
| Stresses, moduli | MPa |
| Subgrade modulus | MN/m³ |

---

"#,
    );

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        EquationCategory::ALL.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "{:?} missing name", eq);
            assert!(!meta.formula_plain.is_empty(), "{:?} missing formula", eq);
            assert!(!meta.source_module.is_empty(), "{:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "{:?} missing source_function", eq);
        }
    }

    #[test]
    fn test_every_category_used() {
        for category in EquationCategory::ALL {
            assert!(
                !Equation::in_category(category).is_empty(),
                "{:?} has no equations",
                category
            );
        }
    }

    #[test]
    fn test_citations() {
        assert_eq!(CodeReference::Westergaard { year: 1926 }.citation(), "Westergaard (1926)");
        assert_eq!(
            CodeReference::Nzs3101 { clause: "5.2.3" }.citation(),
            "NZS 3101 Clause 5.2.3"
        );
        assert_eq!(CodeReference::Tm38 { topic: "Joints" }.short_form(), "TM38");
    }

    #[test]
    fn test_tracker_deduplicates() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::CornerStress, "Corner");
        tracker.record(Equation::ElasticModulus, "Concrete");
        tracker.record(Equation::CornerStress, "Corner again");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::CornerStress, Equation::ElasticModulus]
        );
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();
        assert!(markdown.starts_with("# Slab Designer Equations Reference"));
        for category in EquationCategory::ALL {
            assert!(markdown.contains(&format!("## {}", category.display_name())));
        }
        assert!(markdown.contains("### Interior Load Stress"));
        assert!(markdown.contains("Westergaard (1926)"));
        assert!(markdown.contains("equations/slab.rs"));
        assert!(markdown.contains("**Total Equations:** 19"));
        assert!(markdown.contains("**Categories:** 7"));
    }
}
