//! # Slab Designer CLI
//!
//! Runs a slab design from a JSON input file and prints a summary table, or
//! the full result as JSON with `--json`. With no input file a built-in
//! racking example is run.
//!
//! ```text
//! slab_cli [input.json] [--json] [--equations]
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=slab_core=debug` to see each case.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use slab_core::calculations::{calculate, SlabDesignInput, SlabDesignResult};
use slab_core::equations::generate_equations_markdown;
use slab_core::geometry::ContactFootprint;
use slab_core::loads::{JointType, Layout, RackLayout};
use slab_core::materials::{ConcreteProperties, GroundInput, LoadRepetitions};
use slab_core::settings::SolverSettings;

const USAGE: &str = "Usage: slab_cli [input.json] [--json] [--equations]";

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    json: bool,
    equations: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Option<Self>> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--equations" => parsed.equations = true,
                "-h" | "--help" => return Ok(None),
                flag if flag.starts_with('-') => bail!("unknown option '{}'\n{}", flag, USAGE),
                path => {
                    if parsed.input.is_some() {
                        bail!("only one input file may be given\n{}", USAGE);
                    }
                    parsed.input = Some(PathBuf::from(path));
                }
            }
        }
        Ok(Some(parsed))
    }
}

/// JSON envelope written with `--json`
#[derive(Serialize)]
struct Report<'a> {
    calculated_at: DateTime<Utc>,
    input: &'a SlabDesignInput,
    result: &'a SlabDesignResult,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let Some(args) = Args::parse(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    if args.equations {
        print!("{}", generate_equations_markdown());
        return Ok(());
    }

    let input = match &args.input {
        Some(path) => load_input(path)?,
        None => {
            info!("no input file given, running the built-in racking example");
            demo_input()
        }
    };

    let result = match calculate(&input) {
        Ok(result) => result,
        Err(e) => {
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return Err(e).with_context(|| format!("design '{}' failed", input.label));
        }
    };

    if args.json {
        let report = Report {
            calculated_at: Utc::now(),
            input: &input,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&input, &result);
    }

    info!(
        governing = %result.governing,
        thickness_mm = result.governing_thickness_mm,
        pass = result.passes(),
        "design finished"
    );
    Ok(())
}

fn load_input(path: &Path) -> Result<SlabDesignInput> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn demo_input() -> SlabDesignInput {
    SlabDesignInput {
        label: "Demo racking".to_string(),
        ground: GroundInput::cbr(5.0).with_sub_base(150.0),
        concrete: ConcreteProperties::new(32.0).with_repetitions(LoadRepetitions::UpTo50000),
        joint: JointType::Dowel,
        layout: Layout::SingleRack(RackLayout {
            leg_load_kn: 60.0,
            baseplate: ContactFootprint::Square { side_mm: 100.0 },
            leg_spacing_mm: 2700.0,
            frame_depth_mm: 1100.0,
        }),
        settings: SolverSettings::default(),
    }
}

fn print_report(input: &SlabDesignInput, result: &SlabDesignResult) {
    let p = &result.parameters;

    println!("═══════════════════════════════════════════════════════════");
    println!("  SLAB THICKNESS DESIGN: {}", result.label);
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Layout:    {} ({})", result.layout, input.layout.footprint().describe());
    println!("  Ground:    {}", input.ground.assessment.display_name());
    println!(
        "  Concrete:  f'c = {:.0} MPa, {}, {}",
        input.concrete.fc_mpa, input.concrete.age, input.concrete.repetitions
    );
    println!("  Joints:    {}", input.joint);
    println!();
    println!("Derived:");
    println!(
        "  k  = {:.0} MN/m³ (CBR {:.1}, sub-base x{:.2})",
        p.subgrade.design_k_mn_m3, p.subgrade.equivalent_cbr, p.subgrade.sub_base_factor
    );
    println!("  E  = {:.0} MPa", p.elastic_modulus_mpa);
    println!(
        "  fr = {:.2} MPa (k1 = {:.2}, k2 = {:.2}), allowable = {:.2} MPa",
        p.allowable.modulus_of_rupture_mpa,
        p.allowable.k1,
        p.allowable.k2,
        p.allowable.allowable_mpa
    );
    println!();
    println!("Load Cases:");
    println!("  {:<22} {:>6} {:>8} {:>8} {:>6}", "Case", "h (mm)", "σ (MPa)", "ℓ (mm)", "Util");
    for case in &result.cases {
        println!(
            "  {:<22} {:>6} {:>8.2} {:>8.0} {:>6.2} {}",
            case.case.display_name(),
            case.thickness_mm,
            case.stress_mpa,
            case.radius_of_relative_stiffness_mm,
            case.utilisation(),
            status_icon(case.adequate)
        );
    }
    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!(
        "  RESULT: {} - {} mm (governs: {})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_thickness_mm,
        result.governing
    );
    println!("═══════════════════════════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Option<Args>> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_flags_and_path() {
        let a = args(&["design.json", "--json"]).unwrap().unwrap();
        assert_eq!(a.input, Some(PathBuf::from("design.json")));
        assert!(a.json);
        assert!(!a.equations);
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_help() {
        assert!(args(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn test_demo_input_designs() {
        let result = calculate(&demo_input()).unwrap();
        assert_eq!(result.cases.len(), 4);
    }
}
