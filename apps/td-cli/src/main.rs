use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use td_design::{DesignResult, DesignSpec, default_operating_point, evaluate};
use td_optimize::{
    CURRENT_DENSITY_BOUNDS, FLUX_DENSITY_BOUNDS, OptimizeTarget, ScanConfig, ScanRange,
    best_feasible, optimize, scan,
};
use td_project::{SpecFile, load_json, load_yaml, validate_spec};
use td_report::{
    DesignManifest, DesignRecord, DesignStore, compute_design_id, render_diagram, render_text,
};

#[derive(Parser)]
#[command(name = "td-cli")]
#[command(about = "TrafoWorks CLI - Power transformer design tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a design document
    Validate {
        /// Path to the design document (YAML or JSON)
        spec_path: PathBuf,
    },
    /// Evaluate a design at the standard operating point
    Design {
        /// Path to the design document (YAML or JSON)
        spec_path: PathBuf,
        /// Write the full text report to this file
        #[arg(long)]
        report: Option<PathBuf>,
        /// Write the core elevation SVG to this file
        #[arg(long)]
        diagram: Option<PathBuf>,
        /// Store the evaluated design under this directory
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Optimize the operating point and evaluate the result
    Optimize {
        /// Path to the design document (YAML or JSON)
        spec_path: PathBuf,
        /// Quantity to minimize: cost, weight or losses
        #[arg(long, default_value = "cost")]
        target: OptimizeTarget,
        /// Write the full text report to this file
        #[arg(long)]
        report: Option<PathBuf>,
        /// Write the core elevation SVG to this file
        #[arg(long)]
        diagram: Option<PathBuf>,
        /// Store the optimized design under this directory
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Evaluate a grid over the flux and current density plane
    Scan {
        /// Path to the design document (YAML or JSON)
        spec_path: PathBuf,
        /// Quantity to rank grid points by: cost, weight or losses
        #[arg(long, default_value = "cost")]
        target: OptimizeTarget,
        /// Grid steps along the flux density axis
        #[arg(long, default_value_t = 5)]
        bm_steps: usize,
        /// Grid steps along the current density axis
        #[arg(long, default_value_t = 5)]
        j_steps: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List designs in a store directory
    Designs {
        /// Design store directory
        store_dir: PathBuf,
    },
    /// Show details of a stored design
    Show {
        /// Design store directory
        store_dir: PathBuf,
        /// Design ID to display
        design_id: String,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { spec_path } => cmd_validate(&spec_path),
        Commands::Design {
            spec_path,
            report,
            diagram,
            store,
        } => cmd_design(
            &spec_path,
            report.as_deref(),
            diagram.as_deref(),
            store.as_deref(),
        ),
        Commands::Optimize {
            spec_path,
            target,
            report,
            diagram,
            store,
        } => cmd_optimize(
            &spec_path,
            target,
            report.as_deref(),
            diagram.as_deref(),
            store.as_deref(),
        ),
        Commands::Scan {
            spec_path,
            target,
            bm_steps,
            j_steps,
            output,
        } => cmd_scan(&spec_path, target, bm_steps, j_steps, output.as_deref()),
        Commands::Designs { store_dir } => cmd_designs(&store_dir),
        Commands::Show {
            store_dir,
            design_id,
        } => cmd_show(&store_dir, &design_id),
    }
}

fn cmd_validate(spec_path: &Path) -> CliResult<()> {
    println!("Validating design document: {}", spec_path.display());

    let file = parse_document(spec_path)?;
    let problems = validate_spec(&file);

    if problems.is_empty() {
        println!("✓ Document is valid");
        Ok(())
    } else {
        println!("Found {} problem(s):", problems.len());
        for problem in &problems {
            println!("  {}", problem);
        }
        std::process::exit(1);
    }
}

fn cmd_design(
    spec_path: &Path,
    report: Option<&Path>,
    diagram: Option<&Path>,
    store_dir: Option<&Path>,
) -> CliResult<()> {
    println!("Evaluating design: {}", spec_path.display());

    let file = load_document(spec_path)?;
    let spec = file.compile();
    let (bm, j) = default_operating_point(&spec);
    let result = evaluate(&spec, bm, j)?;

    println!(
        "✓ Design evaluated at Bm = {:.2} T, J = {:.2} A/mm²",
        bm, j
    );
    print_design_summary(&result);

    write_outputs(&file, &spec, &result, report, diagram, store_dir)
}

fn cmd_optimize(
    spec_path: &Path,
    target: OptimizeTarget,
    report: Option<&Path>,
    diagram: Option<&Path>,
    store_dir: Option<&Path>,
) -> CliResult<()> {
    println!(
        "Optimizing {} for minimum {}",
        spec_path.display(),
        target
    );

    let file = load_document(spec_path)?;
    let spec = file.compile();
    let outcome = optimize(&spec, target)?;

    if outcome.success {
        println!("✓ Converged in {} iterations", outcome.iterations);
    } else {
        println!(
            "Solver stopped after {} iterations: {}",
            outcome.iterations, outcome.message
        );
    }
    println!(
        "  Operating point: Bm = {:.3} T, J = {:.3} A/mm²",
        outcome.flux_density_t, outcome.current_density_a_mm2
    );
    println!("  Objective ({}): {:.2}", target, outcome.objective);
    print_design_summary(&outcome.result);

    write_outputs(&file, &spec, &outcome.result, report, diagram, store_dir)
}

fn cmd_scan(
    spec_path: &Path,
    target: OptimizeTarget,
    bm_steps: usize,
    j_steps: usize,
    output: Option<&Path>,
) -> CliResult<()> {
    let file = load_document(spec_path)?;
    let spec = file.compile();

    let flux_density = ScanRange::new(FLUX_DENSITY_BOUNDS.0, FLUX_DENSITY_BOUNDS.1, bm_steps);
    let current_density =
        ScanRange::new(CURRENT_DENSITY_BOUNDS.0, CURRENT_DENSITY_BOUNDS.1, j_steps);
    let points = scan(
        &spec,
        target,
        flux_density,
        current_density,
        &ScanConfig::default(),
    )?;

    // Build CSV
    let mut csv = String::from(
        "flux_density_t,current_density_a_mm2,objective,temperature_rise_c,efficiency,total_loss_w,total_cost_usd,feasible\n",
    );
    for p in &points {
        csv.push_str(&format!(
            "{:.4},{:.4},{:.4},{:.2},{:.5},{:.2},{:.2},{}\n",
            p.flux_density_t,
            p.current_density_a_mm2,
            p.objective,
            p.temperature_rise_c,
            p.efficiency,
            p.total_loss_w,
            p.total_cost_usd,
            p.feasible
        ));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} grid points to {}", points.len(), path.display());
        match best_feasible(&points) {
            Some(best) => println!(
                "  Best feasible point: Bm = {:.3} T, J = {:.3} A/mm² ({} {:.2})",
                best.flux_density_t, best.current_density_a_mm2, target, best.objective
            ),
            None => println!("  No feasible grid point inside the limits"),
        }
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_designs(store_dir: &Path) -> CliResult<()> {
    let store = DesignStore::new(store_dir.to_path_buf())?;
    let designs = store.list_designs()?;

    if designs.is_empty() {
        println!("No stored designs in {}", store_dir.display());
    } else {
        println!("Stored designs in {}:", store_dir.display());
        for manifest in designs {
            let name = if manifest.name.is_empty() {
                "(unnamed)"
            } else {
                manifest.name.as_str()
            };
            println!(
                "  {}  {} - {} VA, eff {:.2}% ({})",
                &manifest.design_id[..12.min(manifest.design_id.len())],
                name,
                manifest.summary.power_va,
                manifest.summary.efficiency * 100.0,
                manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show(store_dir: &Path, design_id: &str) -> CliResult<()> {
    let store = DesignStore::new(store_dir.to_path_buf())?;
    let manifest = store.load_manifest(design_id)?;
    let record = store.load_record(design_id)?;

    println!("Design: {}", manifest.design_id);
    if !manifest.name.is_empty() {
        println!("  Name: {}", manifest.name);
    }
    println!("  Stored: {}", manifest.timestamp);
    println!("  Tool version: {}", manifest.tool_version);

    println!("\nSummary:");
    println!("  Power rating: {} VA", manifest.summary.power_va);
    print_design_summary(&record.result);

    println!("\nOperating point:");
    println!(
        "  Bm = {:.3} T, J = {:.3} A/mm²",
        record.result.flux_density_t, record.result.current_density_a_mm2
    );
    println!(
        "  Core: {}, {:.1} × {:.1} mm, {:.2} cm²",
        record.result.core.shape.display_name(),
        record.result.core.width_mm,
        record.result.core.depth_mm,
        record.result.core.net_area_cm2
    );

    Ok(())
}

fn print_design_summary(result: &DesignResult) {
    println!("  Efficiency: {:.2}%", result.efficiency * 100.0);
    println!("  Total losses: {:.2} W", result.losses.total_w);
    println!(
        "  Temperature rise: {:.1} °C",
        result.thermal.temperature_rise_c
    );
    println!("  Active weight: {:.1} kg", result.active_weight_kg());
    println!("  Total cost: ${:.2}", result.cost.total_usd);
}

/// Parse without validating, for the validate command's full listing.
fn parse_document(path: &Path) -> CliResult<SpecFile> {
    let content = std::fs::read_to_string(path)?;
    let file = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(file)
}

/// Load and validate, stopping at the first problem.
fn load_document(path: &Path) -> CliResult<SpecFile> {
    let file = if is_json(path) {
        load_json(path)?
    } else {
        load_yaml(path)?
    };
    Ok(file)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn write_outputs(
    file: &SpecFile,
    spec: &DesignSpec,
    result: &DesignResult,
    report: Option<&Path>,
    diagram: Option<&Path>,
    store_dir: Option<&Path>,
) -> CliResult<()> {
    if let Some(path) = report {
        std::fs::write(path, render_text(file, result))?;
        println!("✓ Report written to {}", path.display());
    }

    if let Some(path) = diagram {
        std::fs::write(path, render_diagram(&result.core))?;
        println!("✓ Core diagram written to {}", path.display());
    }

    if let Some(dir) = store_dir {
        let tool_version = env!("CARGO_PKG_VERSION");
        let store = DesignStore::new(dir.to_path_buf())?;
        let design_id = compute_design_id(spec, tool_version);
        let manifest =
            DesignManifest::new(design_id.clone(), &file.name, tool_version, spec, result);
        let record = DesignRecord {
            spec: *spec,
            result: result.clone(),
        };
        store.save_design(&manifest, &record)?;
        println!("✓ Stored design {}", design_id);
    }

    Ok(())
}

/// Result type for CLI commands.
type CliResult<T> = Result<T, CliError>;

/// CLI error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Document error: {0}")]
    Document(String),

    #[error("Design error: {0}")]
    Design(String),

    #[error("Optimization error: {0}")]
    Optimize(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<td_project::ProjectError> for CliError {
    fn from(err: td_project::ProjectError) -> Self {
        CliError::Document(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Document(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Document(err.to_string())
    }
}

impl From<td_design::DesignError> for CliError {
    fn from(err: td_design::DesignError) -> Self {
        CliError::Design(err.to_string())
    }
}

impl From<td_optimize::OptimizeError> for CliError {
    fn from(err: td_optimize::OptimizeError) -> Self {
        CliError::Optimize(err.to_string())
    }
}

impl From<td_report::ReportError> for CliError {
    fn from(err: td_report::ReportError) -> Self {
        CliError::Report(err.to_string())
    }
}
