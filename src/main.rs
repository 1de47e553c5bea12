use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use agriroute::config::FileConfig;
use agriroute::domain::{DroneParams, Point2D};
use agriroute::geometry::Bounds;
use agriroute::planner::{PlanError, RouteSummary, plan};
use agriroute::project::{load_project, save_project};

/// Plan coverage spraying routes with refuel trips for an agricultural drone
///
/// Examples:
///   # Plan the route for a project and store it back in the same file
///   agriroute field.agriplan
///
///   # Try a smaller tank without touching the project file
///   agriroute field.agriplan --tank-volume 8 --dry-run
///
///   # Write the planned project elsewhere, overriding the base point
///   agriroute field.agriplan --base=-10,-10 -o planned.agriplan
#[derive(Parser, Debug)]
#[command(name = "agriroute")]
#[command(version, about, long_about = None)]
struct Args {
    /// Project file (.agriplan JSON) with field polygons and base point
    project: PathBuf,

    /// Output project file (defaults to overwriting the input project)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Path to config file (optional, auto-searches agriroute.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tank capacity in fuel units
    #[arg(long)]
    tank_volume: Option<f64>,

    /// Spray swath width in meters (also the distance between passes)
    #[arg(long)]
    spray_width: Option<f64>,

    /// Fuel used per meter of travel per meter of swath while spraying
    #[arg(long)]
    consumption_rate: Option<f64>,

    /// Speed while spraying
    #[arg(long)]
    work_speed: Option<f64>,

    /// Speed while flying to and from base
    #[arg(long)]
    transport_speed: Option<f64>,

    /// Base point as X,Y in map meters
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    base: Option<Point2D>,

    /// Plan and report without writing the project file
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    /// `--verbose` or `verbose = true` in the config file
    fn verbose_with(&self, config: &FileConfig) -> bool {
        self.verbose || config.verbose
    }

    fn apply_overrides(&self, params: DroneParams) -> DroneParams {
        DroneParams {
            tank_volume: self.tank_volume.unwrap_or(params.tank_volume),
            spray_width: self.spray_width.unwrap_or(params.spray_width),
            consumption_rate: self.consumption_rate.unwrap_or(params.consumption_rate),
            work_speed: self.work_speed.unwrap_or(params.work_speed),
            transport_speed: self.transport_speed.unwrap_or(params.transport_speed),
        }
    }
}

fn parse_point(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid X '{}': {}", x, e))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid Y '{}': {}", y, e))?;
    Ok((x, y))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::from_path(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };
    let verbose = args.verbose_with(&file_config);
    init_logging(verbose);
    let output_path = args
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| args.project.clone());

    println!("agriroute - Drone Spray Route Planner");
    println!("=====================================");
    println!();

    let spinner = create_spinner("Loading project...");
    let start = Instant::now();
    let mut project = load_project(&args.project)?;
    spinner.finish_with_message(format!(
        "Loaded {} polygons from {} [{:.1}s]",
        project.polygons.len(),
        args.project.display(),
        start.elapsed().as_secs_f32()
    ));

    let mut input = project.plan_input(file_config.drone);
    input.drone_params = args.apply_overrides(input.drone_params);
    input.base_point = args
        .base
        .or(input.base_point)
        .or(file_config.base_point);

    if verbose {
        let params = &input.drone_params;
        println!("Configuration:");
        println!("  Tank volume: {}", params.tank_volume);
        println!("  Spray width: {}m", params.spray_width);
        println!("  Consumption rate: {}", params.consumption_rate);
        println!("  Work speed: {}", params.work_speed);
        println!("  Transport speed: {}", params.transport_speed);
        if let Some((x, y)) = input.base_point {
            println!("  Base point: ({:.2}, {:.2})", x, y);
        }
        if let Some(bounds) = Bounds::from_polygons(&input.polygons) {
            println!(
                "  Field extent: {:.1}m x {:.1}m",
                bounds.width(),
                bounds.height()
            );
        }
        println!("  Output: {}", output_path.display());
        println!();
    }

    let spinner = create_spinner("Planning coverage route...");
    let start = Instant::now();
    let route = match plan(&input) {
        Ok(route) => route,
        Err(PlanError::DegenerateField) => {
            spinner.finish_with_message("No coverable area found");
            println!();
            println!("{}", PlanError::DegenerateField);
            println!("Project left unchanged.");
            return Ok(());
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    let summary = RouteSummary::from_route(&route, &input.drone_params);
    spinner.finish_with_message(format!(
        "Built {} route segments with {} refuel stops [{:.1}s]",
        route.len(),
        summary.refuel_stops,
        start.elapsed().as_secs_f32()
    ));

    if args.dry_run {
        println!("Dry run: project not written");
    } else {
        let spinner = create_spinner("Writing project...");
        project.route = route;
        project.base_point = input.base_point;
        project.drone_params = Some(input.drone_params);
        save_project(&output_path, &project)?;
        spinner.finish_with_message(format!("Wrote {}", output_path.display()));
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    print_route_summary(&summary);

    Ok(())
}

fn print_route_summary(summary: &RouteSummary) {
    println!("Route summary");
    println!("=============");
    println!("  Work passes:        {}", summary.work_segments);
    println!("  Refuel stops:       {}", summary.refuel_stops);
    println!("  Sprayed distance:   {:.1}m", summary.work_distance);
    println!("  Transport distance: {:.1}m", summary.transport_distance);
    println!(
        "  Spraying share:     {:.0}%",
        summary.work_ratio() * 100.0
    );
    println!("  Fuel sprayed:       {:.2}", summary.fuel_sprayed);
    println!("  Est. flight time:   {:.1}", summary.flight_time);
}

fn default_log_level(verbose: bool) -> tracing::Level {
    if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_log_level(verbose).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
