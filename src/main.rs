//! TIN Contour CLI Application

use clap::Parser;
use std::path::PathBuf;
use tin_contour::config::ContourConfig;
use tin_contour::mesh::{Tin, VertexIdentity};
use tin_contour::{generate_contours_with, Result, TinContourError};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Info { input } => cmd_info(input),
        Commands::Contour {
            input,
            interval,
            tolerance,
            config,
            serial,
        } => cmd_contour(input, interval, tolerance, config, serial),
    }
}

fn cmd_info(input: PathBuf) -> Result<()> {
    println!("Reading mesh file: {}", input.display());

    let triangles = tin_contour::io::read_mesh(&input)?;
    let tin = Tin::new(triangles);
    let bounds = tin.bounds();
    let stats = tin.stats();

    println!("\n{}", "=".repeat(60));
    println!("MESH INFORMATION");
    println!("{}", "=".repeat(60));
    println!();
    println!("  Triangles:      {}", tin.num_triangles());
    println!("  Flat triangles: {}", tin.num_flat_triangles());
    println!("  Edges:          {}", tin.num_edges());
    println!("  Boundary edges: {}", stats.boundary_edges);
    println!("  Shared edges:   {}", stats.shared_edges);
    println!("  Watertight:     {}", tin.is_watertight());
    println!();

    if stats.non_manifold_edges > 0 || stats.inconsistent_edges > 0 {
        println!("Defects:");
        println!("  - Non-manifold edges:  {}", stats.non_manifold_edges);
        println!("  - Inconsistent edges:  {}", stats.inconsistent_edges);
        println!();
    }

    if !bounds.is_empty() {
        println!("Bounding Box:");
        println!(
            "  - Min: ({:.3}, {:.3}, {:.3})",
            bounds.min.x, bounds.min.y, bounds.min.z
        );
        println!(
            "  - Max: ({:.3}, {:.3}, {:.3})",
            bounds.max.x, bounds.max.y, bounds.max.z
        );
        let [dx, dy, dz] = bounds.size();
        println!("  - Size: ({:.3}, {:.3}, {:.3})", dx, dy, dz);
        println!();
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

fn cmd_contour(
    input: Option<PathBuf>,
    interval: Option<f64>,
    tolerance: Option<f64>,
    config_path: Option<PathBuf>,
    serial: bool,
) -> Result<()> {
    let mut config = match (&config_path, &input, interval) {
        (Some(path), _, _) => ContourConfig::from_file(path)?,
        (None, Some(input), Some(interval)) => {
            ContourConfig::new(input.display().to_string(), interval)
        }
        _ => {
            return Err(TinContourError::ConfigError(
                "Either --config or both FILE and --interval are required".to_string(),
            ))
        }
    };

    // Command-line flags override the config file
    if let Some(input) = input {
        config.input_file = input.display().to_string();
    }
    if let Some(interval) = interval {
        config.interval = interval;
    }
    if let Some(tolerance) = tolerance {
        config.vertex_identity = VertexIdentity::Quantized { tolerance };
    }
    if serial {
        config.parallel = false;
    }
    config.validate()?;

    println!("Reading mesh file: {}", config.input_file);
    let triangles = tin_contour::io::read_mesh(&config.input_file)?;
    let tin = Tin::build(triangles, config.vertex_identity)?;

    let contours = generate_contours_with(&tin, &config.options());
    contours.print_summary();

    Ok(())
}
