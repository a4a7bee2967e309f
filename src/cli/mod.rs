//! CLI commands and interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tin-contour")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display information about a triangle mesh file
    Info {
        /// Path to the mesh file (ASCII STL or JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Generate contour polylines and print a per-level summary
    Contour {
        /// Path to the mesh file (ASCII STL or JSON); overrides the config file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Contour interval, rounded to a whole unit; overrides the config file
        #[arg(short, long)]
        interval: Option<f64>,

        /// Merge vertices closer than this tolerance (exact matching if omitted)
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Slice levels on a single thread
        #[arg(long)]
        serial: bool,
    },
}
