use clap::{Args, Parser, Subcommand};
use hydrofold::core::forcefield::params::{SolventMode, StructureBias};
use hydrofold::engine::config::Preset;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Mikkel Aarup",
    version,
    about = "hydrofold CLI - A command-line interface for hydrofold, a hydropathy-driven 2D chain-folding simulator.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a headless folding simulation and print an energy summary.
    Run(RunArgs),
    /// Parse a residue sequence and show its composition without simulating.
    Sequence(SequenceArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 1000, value_name = "INT")]
    pub frames: u64,

    /// Fixed timestep per frame in milliseconds.
    #[arg(long, default_value_t = 16.67, value_name = "MS")]
    pub dt: f64,

    /// Logical canvas width in pixels.
    #[arg(long, default_value_t = 800.0, value_name = "PX")]
    pub width: f64,

    /// Logical canvas height in pixels.
    #[arg(long, default_value_t = 500.0, value_name = "PX")]
    pub height: f64,

    /// RNG seed for a reproducible run. Entropy-seeded when omitted.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Sequence Selection ---
    /// Residue sequence to fold; characters outside the one-letter
    /// amino-acid alphabet are dropped.
    #[arg(short = 'S', long, value_name = "RESIDUES", conflicts_with = "preset")]
    pub sequence: Option<String>,

    /// Load a named preset ('core' or 'helix') instead of a sequence.
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<Preset>,

    /// Length of the initial random sequence when neither --sequence nor
    /// --preset is given.
    #[arg(short = 'n', long, default_value_t = 30, value_name = "INT")]
    pub length: usize,

    // --- Environment Controls ---
    /// Solvent regime ('water', 'membrane', or 'intermediate').
    #[arg(long, default_value = "water", value_name = "MODE")]
    pub solvent: SolventMode,

    /// Secondary-structure bias ('none', 'helix', or 'sheet').
    #[arg(long, default_value = "none", value_name = "BIAS")]
    pub bias: StructureBias,

    /// Override the temperature from the parameter file, in [0, 1].
    #[arg(short, long, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    /// Override the speed multiplier from the parameter file.
    #[arg(long, value_name = "FLOAT")]
    pub speed: Option<f64>,

    /// Path to a TOML simulation parameter file.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    // --- Output ---
    /// Write the retained energy trace to a CSV file after the run.
    #[arg(long, value_name = "PATH")]
    pub export_trace: Option<PathBuf>,
}

/// Arguments for the `sequence` subcommand.
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Sequence string to parse and inspect.
    #[arg(value_name = "RESIDUES", required_unless_present = "random")]
    pub sequence: Option<String>,

    /// Draw a random sequence of this length instead of parsing one.
    #[arg(long, value_name = "INT", conflicts_with = "sequence")]
    pub random: Option<usize>,

    /// RNG seed used with --random.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}
