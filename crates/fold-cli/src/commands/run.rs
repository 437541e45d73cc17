use crate::cli::RunArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use hydrofold::engine::config::SimulationConfigBuilder;
use hydrofold::engine::error::EngineError;
use hydrofold::engine::progress::ProgressReporter;
use hydrofold::engine::state::Simulation;
use hydrofold::workflows::simulate;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    let params = config::resolve_params(args.params.as_deref(), args.temperature, args.speed)?;

    let mut builder = SimulationConfigBuilder::new()
        .dimensions(args.width, args.height)
        .params(params)
        .solvent(args.solvent)
        .bias(args.bias)
        .sequence_length(args.length);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let sim_config = builder.build().map_err(EngineError::from)?;
    let mut sim = Simulation::new(sim_config);

    if let Some(preset) = args.preset {
        info!(sequence = preset.sequence(), "applying preset");
        sim.apply_preset(preset);
    } else if let Some(sequence) = &args.sequence {
        if !sim.apply_sequence(sequence) {
            return Err(CliError::Argument(format!(
                "sequence '{}' yields fewer than 3 recognized residues",
                sequence
            )));
        }
    }

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    let report = simulate::run(&mut sim, args.frames, args.dt, &reporter);
    drop(reporter);

    println!("Residues:           {} ({})", sim.chain().len(), sim.chain().codes());
    println!("Solvent / bias:     {} / {}", sim.solvent(), sim.bias());
    println!(
        "Temperature:        {:.2} ({})",
        sim.params().temperature,
        sim.temperature_band()
    );
    println!("Frames:             {}", report.frames);
    println!("Energy:             {}", sim.energy().readout());
    println!("Mean pair distance: {:.1}", report.mean_pairwise_distance);
    println!("Centroid offset:    {:.1}", report.centroid_offset);
    println!("Cooling factor:     {:.3}", report.cooling);

    if let Some(path) = &args.export_trace {
        sim.trace().export_to_path(path)?;
        info!(path = %path.display(), samples = sim.trace().len(), "energy trace exported");
        println!("Trace written to:   {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use tempfile::tempdir;

    fn run_args(argv: &[&str]) -> RunArgs {
        let mut full = vec!["fold", "run"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Run(args) => args,
            _ => panic!("expected the run subcommand"),
        }
    }

    #[test]
    fn short_seeded_run_completes() {
        let args = run_args(&["--frames", "20", "--seed", "7", "-n", "8"]);
        run(args).unwrap();
    }

    #[test]
    fn preset_run_completes() {
        let args = run_args(&["--frames", "10", "--seed", "7", "--preset", "helix"]);
        run(args).unwrap();
    }

    #[test]
    fn degenerate_sequences_are_surfaced_as_argument_errors() {
        let args = run_args(&["--frames", "1", "--seed", "1", "--sequence", "zz9"]);
        let result = run(args);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn trace_export_writes_a_csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.csv");
        let args = run_args(&[
            "--frames",
            "25",
            "--seed",
            "3",
            "-n",
            "6",
            "--export-trace",
            path.to_str().unwrap(),
        ]);
        run(args).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("frame,energy"));
        assert_eq!(content.lines().count(), 26);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let args = run_args(&["--frames", "1", "--width", "10"]);
        assert!(matches!(run(args), Err(CliError::FoldCore(_))));
    }
}
