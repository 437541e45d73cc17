use crate::cli::SequenceArgs;
use crate::error::{CliError, Result};
use hydrofold::core::models::residue::Polarity;
use hydrofold::core::models::sequence::Sequence;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

pub fn run(args: SequenceArgs) -> Result<()> {
    let sequence = match (&args.sequence, args.random) {
        (_, Some(length)) => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Sequence::random(length, &mut rng)
        }
        (Some(raw), None) => Sequence::parse(raw)
            .map_err(|e| CliError::Argument(format!("cannot use '{}': {}", raw, e)))?,
        (None, None) => unreachable!("clap enforces sequence or --random"),
    };
    debug!(residues = sequence.len(), "sequence resolved");

    let mut hydrophobic = 0usize;
    println!("{:<6} {:<15} {:>10}  {}", "Code", "Name", "Hydropathy", "Polarity");
    for entry in sequence.iter() {
        let polarity = Polarity::from_hydropathy(entry.hydropathy);
        if polarity == Polarity::Hydrophobic {
            hydrophobic += 1;
        }
        println!(
            "{:<6} {:<15} {:>10.1}  {}",
            entry.code, entry.name, entry.hydropathy, polarity
        );
    }
    println!();
    println!(
        "{} residues: {} hydrophobic, {} polar ({})",
        sequence.len(),
        hydrophobic,
        sequence.len() - hydrophobic,
        sequence.codes()
    );

    Ok(())
}
