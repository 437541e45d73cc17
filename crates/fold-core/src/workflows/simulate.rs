use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::Simulation;
use nalgebra::Point2;
use tracing::{info, instrument};

/// How many frames advance between progress reports.
const REPORT_BATCH: u64 = 50;

/// Summary of a headless run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub frames: u64,
    pub final_energy: f64,
    pub energy_min: Option<f64>,
    pub energy_max: Option<f64>,
    pub mean_pairwise_distance: f64,
    /// Distance from the cluster centroid to the canvas center.
    pub centroid_offset: f64,
    pub cooling: f64,
}

/// Drives the simulator for a fixed number of frames at a fixed timestep and
/// summarizes where it ended up. The host keeps ownership of the simulator
/// and can keep stepping or inspect it afterwards.
#[instrument(skip_all, name = "simulate_workflow")]
pub fn run(
    sim: &mut Simulation,
    frames: u64,
    dt_ms: f64,
    reporter: &ProgressReporter,
) -> SimulationReport {
    info!(
        frames,
        dt_ms,
        residues = sim.chain().len(),
        solvent = %sim.solvent(),
        bias = %sim.bias(),
        "starting headless run"
    );
    reporter.report(Progress::RunStart {
        total_frames: frames,
    });

    let mut advanced = 0u64;
    while advanced < frames {
        let batch = REPORT_BATCH.min(frames - advanced);
        for _ in 0..batch {
            sim.frame(dt_ms);
        }
        advanced += batch;
        reporter.report(Progress::FramesAdvanced { count: batch });
    }

    reporter.report(Progress::RunFinish);

    let center = Point2::new(sim.width() * 0.5, sim.height() * 0.5);
    let bounds = sim.energy().bounds();
    let report = SimulationReport {
        frames,
        final_energy: sim.energy().current(),
        energy_min: bounds.map(|(min, _)| min),
        energy_max: bounds.map(|(_, max)| max),
        mean_pairwise_distance: sim.chain().mean_pairwise_distance(),
        centroid_offset: (sim.chain().centroid() - center).norm(),
        cooling: sim.cooling(),
    };
    info!(
        final_energy = report.final_energy,
        mean_pairwise_distance = report.mean_pairwise_distance,
        "headless run finished"
    );
    report
}
