use super::forces::ForceBuffer;
use crate::core::models::chain::Chain;
use nalgebra::Vector2;

/// Milliseconds per frame at the 60 fps reference rate dt normalizes to.
pub const FRAME_MS: f64 = 16.67;
/// Fraction of the accumulated force fed into the velocity each step.
const FORCE_TO_VELOCITY: f64 = 0.1;
/// Per-step velocity damping.
const DAMPING: f64 = 0.88;
/// Hard containment inset from every canvas edge.
pub const HARD_INSET: f64 = 20.0;
/// Velocity multiplier on wall contact (an inelastic bounce).
const BOUNCE: f64 = -0.4;
/// Fraction of the centroid-to-center vector applied as drift correction.
const RECENTER_FRACTION: f64 = 0.05;

/// Advances every residue by one step: semi-implicit velocity update with
/// damping, position advance, hard containment with an inelastic bounce,
/// optional trail recording, and a gentle recentring of the whole cluster.
pub fn integrate(
    chain: &mut Chain,
    forces: &ForceBuffer,
    dt_ms: f64,
    speed: f64,
    width: f64,
    height: f64,
    record_trails: bool,
) {
    let sdt = (dt_ms / FRAME_MS) * speed;
    let x_max = width - HARD_INSET;
    let y_max = height - HARD_INSET;

    for (i, residue) in chain.residues_mut().iter_mut().enumerate() {
        residue.velocity = (residue.velocity + forces.get(i) * FORCE_TO_VELOCITY * sdt) * DAMPING;
        residue.position += residue.velocity * sdt;

        if residue.position.x < HARD_INSET {
            residue.position.x = HARD_INSET;
            residue.velocity.x *= BOUNCE;
        } else if residue.position.x > x_max {
            residue.position.x = x_max;
            residue.velocity.x *= BOUNCE;
        }
        if residue.position.y < HARD_INSET {
            residue.position.y = HARD_INSET;
            residue.velocity.y *= BOUNCE;
        } else if residue.position.y > y_max {
            residue.position.y = y_max;
            residue.velocity.y *= BOUNCE;
        }

        if record_trails {
            residue.record_trail();
        }
    }

    recenter(chain, width, height);
}

/// Shifts every residue by a fixed fraction of the centroid-to-center
/// vector. A drift correction, not a hard constraint; the shifted positions
/// are clamped so the correction never carries a residue past the inset.
fn recenter(chain: &mut Chain, width: f64, height: f64) {
    if chain.is_empty() {
        return;
    }
    let centroid = chain.centroid();
    let shift = Vector2::new(
        (width * 0.5 - centroid.x) * RECENTER_FRACTION,
        (height * 0.5 - centroid.y) * RECENTER_FRACTION,
    );
    for residue in chain.residues_mut() {
        residue.position += shift;
        residue.position.x = residue.position.x.clamp(HARD_INSET, width - HARD_INSET);
        residue.position.y = residue.position.y.clamp(HARD_INSET, height - HARD_INSET);
    }
}
