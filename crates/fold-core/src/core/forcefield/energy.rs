use super::params::{SimulationParams, SolventMode};
use crate::core::models::chain::Chain;
use crate::core::models::residue::Polarity;
use crate::core::utils::geometry::{self, MIN_DISTANCE};
use nalgebra::Point2;

/// Range of the pairwise energy term, slightly tighter than the force range.
pub const PAIR_ENERGY_RANGE: f64 = 90.0;
/// Scale of the radial exposure term.
const RADIAL_ENERGY_SCALE: f64 = 0.05;

/// Harmonic bond energy over adjacent residue pairs.
pub fn bond_energy(chain: &Chain, params: &SimulationParams) -> f64 {
    let residues = chain.residues();
    chain
        .bonds()
        .map(|(i, j)| {
            let (_, dist) = geometry::separation(
                &residues[i].position,
                &residues[j].position,
                MIN_DISTANCE,
            );
            let ext = dist - params.rest_length;
            0.5 * params.bond_k * ext * ext
        })
        .sum()
}

/// Pairwise interaction energy: favorable (positive-eps) contacts within
/// [`PAIR_ENERGY_RANGE`] lower the total.
pub fn pair_energy(chain: &Chain, params: &SimulationParams, solvent: SolventMode) -> f64 {
    let residues = chain.residues();
    let mut total = 0.0;
    for i in 0..residues.len() {
        for j in (i + 1)..residues.len() {
            let (_, dist) = geometry::separation(
                &residues[i].position,
                &residues[j].position,
                MIN_DISTANCE,
            );
            if dist < PAIR_ENERGY_RANGE {
                let eps = params.pair_eps.strength(
                    solvent,
                    residues[i].polarity(),
                    residues[j].polarity(),
                );
                total -= eps * (1.0 - dist / PAIR_ENERGY_RANGE);
            }
        }
    }
    total
}

/// Radial exposure energy: rewards residues sitting at their solvent-preferred
/// distance from the canvas center. Zero in the intermediate regime.
pub fn radial_energy(
    chain: &Chain,
    params: &SimulationParams,
    solvent: SolventMode,
    width: f64,
    height: f64,
) -> f64 {
    let center = Point2::new(width * 0.5, height * 0.5);
    let half_width = width * 0.5;
    let mut total = 0.0;
    for residue in chain.residues() {
        let dist = (center - residue.position).norm();
        let pref = match solvent {
            SolventMode::Water => match residue.polarity() {
                Polarity::Hydrophobic => dist,
                Polarity::Polar => half_width - dist,
            },
            SolventMode::Membrane => match residue.polarity() {
                Polarity::Polar => dist,
                Polarity::Hydrophobic => half_width - dist,
            },
            SolventMode::Intermediate => 0.0,
        };
        total -= params.radial_k * RADIAL_ENERGY_SCALE * pref;
    }
    total
}

/// The heuristic scalar potential energy: bond + pairwise + radial terms.
/// Unitless; lower reads as more stable.
pub fn total(
    chain: &Chain,
    params: &SimulationParams,
    solvent: SolventMode,
    width: f64,
    height: f64,
) -> f64 {
    bond_energy(chain, params)
        + pair_energy(chain, params, solvent)
        + radial_energy(chain, params, solvent, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::Sequence;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOLERANCE: f64 = 1e-9;

    fn placed_chain(raw: &str, positions: &[(f64, f64)]) -> Chain {
        let sequence = Sequence::parse(raw).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let mut chain = Chain::from_sequence(&sequence, 800.0, 500.0, &mut rng);
        for (residue, &(x, y)) in chain.residues_mut().iter_mut().zip(positions) {
            residue.position = Point2::new(x, y);
        }
        chain
    }

    #[test]
    fn bond_energy_is_zero_at_rest_length() {
        let chain = placed_chain("III", &[(0.0, 0.0), (16.0, 0.0), (32.0, 0.0)]);
        assert!(bond_energy(&chain, &SimulationParams::default()).abs() < TOLERANCE);
    }

    #[test]
    fn bond_energy_grows_quadratically_with_extension() {
        let params = SimulationParams::default();
        let chain = placed_chain("III", &[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0)]);
        // Two bonds, each extended by 4: 2 * 0.5 * 0.75 * 16
        assert!((bond_energy(&chain, &params) - 12.0).abs() < TOLERANCE);
    }

    #[test]
    fn pair_energy_is_negative_for_attractive_contacts() {
        let params = SimulationParams::default();
        // Hydrophobic residues near each other in water: favorable.
        let chain = placed_chain("III", &[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0)]);
        assert!(pair_energy(&chain, &params, SolventMode::Water) < 0.0);
    }

    #[test]
    fn pair_energy_ignores_pairs_beyond_the_range() {
        let params = SimulationParams::default();
        let chain = placed_chain("III", &[(0.0, 0.0), (200.0, 0.0), (400.0, 0.0)]);
        assert_eq!(pair_energy(&chain, &params, SolventMode::Water), 0.0);
    }

    #[test]
    fn pair_energy_sign_flips_for_repulsive_mixed_pairs() {
        let params = SimulationParams::default();
        // I (hydrophobic) next to R (polar): eps is negative, raising energy.
        let chain = placed_chain("IRI", &[(0.0, 0.0), (20.0, 0.0), (400.0, 0.0)]);
        assert!(pair_energy(&chain, &params, SolventMode::Water) > 0.0);
    }

    #[test]
    fn radial_energy_follows_the_tuned_preference_formula() {
        let params = SimulationParams::default();
        let centered = placed_chain("III", &[(400.0, 250.0), (400.0, 250.0), (400.0, 250.0)]);
        let rimmed = placed_chain("III", &[(700.0, 250.0), (700.0, 250.0), (700.0, 250.0)]);
        // pref = dist for hydrophobic residues in water, so the rim placement
        // scores lower on this term.
        let e_center = radial_energy(&centered, &params, SolventMode::Water, 800.0, 500.0);
        let e_rim = radial_energy(&rimmed, &params, SolventMode::Water, 800.0, 500.0);
        assert!(e_rim < e_center);
        // Swapping solvent to membrane flips which placement is preferred.
        let m_center = radial_energy(&centered, &params, SolventMode::Membrane, 800.0, 500.0);
        let m_rim = radial_energy(&rimmed, &params, SolventMode::Membrane, 800.0, 500.0);
        assert!(m_center < m_rim);
    }

    #[test]
    fn radial_energy_is_zero_in_the_intermediate_regime() {
        let params = SimulationParams::default();
        let chain = placed_chain("IRI", &[(100.0, 100.0), (200.0, 200.0), (300.0, 300.0)]);
        assert_eq!(
            radial_energy(&chain, &params, SolventMode::Intermediate, 800.0, 500.0),
            0.0,
        );
    }

    #[test]
    fn total_combines_all_three_terms() {
        let params = SimulationParams::default();
        let chain = placed_chain("IRV", &[(380.0, 250.0), (400.0, 250.0), (420.0, 250.0)]);
        let sum = bond_energy(&chain, &params)
            + pair_energy(&chain, &params, SolventMode::Water)
            + radial_energy(&chain, &params, SolventMode::Water, 800.0, 500.0);
        let combined = total(&chain, &params, SolventMode::Water, 800.0, 500.0);
        assert!((sum - combined).abs() < TOLERANCE);
    }

    #[test]
    fn total_is_finite_for_coincident_residues() {
        let params = SimulationParams::default();
        let chain = placed_chain("III", &[(400.0, 250.0), (400.0, 250.0), (400.0, 250.0)]);
        assert!(total(&chain, &params, SolventMode::Water, 800.0, 500.0).is_finite());
    }
}
