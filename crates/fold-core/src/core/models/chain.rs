use super::residue::Residue;
use super::sequence::Sequence;
use nalgebra::Point2;
use rand::Rng;

/// Fraction of the canvas width the initial line layout spans.
const LAYOUT_SPAN: f64 = 0.7;
/// Half-range of the vertical jitter applied at layout time.
const LAYOUT_JITTER: f64 = 5.0;

/// The ordered chain of residues. Adjacency defines the N-1 covalent bonds;
/// no other structural edges are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    residues: Vec<Residue>,
}

impl Chain {
    /// Places a sequence along a horizontal line spanning 70% of the canvas
    /// width, vertically centered with small random jitter. Velocities start
    /// at zero and trails empty.
    pub fn from_sequence(
        sequence: &Sequence,
        width: f64,
        height: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let n = sequence.len();
        let spacing = width * LAYOUT_SPAN / (n.saturating_sub(1).max(1)) as f64;
        let residues = sequence
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let x = width * (1.0 - LAYOUT_SPAN) / 2.0 + i as f64 * spacing;
                let y = height * 0.5 + (rng.r#gen::<f64>() - 0.5) * (2.0 * LAYOUT_JITTER);
                Residue::new(entry, Point2::new(x, y))
            })
            .collect();
        Self { residues }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residues_mut(&mut self) -> &mut [Residue] {
        &mut self.residues
    }

    pub fn get(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    /// Index pairs of the covalent bonds (i, i+1).
    pub fn bonds(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.residues.len().saturating_sub(1)).map(|i| (i, i + 1))
    }

    /// Index pairs at a fixed offset along the chain, e.g. (i, i+3) for the
    /// helix hydrogen-bond register.
    pub fn offset_pairs(&self, offset: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.residues.len().saturating_sub(offset)).map(move |i| (i, i + offset))
    }

    pub fn centroid(&self) -> Point2<f64> {
        let n = self.residues.len().max(1) as f64;
        let (sx, sy) = self
            .residues
            .iter()
            .fold((0.0, 0.0), |(sx, sy), r| (sx + r.position.x, sy + r.position.y));
        Point2::new(sx / n, sy / n)
    }

    /// Mean distance over all unordered residue pairs; zero for chains with
    /// fewer than two residues.
    pub fn mean_pairwise_distance(&self) -> f64 {
        let n = self.residues.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        let mut pairs = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                total += (self.residues[j].position - self.residues[i].position).norm();
                pairs += 1;
            }
        }
        total / pairs as f64
    }

    /// The one-letter codes of the chain, concatenated.
    pub fn codes(&self) -> String {
        self.residues.iter().map(|r| r.code()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chain_from(raw: &str, width: f64, height: f64, seed: u64) -> Chain {
        let sequence = Sequence::parse(raw).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        Chain::from_sequence(&sequence, width, height, &mut rng)
    }

    #[test]
    fn layout_spans_seventy_percent_of_the_width() {
        let chain = chain_from("AKLAKLAK", 800.0, 500.0, 1);
        let first = chain.residues().first().unwrap();
        let last = chain.residues().last().unwrap();
        assert!((first.position.x - 120.0).abs() < 1e-9);
        assert!((last.position.x - 680.0).abs() < 1e-9);
    }

    #[test]
    fn layout_centers_vertically_with_bounded_jitter() {
        let chain = chain_from("AKLAKLAKLAKL", 800.0, 500.0, 2);
        for residue in chain.residues() {
            assert!((residue.position.y - 250.0).abs() <= 5.0);
        }
    }

    #[test]
    fn layout_zeroes_velocities_and_trails() {
        let chain = chain_from("AKLAKL", 800.0, 500.0, 3);
        for residue in chain.residues() {
            assert_eq!(residue.velocity.norm(), 0.0);
            assert_eq!(residue.trail().len(), 0);
        }
    }

    #[test]
    fn bonds_connect_exactly_adjacent_residues() {
        let chain = chain_from("AKLAK", 800.0, 500.0, 4);
        let bonds: Vec<_> = chain.bonds().collect();
        assert_eq!(bonds, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn offset_pairs_cover_the_expected_register() {
        let chain = chain_from("AKLAKLA", 800.0, 500.0, 5);
        let helix: Vec<_> = chain.offset_pairs(3).collect();
        assert_eq!(helix, vec![(0, 3), (1, 4), (2, 5), (3, 6)]);
        let sheet: Vec<_> = chain.offset_pairs(2).collect();
        assert_eq!(sheet.len(), 5);
    }

    #[test]
    fn offset_pairs_is_empty_when_offset_exceeds_length() {
        let chain = chain_from("AKL", 800.0, 500.0, 6);
        assert_eq!(chain.offset_pairs(3).count(), 0);
    }

    #[test]
    fn centroid_averages_positions() {
        let mut chain = chain_from("AKL", 100.0, 100.0, 7);
        let positions = [(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)];
        for (residue, (x, y)) in chain.residues_mut().iter_mut().zip(positions) {
            residue.position = Point2::new(x, y);
        }
        let c = chain.centroid();
        assert!((c.x - 1.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mean_pairwise_distance_matches_hand_computation() {
        let mut chain = chain_from("AKL", 100.0, 100.0, 8);
        let positions = [(0.0, 0.0), (4.0, 0.0), (8.0, 0.0)];
        for (residue, (x, y)) in chain.residues_mut().iter_mut().zip(positions) {
            residue.position = Point2::new(x, y);
        }
        // pairs: 4 + 8 + 4 over 3 pairs
        assert!((chain.mean_pairwise_distance() - 16.0 / 3.0).abs() < 1e-12);
    }
}
