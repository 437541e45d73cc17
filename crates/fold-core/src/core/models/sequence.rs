use super::amino::{self, AminoAcid};
use rand::Rng;
use thiserror::Error;

/// Minimum number of residues a chain must have; shorter inputs are rejected
/// to avoid degenerate simulations.
pub const MIN_RESIDUES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence yields {accepted} recognized residues, minimum is {MIN_RESIDUES}")]
    TooShort { accepted: usize },
}

/// An ordered list of residue identities, independent of any placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    entries: Vec<&'static AminoAcid>,
}

impl Sequence {
    /// Draws `n` residues uniformly from the amino-acid table.
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        let entries = (0..n)
            .map(|_| &amino::AMINO_ACIDS[rng.gen_range(0..amino::AMINO_ACIDS.len())])
            .collect();
        Self { entries }
    }

    /// Parses a free-text sequence string: uppercases, drops everything that
    /// is not a known one-letter code, and rejects results shorter than
    /// [`MIN_RESIDUES`].
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let entries: Vec<_> = raw
            .chars()
            .filter_map(|c| amino::lookup(c.to_ascii_uppercase()))
            .collect();
        if entries.len() < MIN_RESIDUES {
            return Err(SequenceError::TooShort {
                accepted: entries.len(),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static AminoAcid> + '_ {
        self.entries.iter().copied()
    }

    /// The one-letter codes of the sequence, concatenated.
    pub fn codes(&self) -> String {
        self.entries.iter().map(|aa| aa.code).collect()
    }
}
