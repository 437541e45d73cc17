//! # Core Models Module
//!
//! Fundamental data structures for the simulated chain: the static
//! amino-acid table, individual residue particles, residue sequences, and
//! the ordered chain itself.
//!
//! ## Key Components
//!
//! - [`amino`] - The fixed twenty-entry amino-acid table and code lookup
//! - [`residue`] - The simulated particle: identity, polarity, motion state, trail
//! - [`sequence`] - Ordered residue identities, random draw and free-text parsing
//! - [`chain`] - The placed chain, its bond topology, and geometric summaries
//!
//! Identity data is immutable after construction; applying a new sequence
//! replaces the chain wholesale rather than mutating residues in place.

pub mod amino;
pub mod chain;
pub mod residue;
pub mod sequence;
