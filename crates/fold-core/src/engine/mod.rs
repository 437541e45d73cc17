//! # Engine Module
//!
//! The stateful simulation loop: force accumulation, integration, energy
//! tracking, and the control surface that external hosts drive.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated construction settings and the
//!   enumerated runtime controls (solvent, bias, presets, toggles)
//! - **Force Accumulation** ([`forces`]) - The per-step force buffer and the
//!   seven force field contributions
//! - **Integration** ([`integrator`]) - Damped velocity/position update,
//!   hard containment, and cluster recentring
//! - **Energy Tracking** ([`energy`], [`trace`]) - The heuristic energy
//!   estimate, its running extrema, and the display-bound sample window
//! - **State** ([`state`]) - The [`state::Simulation`] instance owning all of
//!   the above
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting for
//!   headless runs
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Everything runs on the caller's thread; one `frame` call performs exactly
//! one step-and-measure cycle.

pub mod config;
pub mod energy;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod progress;
pub mod state;
pub mod trace;
