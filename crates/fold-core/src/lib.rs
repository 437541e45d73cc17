//! # hydrofold Core Library
//!
//! A deterministic, single-threaded 2D residue-interaction simulator: an
//! ordered chain of amino-acid particles folds under bonded springs, angular
//! stiffness, hydropathy-driven pair potentials, solvent fields, and thermal
//! noise, with a heuristic energy readout. A pedagogical toy, not molecular
//! dynamics: the energy is unitless and the constants are tuned for visual
//! plausibility.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict layering to stay testable without any display
//! backend:
//!
//! - **[`core`]: The Foundation.** Stateless data models (the amino-acid
//!   table, [`core::models::chain::Chain`]), pure forcefield mathematics
//!   (`potentials`, `energy`), and parameter I/O.
//!
//! - **[`engine`]: The Logic Core.** The stateful frame loop: the per-step
//!   force buffer, the damped integrator, energy/cooling bookkeeping, and
//!   the [`engine::state::Simulation`] instance external controls mutate.
//!
//! - **[`render`]: The Presentation Adapter.** Draws particles, bonds, and
//!   energy visuals against an abstract [`render::surface::DrawSurface`];
//!   hosts bring their own canvas backend and pointer events.
//!
//! - **[`workflows`]: The Public API.** High-level headless entry points
//!   that run the simulator for a frame budget and report a summary.
//!
//! Randomness is injected through a seedable generator, so every run is
//! reproducible given a seed.

pub mod core;
pub mod engine;
pub mod render;
pub mod workflows;
