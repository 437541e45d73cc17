//! # Render Module
//!
//! The presentation adapter: draws the simulation against an abstract 2D
//! raster surface and maps host pointer events into canvas space. No real
//! canvas or windowing backend lives in this crate; hosts implement
//! [`surface::DrawSurface`] and feed translated pointer coordinates to the
//! simulation's picking methods.
//!
//! - [`surface`] - The drawing trait, colors, and a recording test double
//! - [`scene`] - The per-frame draw pass over particles, bonds, and overlays
//! - [`chart`] - The scrolling energy strip chart and the vertical gauge
//! - [`interaction`] - Viewport-to-canvas coordinate translation

pub mod chart;
pub mod interaction;
pub mod scene;
pub mod surface;
