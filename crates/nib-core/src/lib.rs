//! Nib Core
//!
//! This crate contains the shared foundation for the nib 2D vector engine:
//! the color type, math re-exports, and logging bootstrap.

pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;

pub use color::Color;
