//! Nib Geometry - declarative 2D shapes compiled to renderable geometry
//!
//! This crate provides:
//! - A validated shape model (the circle is the canonical primitive)
//! - Stroke band construction with inner/outer/center alignment
//! - Arc-length dash sampling with wraparound handling
//! - Camera zoom attenuation for constant screen-space stroke widths
//! - Mesh assembly (triangle fans and annular quad strips, colors baked in)
//! - Vector path serialization (exact arc commands) and SVG export
//!
//! The mesh and path backends consume the same resolved geometry value, so
//! they agree on every radius and angular range by construction.
//!
//! # Example
//!
//! ```
//! use nib_core::Color;
//! use nib_geometry::{CircleDescriptor, RenderCoordinator, StrokeAlignment};
//!
//! let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
//!     .with_fill(Color::BLACK.into())
//!     .with_stroke(Color::RED.into(), 20.0)
//!     .with_stroke_alignment(StrokeAlignment::Outer)
//!     .build()
//!     .unwrap();
//!
//! let coordinator = RenderCoordinator::new();
//! let mesh = coordinator.render(&circle, &1.0f32).unwrap();
//! let picture = coordinator.export(&circle, &1.0f32).unwrap();
//! assert!(!mesh.is_empty());
//! assert!(!picture.elements.is_empty());
//! ```

// Shape model
mod error;
mod paint;
mod shape;
mod stroke;

// Geometry resolution
mod attenuation;
mod dash;

// Backends
mod mesh;
mod path;
mod serializer;
mod surface;
mod svg;
mod vertex;

// Orchestration
mod coordinator;

// Re-exports
pub use error::*;
pub use paint::*;
pub use shape::*;
pub use stroke::*;

pub use attenuation::*;
pub use dash::*;

pub use mesh::*;
pub use path::*;
pub use serializer::*;
pub use surface::*;
pub use svg::*;
pub use vertex::*;

pub use coordinator::*;
