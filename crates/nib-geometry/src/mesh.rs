//! Mesh assembly for resolved circle geometry.
//!
//! Fills become triangle fans around the center; stroke dash segments become
//! quad strips between the band's inner and outer arcs. Ring resolution is
//! adaptive: the angular step is chosen so the chord never deviates from the
//! true circle by more than the configured tolerance.

use crate::{CircleGeometry, DashSegment, Mesh, MeshVertex, Paint, StrokeBand, point_at_angle};
use glam::Vec2;
use std::f32::consts::TAU;

/// Default chord-deviation tolerance in logical pixels.
pub const DEFAULT_CHORD_TOLERANCE: f32 = 0.25;

const MIN_RING_VERTICES: u32 = 16;
const MAX_RING_VERTICES: u32 = 1024;

/// Assembles resolved circle geometry into triangle meshes.
#[derive(Debug, Clone)]
pub struct MeshAssembler {
    /// Maximum chord deviation from the true circle (smaller = more
    /// segments).
    pub tolerance: f32,
}

impl Default for MeshAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshAssembler {
    /// Create an assembler with the default tolerance.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_CHORD_TOLERANCE,
        }
    }

    /// Create an assembler with a custom tolerance.
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Number of ring vertices keeping chord deviation within tolerance for
    /// a circle of the given radius.
    pub fn ring_vertex_count(&self, radius: f32) -> u32 {
        if radius <= self.tolerance {
            return MIN_RING_VERTICES;
        }
        // Sagitta of a chord subtending angle a is r·(1 - cos(a/2)).
        let max_step = 2.0 * (1.0 - self.tolerance / radius).acos();
        ((TAU / max_step).ceil() as u32).clamp(MIN_RING_VERTICES, MAX_RING_VERTICES)
    }

    /// Assemble the full mesh for one resolved circle: fill disc first, then
    /// one strip per dash segment.
    pub fn assemble(&self, geometry: &CircleGeometry) -> Mesh {
        let mut mesh = Mesh::new();

        if let Some(fill) = &geometry.fill {
            if fill.radius > 0.0 {
                self.fill_disc(
                    &mut mesh,
                    geometry.center,
                    fill.radius,
                    &fill.paint,
                    fill.opacity,
                );
            }
        }

        if let Some(stroke) = &geometry.stroke {
            for segment in &stroke.segments {
                self.stroke_segment(
                    &mut mesh,
                    geometry.center,
                    &stroke.band,
                    segment,
                    &stroke.paint,
                    stroke.opacity,
                );
            }
        }

        tracing::trace!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "assembled circle mesh"
        );
        mesh
    }

    /// Triangle fan covering a disc.
    fn fill_disc(&self, mesh: &mut Mesh, center: Vec2, radius: f32, paint: &Paint, opacity: f32) {
        let ring = self.ring_vertex_count(radius);
        let base = mesh.vertices.len() as u32;

        mesh.vertices.push(shaded_vertex(center, paint, opacity));
        for i in 0..ring {
            let angle = TAU * i as f32 / ring as f32;
            let position = point_at_angle(center, radius, angle);
            mesh.vertices.push(shaded_vertex(position, paint, opacity));
        }

        for i in 0..ring {
            let next = (i + 1) % ring;
            mesh.indices
                .extend_from_slice(&[base, base + 1 + i, base + 1 + next]);
        }
    }

    /// Quad strip (or sector fan, when the band reaches the center) covering
    /// one dash segment of the stroke band.
    fn stroke_segment(
        &self,
        mesh: &mut Mesh,
        center: Vec2,
        band: &StrokeBand,
        segment: &DashSegment,
        paint: &Paint,
        opacity: f32,
    ) {
        if band.width() <= 0.0 {
            return;
        }
        let mid = band.mid_radius();
        if mid <= 0.0 {
            return;
        }

        let (start_angle, end_angle) = segment.angular_span(mid);
        let span = end_angle - start_angle;
        if span <= 0.0 {
            return;
        }
        let full_turn = segment.spans_full_circle(mid);

        // A band clamped to the center has no inner arc: the geometry is a
        // disc or a pie sector rather than an annulus.
        if band.covers_interior {
            if full_turn {
                self.fill_disc(mesh, center, band.outer, paint, opacity);
            } else {
                self.sector(mesh, center, band.outer, start_angle, span, paint, opacity);
            }
            return;
        }

        let ring = self.ring_vertex_count(band.outer);
        let base = mesh.vertices.len() as u32;

        if full_turn {
            // Closed ring: wrap the last quad back to the first vertex pair
            // so the seam has neither gap nor duplicated edge.
            for i in 0..ring {
                let angle = start_angle + span * i as f32 / ring as f32;
                push_band_pair(mesh, center, band, angle, paint, opacity);
            }
            for i in 0..ring {
                let next = (i + 1) % ring;
                push_band_quad(mesh, base, i, next);
            }
        } else {
            let steps = ((ring as f32 * span / TAU).ceil() as u32).max(1);
            for i in 0..=steps {
                let angle = start_angle + span * i as f32 / steps as f32;
                push_band_pair(mesh, center, band, angle, paint, opacity);
            }
            for i in 0..steps {
                push_band_quad(mesh, base, i, i + 1);
            }
        }
    }

    /// Triangle fan covering a pie sector.
    fn sector(
        &self,
        mesh: &mut Mesh,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        span: f32,
        paint: &Paint,
        opacity: f32,
    ) {
        let ring = self.ring_vertex_count(radius);
        let steps = ((ring as f32 * span / TAU).ceil() as u32).max(1);
        let base = mesh.vertices.len() as u32;

        mesh.vertices.push(shaded_vertex(center, paint, opacity));
        for i in 0..=steps {
            let angle = start_angle + span * i as f32 / steps as f32;
            let position = point_at_angle(center, radius, angle);
            mesh.vertices.push(shaded_vertex(position, paint, opacity));
        }

        for i in 0..steps {
            mesh.indices
                .extend_from_slice(&[base, base + 1 + i, base + 2 + i]);
        }
    }
}

/// Sample the paint at a position and bake the layer opacity into alpha.
fn shaded_vertex(position: Vec2, paint: &Paint, opacity: f32) -> MeshVertex {
    let color = paint.sample(position);
    MeshVertex::new(position, color.with_alpha(color.a * opacity))
}

/// Push the inner/outer vertex pair at one angle of the band.
fn push_band_pair(
    mesh: &mut Mesh,
    center: Vec2,
    band: &StrokeBand,
    angle: f32,
    paint: &Paint,
    opacity: f32,
) {
    let inner = point_at_angle(center, band.inner, angle);
    let outer = point_at_angle(center, band.outer, angle);
    mesh.vertices.push(shaded_vertex(inner, paint, opacity));
    mesh.vertices.push(shaded_vertex(outer, paint, opacity));
}

/// Push the two triangles joining vertex pairs `i` and `next`.
fn push_band_quad(mesh: &mut Mesh, base: u32, i: u32, next: u32) {
    let (inner_a, outer_a) = (base + i * 2, base + i * 2 + 1);
    let (inner_b, outer_b) = (base + next * 2, base + next * 2 + 1);
    mesh.indices
        .extend_from_slice(&[inner_a, outer_a, outer_b, inner_a, outer_b, inner_b]);
}
