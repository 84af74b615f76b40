//! Vector path serialization for resolved circle geometry.
//!
//! The counterpart of mesh assembly on the vector side: the same resolved
//! geometry comes in, and instead of triangles it becomes exact arc
//! commands. Fill is one full-circle arc; every dash segment becomes an
//! annular sector bounded by the band's two radii.

use crate::{CircleGeometry, DashSegment, Paint, Path, PathBuilder, StrokeBand, point_at_angle};
use glam::Vec2;
use std::f32::consts::TAU;

/// A path paired with the paint and opacity it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    /// The geometry.
    pub path: Path,
    /// Paint the subpaths are filled with.
    pub paint: Paint,
    /// Opacity multiplier (0.0 to 1.0).
    pub opacity: f32,
}

/// Ordered vector output of one export call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorPicture {
    /// Elements in paint order (fill below stroke).
    pub elements: Vec<PathElement>,
}

impl VectorPicture {
    /// Check if the picture has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Serializes resolved circle geometry into vector path commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSerializer;

impl PathSerializer {
    /// Create a new serializer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize one resolved circle: fill element first, then a single
    /// stroke element holding one subpath per dash segment.
    pub fn serialize(&self, geometry: &CircleGeometry) -> VectorPicture {
        let mut elements = Vec::new();

        if let Some(fill) = &geometry.fill {
            if fill.radius > 0.0 {
                let mut builder = PathBuilder::new();
                full_circle(&mut builder, geometry.center, fill.radius);
                elements.push(PathElement {
                    path: builder.build(),
                    paint: fill.paint.clone(),
                    opacity: fill.opacity,
                });
            }
        }

        if let Some(stroke) = &geometry.stroke {
            let mut builder = PathBuilder::new();
            for segment in &stroke.segments {
                band_subpath(&mut builder, geometry.center, &stroke.band, segment);
            }
            let path = builder.build();
            if !path.is_empty() {
                elements.push(PathElement {
                    path,
                    paint: stroke.paint.clone(),
                    opacity: stroke.opacity,
                });
            }
        }

        tracing::trace!(elements = elements.len(), "serialized circle paths");
        VectorPicture { elements }
    }
}

/// One full-circle subpath, starting at angle 0.
fn full_circle(builder: &mut PathBuilder, center: Vec2, radius: f32) {
    builder.move_to(point_at_angle(center, radius, 0.0));
    builder.arc(center, radius, 0.0, TAU);
    builder.close();
}

/// Subpath for one dash segment of the stroke band.
fn band_subpath(
    builder: &mut PathBuilder,
    center: Vec2,
    band: &StrokeBand,
    segment: &DashSegment,
) {
    if band.width() <= 0.0 {
        return;
    }
    let mid = band.mid_radius();
    if mid <= 0.0 {
        return;
    }

    let (start_angle, end_angle) = segment.angular_span(mid);
    if end_angle - start_angle <= 0.0 {
        return;
    }

    if segment.spans_full_circle(mid) {
        // Full ring: outer circle plus, when the band has a hole, the inner
        // circle wound the opposite way.
        builder.move_to(point_at_angle(center, band.outer, start_angle));
        builder.arc(center, band.outer, start_angle, start_angle + TAU);
        builder.close();
        if !band.covers_interior {
            builder.move_to(point_at_angle(center, band.inner, start_angle));
            builder.arc(center, band.inner, start_angle, start_angle - TAU);
            builder.close();
        }
        return;
    }

    if band.covers_interior {
        // Band reaches the center: pie sector.
        builder.move_to(center);
        builder.line_to(point_at_angle(center, band.outer, start_angle));
        builder.arc(center, band.outer, start_angle, end_angle);
        builder.close();
        return;
    }

    // Annular sector: outer arc forward, inner arc back.
    builder.move_to(point_at_angle(center, band.outer, start_angle));
    builder.arc(center, band.outer, start_angle, end_angle);
    builder.line_to(point_at_angle(center, band.inner, end_angle));
    builder.arc(center, band.inner, end_angle, start_angle);
    builder.close();
}
