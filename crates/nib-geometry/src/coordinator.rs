//! Per-shape orchestration of the geometry pipeline.
//!
//! One call resolves a shape against the camera, builds the stroke band,
//! samples dashes, and hands the resulting [`CircleGeometry`] to the mesh
//! assembler, the path serializer, or both. The two backends consume the
//! identical value, which is the whole consistency guarantee: there is no
//! second derivation to drift.

use crate::{
    Circle, GeometryResult, Mesh, MeshAssembler, MeshTarget, Paint, PathSerializer, PathTarget,
    StrokeBand, VectorPicture, Zoom, sample_dashes,
};
use crate::{ConfigError, DashSegment, resolved_stroke_width};
use glam::Vec2;

/// Fill parameters after resolution: the paint plus the radius actually
/// bounding the filled disc (an inner-aligned stroke shrinks it).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFill {
    /// Fill paint.
    pub paint: Paint,
    /// Opacity multiplier.
    pub opacity: f32,
    /// Radius of the filled disc; zero means no fill geometry.
    pub radius: f32,
}

/// Stroke parameters after attenuation, band construction, and dash
/// sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Opacity multiplier.
    pub opacity: f32,
    /// Effective width after zoom compensation.
    pub width: f32,
    /// The annular band the stroke occupies.
    pub band: StrokeBand,
    /// On-runs along the band's center curve.
    pub segments: Vec<DashSegment>,
}

/// The canonical intermediate geometry for one circle and one camera state.
///
/// Produced by [`RenderCoordinator::resolve`] and consumed read-only by both
/// backends.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleGeometry {
    /// Center point.
    pub center: Vec2,
    /// Nominal radius.
    pub radius: f32,
    /// Resolved fill, if the shape has one.
    pub fill: Option<ResolvedFill>,
    /// Resolved stroke, if the shape has a visible one.
    pub stroke: Option<ResolvedStroke>,
}

/// Orchestrates the per-shape pipeline.
///
/// Stateless across shapes: every call reads one shape and the camera zoom,
/// allocates fresh geometry, and returns it. Calls for different shapes may
/// run in parallel freely.
#[derive(Debug, Clone, Default)]
pub struct RenderCoordinator {
    assembler: MeshAssembler,
    serializer: PathSerializer,
}

impl RenderCoordinator {
    /// Create a coordinator with default backend settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator with a custom mesh assembler (e.g. a different
    /// chord tolerance).
    pub fn with_assembler(assembler: MeshAssembler) -> Self {
        Self {
            assembler,
            serializer: PathSerializer::new(),
        }
    }

    /// Resolve a shape against the current camera zoom into the shared
    /// intermediate geometry.
    pub fn resolve(&self, circle: &Circle, camera: &impl Zoom) -> GeometryResult<CircleGeometry> {
        let zoom = camera.zoom();
        if !(zoom > 0.0) {
            return Err(ConfigError::Zoom { zoom });
        }

        let mut fill_radius = circle.radius();
        let stroke = match circle.stroke() {
            Some(stroke) if stroke.is_visible() => {
                let width = resolved_stroke_width(stroke.width, stroke.size_attenuation, zoom)?;
                let band = StrokeBand::around_circle(circle.radius(), width, stroke.alignment);
                fill_radius = band.fill_radius(stroke.alignment, circle.radius());
                let segments = sample_dashes(band.circumference(), stroke.dash.as_ref());
                Some(ResolvedStroke {
                    paint: stroke.paint.clone(),
                    opacity: stroke.opacity,
                    width,
                    band,
                    segments,
                })
            }
            _ => None,
        };

        let fill = circle.fill().map(|paint| ResolvedFill {
            paint: paint.clone(),
            opacity: circle.fill_opacity(),
            radius: fill_radius,
        });

        Ok(CircleGeometry {
            center: circle.center(),
            radius: circle.radius(),
            fill,
            stroke,
        })
    }

    /// Compile a shape into a mesh for the current camera zoom.
    pub fn render(&self, circle: &Circle, camera: &impl Zoom) -> GeometryResult<Mesh> {
        let geometry = self.resolve(circle, camera)?;
        Ok(self.assembler.assemble(&geometry))
    }

    /// Compile a shape into vector paths for the current camera zoom.
    pub fn export(&self, circle: &Circle, camera: &impl Zoom) -> GeometryResult<VectorPicture> {
        let geometry = self.resolve(circle, camera)?;
        Ok(self.serializer.serialize(&geometry))
    }

    /// Compile a shape once and feed the identical resolved geometry to both
    /// backends.
    pub fn render_and_export(
        &self,
        circle: &Circle,
        camera: &impl Zoom,
    ) -> GeometryResult<(Mesh, VectorPicture)> {
        let geometry = self.resolve(circle, camera)?;
        Ok((
            self.assembler.assemble(&geometry),
            self.serializer.serialize(&geometry),
        ))
    }

    /// Render a shape and submit the mesh to a drawable surface.
    pub fn render_into(
        &self,
        circle: &Circle,
        camera: &impl Zoom,
        target: &mut impl MeshTarget,
    ) -> GeometryResult<()> {
        let mesh = self.render(circle, camera)?;
        target.submit_mesh(&mesh);
        Ok(())
    }

    /// Export a shape and hand each path element to a vector surface.
    pub fn export_into(
        &self,
        circle: &Circle,
        camera: &impl Zoom,
        target: &mut impl PathTarget,
    ) -> GeometryResult<()> {
        let picture = self.export(circle, camera)?;
        for element in &picture.elements {
            target.receive_path(element);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CircleDescriptor, MeshCollector, PathCollector, StrokeAlignment};
    use nib_core::Color;

    fn stroked_circle() -> Circle {
        CircleDescriptor::new(100.0, 100.0, 50.0)
            .with_fill(Color::BLACK.into())
            .with_stroke(Color::RED.into(), 20.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_builds_band_and_segments() {
        let geometry = RenderCoordinator::new()
            .resolve(&stroked_circle(), &1.0f32)
            .unwrap();
        let stroke = geometry.stroke.as_ref().unwrap();
        assert_eq!(stroke.band.inner, 40.0);
        assert_eq!(stroke.band.outer, 60.0);
        assert_eq!(stroke.segments.len(), 1);
        let fill = geometry.fill.as_ref().unwrap();
        assert_eq!(fill.radius, 50.0);
    }

    #[test]
    fn test_inner_stroke_shrinks_fill() {
        let circle = CircleDescriptor::new(0.0, 0.0, 50.0)
            .with_fill(Color::RED.into())
            .with_stroke(Color::BLACK.into(), 20.0)
            .with_stroke_alignment(StrokeAlignment::Inner)
            .build()
            .unwrap();
        let geometry = RenderCoordinator::new().resolve(&circle, &1.0f32).unwrap();
        assert_eq!(geometry.fill.as_ref().unwrap().radius, 30.0);
    }

    #[test]
    fn test_zero_width_stroke_is_skipped() {
        let circle = CircleDescriptor::new(0.0, 0.0, 50.0)
            .with_fill(Color::RED.into())
            .with_stroke(Color::BLACK.into(), 0.0)
            .build()
            .unwrap();
        let geometry = RenderCoordinator::new().resolve(&circle, &1.0f32).unwrap();
        assert!(geometry.stroke.is_none());
        assert_eq!(geometry.fill.as_ref().unwrap().radius, 50.0);
    }

    #[test]
    fn test_attenuation_uses_camera_zoom() {
        let circle = CircleDescriptor::new(0.0, 0.0, 50.0)
            .with_stroke(Color::BLACK.into(), 10.0)
            .with_size_attenuation(true)
            .build()
            .unwrap();
        let geometry = RenderCoordinator::new().resolve(&circle, &2.0f32).unwrap();
        assert_eq!(geometry.stroke.as_ref().unwrap().width, 5.0);
    }

    #[test]
    fn test_rejects_bad_zoom() {
        let coordinator = RenderCoordinator::new();
        let err = coordinator.resolve(&stroked_circle(), &0.0f32).unwrap_err();
        assert_eq!(err, ConfigError::Zoom { zoom: 0.0 });
        assert!(coordinator.render(&stroked_circle(), &-1.0f32).is_err());
    }

    #[test]
    fn test_both_backends_share_one_geometry() {
        let coordinator = RenderCoordinator::new();
        let circle = CircleDescriptor::new(0.0, 0.0, 50.0)
            .with_stroke(Color::BLACK.into(), 10.0)
            .with_dasharray(vec![5.0, 5.0])
            .build()
            .unwrap();

        // Resolving twice with the same inputs yields structurally equal
        // geometry, so mesh and path calls built from one resolve cannot
        // disagree on band radii or segment angles.
        let first = coordinator.resolve(&circle, &1.0f32).unwrap();
        let second = coordinator.resolve(&circle, &1.0f32).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_and_export_share_one_resolve() {
        let coordinator = RenderCoordinator::new();
        let circle = stroked_circle();

        let (mesh, picture) = coordinator.render_and_export(&circle, &1.0f32).unwrap();
        assert_eq!(mesh, coordinator.render(&circle, &1.0f32).unwrap());
        assert_eq!(picture, coordinator.export(&circle, &1.0f32).unwrap());
    }

    #[test]
    fn test_targets_receive_output() {
        let coordinator = RenderCoordinator::new();
        let circle = stroked_circle();

        let mut meshes = MeshCollector::default();
        coordinator.render_into(&circle, &1.0f32, &mut meshes).unwrap();
        assert_eq!(meshes.meshes.len(), 1);
        assert!(!meshes.meshes[0].is_empty());

        let mut paths = PathCollector::default();
        coordinator.export_into(&circle, &1.0f32, &mut paths).unwrap();
        assert_eq!(paths.elements.len(), 2);
    }
}
