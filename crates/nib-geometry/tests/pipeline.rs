//! End-to-end tests for the circle compilation pipeline.
//!
//! These tests drive the full path from a declarative description through
//! resolution, mesh assembly, and vector serialization, and verify that the
//! two backends describe the same geometry.

use glam::Vec2;
use nib_core::Color;
use nib_geometry::{
    CircleDescriptor, ConfigError, PathCommand, RenderCoordinator, StrokeAlignment, StrokeBand,
};
use std::f32::consts::TAU;

// ====================
// Stroke Band Properties
// ====================

#[test]
fn test_band_width_is_preserved_before_clamping() {
    for &(radius, width) in &[(50.0f32, 20.0f32), (10.0, 4.0), (3.0, 0.5)] {
        for alignment in [
            StrokeAlignment::Center,
            StrokeAlignment::Inner,
            StrokeAlignment::Outer,
        ] {
            let band = StrokeBand::around_circle(radius, width, alignment);
            assert!(
                (band.width() - width).abs() < 1e-4,
                "band width {} != stroke width {} for {:?}",
                band.width(),
                width,
                alignment
            );
        }
    }
}

#[test]
fn test_alignment_boundary_identities() {
    let radius = 50.0;
    let width = 20.0;

    let center = StrokeBand::around_circle(radius, width, StrokeAlignment::Center);
    assert!(center.inner <= radius && radius <= center.outer);

    let inner = StrokeBand::around_circle(radius, width, StrokeAlignment::Inner);
    assert_eq!(inner.outer, radius);

    let outer = StrokeBand::around_circle(radius, width, StrokeAlignment::Outer);
    assert_eq!(outer.inner, radius);
}

#[test]
fn test_outer_alignment_scenario() {
    let band = StrokeBand::around_circle(50.0, 20.0, StrokeAlignment::Outer);
    assert_eq!(band.inner, 50.0);
    assert_eq!(band.outer, 70.0);
}

#[test]
fn test_inner_alignment_consuming_whole_radius() {
    let circle = CircleDescriptor::new(0.0, 0.0, 10.0)
        .with_fill(Color::RED.into())
        .with_stroke(Color::BLACK.into(), 15.0)
        .with_stroke_alignment(StrokeAlignment::Inner)
        .build()
        .unwrap();

    let geometry = RenderCoordinator::new().resolve(&circle, &1.0f32).unwrap();
    let stroke = geometry.stroke.as_ref().unwrap();
    assert_eq!(stroke.band.inner, 0.0, "inner radius must clamp to zero");
    assert!(stroke.band.covers_interior);
    assert_eq!(
        geometry.fill.as_ref().unwrap().radius,
        0.0,
        "a fully covered interior leaves no fill disc"
    );
}

// ====================
// Attenuation
// ====================

#[test]
fn test_size_attenuation_scenario() {
    let circle = CircleDescriptor::new(50.0, 50.0, 50.0)
        .with_fill(Color::RED.into())
        .with_stroke(Color::BLACK.into(), 10.0)
        .with_size_attenuation(true)
        .build()
        .unwrap();

    let geometry = RenderCoordinator::new().resolve(&circle, &2.0f32).unwrap();
    assert_eq!(geometry.stroke.as_ref().unwrap().width, 5.0);

    // Without attenuation the same camera leaves the width alone.
    let plain = CircleDescriptor::new(50.0, 50.0, 50.0)
        .with_stroke(Color::BLACK.into(), 10.0)
        .build()
        .unwrap();
    let geometry = RenderCoordinator::new().resolve(&plain, &2.0f32).unwrap();
    assert_eq!(geometry.stroke.as_ref().unwrap().width, 10.0);
}

#[test]
fn test_non_positive_zoom_is_rejected() {
    let circle = CircleDescriptor::new(0.0, 0.0, 50.0)
        .with_fill(Color::RED.into())
        .build()
        .unwrap();
    let err = RenderCoordinator::new().render(&circle, &0.0f32).unwrap_err();
    assert_eq!(err, ConfigError::Zoom { zoom: 0.0 });
}

// ====================
// Dash Sampling
// ====================

#[test]
fn test_solid_stroke_covers_full_circumference() {
    let circle = CircleDescriptor::new(0.0, 0.0, 50.0)
        .with_stroke(Color::BLACK.into(), 10.0)
        .build()
        .unwrap();

    let geometry = RenderCoordinator::new().resolve(&circle, &1.0f32).unwrap();
    let stroke = geometry.stroke.as_ref().unwrap();
    let total: f32 = stroke.segments.iter().map(|s| s.arc_length()).sum();
    // Center alignment keeps the band's center curve on the nominal circle.
    assert!((total - TAU * 50.0).abs() < 1e-2);
}

#[test]
fn test_dasharray_scenario() {
    let circle = CircleDescriptor::new(50.0, 50.0, 50.0)
        .with_stroke(Color::BLACK.into(), 20.0)
        .with_dasharray(vec![5.0, 5.0])
        .build()
        .unwrap();

    let geometry = RenderCoordinator::new().resolve(&circle, &1.0f32).unwrap();
    let stroke = geometry.stroke.as_ref().unwrap();

    // 2π·50 / (5 + 5) ≈ 31.4 cycles around the curve.
    assert_eq!(stroke.segments.len(), 32);
    for segment in &stroke.segments[..31] {
        assert!((segment.arc_length() - 5.0).abs() < 1e-3);
    }
    assert!(
        stroke.segments.last().unwrap().arc_length() < 5.0,
        "the final dash is clipped at the wrap boundary"
    );

    let circumference = stroke.band.circumference();
    let total: f32 = stroke.segments.iter().map(|s| s.arc_length()).sum();
    assert!(total <= circumference + 1e-3);
}

// ====================
// Mesh / Path Consistency
// ====================

#[test]
fn test_backends_consume_identical_segments() {
    let coordinator = RenderCoordinator::new();
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
        .with_stroke(Color::BLACK.into(), 10.0)
        .with_dasharray(vec![12.0, 6.0])
        .build()
        .unwrap();

    let geometry = coordinator.resolve(&circle, &1.0f32).unwrap();
    let stroke = geometry.stroke.as_ref().unwrap();
    let picture = coordinator.export(&circle, &1.0f32).unwrap();

    // Every dash segment appears in the vector output as an outer arc with
    // exactly the angular range the mesh backend tessellated.
    let outer_arcs: Vec<(f32, f32)> = picture.elements[0]
        .path
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            PathCommand::Arc {
                radius,
                start_angle,
                end_angle,
                ..
            } if *radius == stroke.band.outer => Some((*start_angle, *end_angle)),
            _ => None,
        })
        .collect();

    assert_eq!(outer_arcs.len(), stroke.segments.len());
    let mid = stroke.band.mid_radius();
    for (arc, segment) in outer_arcs.iter().zip(&stroke.segments) {
        let (start, end) = segment.angular_span(mid);
        assert_eq!(arc.0, start);
        assert_eq!(arc.1, end);
    }
}

#[test]
fn test_resolve_is_deterministic() {
    let coordinator = RenderCoordinator::new();
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
        .with_fill(Color::BLACK.into())
        .with_stroke(Color::BLACK.into(), 20.0)
        .with_dasharray(vec![5.0, 5.0])
        .build()
        .unwrap();

    let first = coordinator.resolve(&circle, &1.0f32).unwrap();
    let second = coordinator.resolve(&circle, &1.0f32).unwrap();
    assert_eq!(first, second);

    let mesh_a = coordinator.render(&circle, &1.0f32).unwrap();
    let mesh_b = coordinator.render(&circle, &1.0f32).unwrap();
    assert_eq!(mesh_a, mesh_b);
}

// ====================
// Render Scenarios
// ====================

#[test]
fn test_plain_filled_circle_scenario() {
    let coordinator = RenderCoordinator::new();
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
        .with_fill(Color::BLACK.into())
        .build()
        .unwrap();

    // Vector side: exactly one full-circle arc of radius 50 at the center.
    let picture = coordinator.export(&circle, &1.0f32).unwrap();
    assert_eq!(picture.elements.len(), 1);
    let arcs: Vec<_> = picture.elements[0]
        .path
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => Some((*center, *radius, end_angle - start_angle)),
            _ => None,
        })
        .collect();
    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[0].0, Vec2::new(100.0, 100.0));
    assert_eq!(arcs[0].1, 50.0);
    assert!((arcs[0].2 - TAU).abs() < 1e-6);

    // Mesh side: a fan-triangulated disc of radius 50.
    let mesh = coordinator.render(&circle, &1.0f32).unwrap();
    assert!(!mesh.is_empty());
    assert_eq!(mesh.triangle_count(), mesh.vertex_count() - 1);
    let center = Vec2::new(100.0, 100.0);
    let max_distance = mesh
        .vertices
        .iter()
        .map(|v| (Vec2::from(v.position) - center).length())
        .fold(0.0f32, f32::max);
    assert!((max_distance - 50.0).abs() < 1e-3);
}

#[test]
fn test_stroked_circle_renders_both_regions() {
    let coordinator = RenderCoordinator::new();
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
        .with_fill(Color::BLACK.into())
        .with_stroke(Color::BLACK.into(), 20.0)
        .with_stroke_opacity(0.5)
        .build()
        .unwrap();

    let picture = coordinator.export(&circle, &1.0f32).unwrap();
    assert_eq!(picture.elements.len(), 2, "fill element plus stroke element");
    assert_eq!(picture.elements[0].opacity, 1.0);
    assert_eq!(picture.elements[1].opacity, 0.5);

    let mesh = coordinator.render(&circle, &1.0f32).unwrap();
    // Band vertices extend to the outer radius.
    let center = Vec2::new(100.0, 100.0);
    let max_distance = mesh
        .vertices
        .iter()
        .map(|v| (Vec2::from(v.position) - center).length())
        .fold(0.0f32, f32::max);
    assert!((max_distance - 60.0).abs() < 1e-3);
}

#[test]
fn test_alignment_trio_matches_reference_radii() {
    // The three alignments of the same stroke, as a scene would lay them out.
    let cases = [
        (StrokeAlignment::Inner, 30.0, 50.0),
        (StrokeAlignment::Outer, 50.0, 70.0),
        (StrokeAlignment::Center, 40.0, 60.0),
    ];
    let coordinator = RenderCoordinator::new();

    for (alignment, expected_inner, expected_outer) in cases {
        let circle = CircleDescriptor::new(50.0, 50.0, 50.0)
            .with_fill(Color::RED.into())
            .with_stroke(Color::BLACK.into(), 20.0)
            .with_stroke_opacity(0.5)
            .with_stroke_alignment(alignment)
            .build()
            .unwrap();
        let geometry = coordinator.resolve(&circle, &1.0f32).unwrap();
        let band = geometry.stroke.as_ref().unwrap().band;
        assert_eq!(band.inner, expected_inner, "{:?}", alignment);
        assert_eq!(band.outer, expected_outer, "{:?}", alignment);
    }
}

// ====================
// Parallel Use
// ====================

#[test]
fn test_pipeline_is_shareable_across_threads() {
    let coordinator = RenderCoordinator::new();
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
        .with_fill(Color::BLACK.into())
        .with_stroke(Color::BLACK.into(), 20.0)
        .with_dasharray(vec![5.0, 5.0])
        .build()
        .unwrap();

    let reference = coordinator.render(&circle, &1.0f32).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let coordinator = &coordinator;
                let circle = &circle;
                scope.spawn(move || coordinator.render(circle, &1.0f32).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}
