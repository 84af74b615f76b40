//! Export a handful of styled circles as an SVG document on stdout.
//!
//! Run with: `cargo run -p nib-geometry --example circle_export > circles.svg`

use nib_core::{Color, geometry::Size};
use nib_geometry::{CircleDescriptor, RenderCoordinator, StrokeAlignment, SvgExporter};

fn main() {
    nib_core::logging::init();

    let coordinator = RenderCoordinator::new();
    let camera_zoom = 1.0f32;

    let circles = [
        // Plain filled circle.
        CircleDescriptor::new(100.0, 100.0, 50.0).with_fill(Color::BLACK.into()),
        // Half-transparent stroke straddling the boundary.
        CircleDescriptor::new(250.0, 100.0, 50.0)
            .with_fill(Color::from_hex(0xE04040).into())
            .with_stroke(Color::BLACK.into(), 20.0)
            .with_stroke_opacity(0.5),
        // Inner and outer alignment side by side.
        CircleDescriptor::new(400.0, 100.0, 50.0)
            .with_fill(Color::from_hex(0xE04040).into())
            .with_stroke(Color::BLACK.into(), 20.0)
            .with_stroke_opacity(0.5)
            .with_stroke_alignment(StrokeAlignment::Inner),
        CircleDescriptor::new(550.0, 100.0, 50.0)
            .with_fill(Color::from_hex(0xE04040).into())
            .with_stroke(Color::BLACK.into(), 20.0)
            .with_stroke_opacity(0.5)
            .with_stroke_alignment(StrokeAlignment::Outer),
        // Dashed outline.
        CircleDescriptor::new(100.0, 250.0, 50.0)
            .with_stroke(Color::from_hex(0x4060C0).into(), 20.0)
            .with_dasharray(vec![5.0, 5.0]),
    ];

    let mut pictures = Vec::new();
    for descriptor in circles {
        let circle = descriptor.build().expect("descriptor should validate");
        pictures.push(
            coordinator
                .export(&circle, &camera_zoom)
                .expect("export should succeed"),
        );
    }

    let svg = SvgExporter::new(Size::new(650.0, 350.0))
        .with_grid(true)
        .document(&pictures);
    println!("{svg}");
}
