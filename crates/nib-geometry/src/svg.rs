//! SVG document export.
//!
//! Turns [`VectorPicture`]s into standalone SVG markup, optionally layered
//! over a background reference grid. This is presentation glue on top of the
//! geometry pipeline: everything here is formatting, no geometry is derived.

use crate::{GradientStop, Paint, Path, PathCommand, VectorPicture, point_at_angle};
use nib_core::geometry::Size;
use std::f32::consts::{PI, TAU};
use std::fmt::Write;

/// Reference grid defs: a fine 10px pattern nested in a coarse 100px one.
const GRID_DEFS: &str = "<pattern id=\"small-grid\" width=\"10\" height=\"10\" patternUnits=\"userSpaceOnUse\">\
<path d=\"M 10 0 L 0 0 0 10\" fill=\"none\" stroke=\"#dedede\" stroke-width=\"1\"/>\
</pattern>\
<pattern id=\"grid\" width=\"100\" height=\"100\" patternUnits=\"userSpaceOnUse\">\
<rect width=\"100\" height=\"100\" fill=\"url(#small-grid)\"/>\
<path d=\"M 100 0 L 0 0 0 100\" fill=\"none\" stroke=\"#dedede\" stroke-width=\"2\"/>\
</pattern>";

/// Writes vector pictures as SVG documents.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    size: Size<f32>,
    grid: bool,
}

impl SvgExporter {
    /// Create an exporter for a document of the given size.
    pub fn new(size: Size<f32>) -> Self {
        Self { size, grid: false }
    }

    /// Enable or disable the background reference grid.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Render pictures into a standalone SVG document, in the given order.
    pub fn document(&self, pictures: &[VectorPicture]) -> String {
        let mut defs = String::new();
        let mut body = String::new();
        let mut gradient_count = 0usize;

        if self.grid {
            defs.push_str(GRID_DEFS);
            body.push_str("<rect width=\"100%\" height=\"100%\" fill=\"url(#grid)\"/>");
        }

        for picture in pictures {
            for element in &picture.elements {
                let (fill, paint_opacity) =
                    fill_attribute(&element.paint, &mut defs, &mut gradient_count);
                let opacity = element.opacity * paint_opacity;

                let _ = write!(
                    body,
                    "<path d=\"{}\" fill=\"{}\"",
                    path_data(&element.path),
                    fill
                );
                if opacity < 1.0 {
                    let _ = write!(body, " fill-opacity=\"{}\"", fmt_num(opacity));
                }
                body.push_str("/>");
            }
        }

        let mut document = String::new();
        let _ = write!(
            document,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = fmt_num(self.size.width),
            h = fmt_num(self.size.height),
        );
        if !defs.is_empty() {
            document.push_str("<defs>");
            document.push_str(&defs);
            document.push_str("</defs>");
        }
        document.push_str(&body);
        document.push_str("</svg>");
        document
    }
}

/// Convert a path's commands into SVG `d` attribute data.
///
/// Arcs become endpoint (`A`) commands; a full-circle arc is split into two
/// half turns because an `A` command with coinciding endpoints draws
/// nothing.
pub fn path_data(path: &Path) -> String {
    let mut data = String::new();

    for command in path.commands() {
        if !data.is_empty() {
            data.push(' ');
        }
        match command {
            PathCommand::MoveTo(to) => {
                let _ = write!(data, "M{} {}", fmt_num(to.x), fmt_num(to.y));
            }
            PathCommand::LineTo(to) => {
                let _ = write!(data, "L{} {}", fmt_num(to.x), fmt_num(to.y));
            }
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let r = fmt_num(*radius);
                let sweep = end_angle - start_angle;
                if sweep.abs() >= TAU - 1e-4 {
                    let direction = sweep.signum();
                    let sweep_flag = (direction > 0.0) as u8;
                    let halfway = point_at_angle(*center, *radius, start_angle + direction * PI);
                    let back = point_at_angle(*center, *radius, *start_angle);
                    let _ = write!(
                        data,
                        "A{r} {r} 0 1 {flag} {} {} A{r} {r} 0 1 {flag} {} {}",
                        fmt_num(halfway.x),
                        fmt_num(halfway.y),
                        fmt_num(back.x),
                        fmt_num(back.y),
                        r = r,
                        flag = sweep_flag,
                    );
                } else {
                    let end = point_at_angle(*center, *radius, *end_angle);
                    let large = (sweep.abs() > PI) as u8;
                    let sweep_flag = (sweep > 0.0) as u8;
                    let _ = write!(
                        data,
                        "A{r} {r} 0 {large} {sweep_flag} {} {}",
                        fmt_num(end.x),
                        fmt_num(end.y),
                        r = r,
                    );
                }
            }
            PathCommand::Close => data.push('Z'),
        }
    }

    data
}

/// Resolve a paint to a `fill` attribute value, appending gradient defs as
/// needed. Returns the attribute value and the paint's own opacity
/// contribution (a solid color's alpha channel).
fn fill_attribute(paint: &Paint, defs: &mut String, gradient_count: &mut usize) -> (String, f32) {
    match paint {
        Paint::Solid(color) => {
            let [r, g, b, _] = color.to_rgba_u8();
            (format!("#{:02x}{:02x}{:02x}", r, g, b), color.a)
        }
        Paint::LinearGradient(gradient) => {
            let id = format!("gradient-{}", *gradient_count);
            *gradient_count += 1;
            let _ = write!(
                defs,
                "<linearGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
                id,
                fmt_num(gradient.start.x),
                fmt_num(gradient.start.y),
                fmt_num(gradient.end.x),
                fmt_num(gradient.end.y),
            );
            write_stops(defs, &gradient.stops);
            defs.push_str("</linearGradient>");
            (format!("url(#{})", id), 1.0)
        }
        Paint::RadialGradient(gradient) => {
            let id = format!("gradient-{}", *gradient_count);
            *gradient_count += 1;
            let _ = write!(
                defs,
                "<radialGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" cx=\"{}\" cy=\"{}\" r=\"{}\">",
                id,
                fmt_num(gradient.center.x),
                fmt_num(gradient.center.y),
                fmt_num(gradient.radius),
            );
            write_stops(defs, &gradient.stops);
            defs.push_str("</radialGradient>");
            (format!("url(#{})", id), 1.0)
        }
    }
}

fn write_stops(defs: &mut String, stops: &[GradientStop]) {
    for stop in stops {
        let [r, g, b, _] = stop.color.to_rgba_u8();
        let _ = write!(
            defs,
            "<stop offset=\"{}\" stop-color=\"#{:02x}{:02x}{:02x}\"",
            fmt_num(stop.offset),
            r,
            g,
            b
        );
        if stop.color.a < 1.0 {
            let _ = write!(defs, " stop-opacity=\"{}\"", fmt_num(stop.color.a));
        }
        defs.push_str("/>");
    }
}

/// Format a coordinate with three decimals of precision, trimming trailing
/// zeros (`50`, not `50.000`).
fn fmt_num(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0" in output.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CircleDescriptor, GradientStop, RenderCoordinator};
    use glam::Vec2;
    use nib_core::Color;

    fn export(circle: &crate::Circle) -> VectorPicture {
        RenderCoordinator::new().export(circle, &1.0f32).unwrap()
    }

    #[test]
    fn test_fmt_num_trims() {
        assert_eq!(fmt_num(50.0), "50");
        assert_eq!(fmt_num(49.9996), "50");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn test_full_circle_path_data() {
        let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
            .with_fill(Color::BLACK.into())
            .build()
            .unwrap();
        let picture = export(&circle);
        let data = path_data(&picture.elements[0].path);
        assert_eq!(data, "M150 100 A50 50 0 1 1 50 100 A50 50 0 1 1 150 100 Z");
    }

    #[test]
    fn test_document_structure() {
        let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
            .with_fill(Color::BLACK.into())
            .build()
            .unwrap();
        let picture = export(&circle);

        let svg = SvgExporter::new(Size::new(200.0, 200.0)).document(&[picture]);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 200 200\""));
        assert!(svg.contains("fill=\"#000000\""));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("url(#grid)"));
    }

    #[test]
    fn test_grid_overlay_toggles() {
        let svg = SvgExporter::new(Size::new(200.0, 200.0))
            .with_grid(true)
            .document(&[]);
        assert!(svg.contains("<pattern id=\"small-grid\""));
        assert!(svg.contains("fill=\"url(#grid)\""));
    }

    #[test]
    fn test_stroke_opacity_attribute() {
        let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
            .with_stroke(Color::BLACK.into(), 20.0)
            .with_stroke_opacity(0.5)
            .build()
            .unwrap();
        let picture = export(&circle);

        let svg = SvgExporter::new(Size::new(200.0, 200.0)).document(&[picture]);
        assert!(svg.contains("fill-opacity=\"0.5\""));
    }

    #[test]
    fn test_gradient_defs_emitted() {
        let paint = Paint::linear_gradient(
            Vec2::ZERO,
            Vec2::new(200.0, 0.0),
            vec![
                GradientStop::new(0.0, Color::RED),
                GradientStop::new(1.0, Color::BLUE),
            ],
        );
        let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
            .with_fill(paint)
            .build()
            .unwrap();
        let picture = export(&circle);

        let svg = SvgExporter::new(Size::new(200.0, 200.0)).document(&[picture]);
        assert!(svg.contains("<linearGradient id=\"gradient-0\""));
        assert!(svg.contains("fill=\"url(#gradient-0)\""));
        assert!(svg.contains("stop-color=\"#ff0000\""));
    }
}
