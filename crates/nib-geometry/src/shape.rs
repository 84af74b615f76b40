//! The validated shape model.
//!
//! Shapes are built from plain descriptor structs, validated once, and then
//! treated as immutable snapshots for the rest of the render or export call.

use crate::{ConfigError, DashPattern, GeometryResult, Paint, Stroke, StrokeAlignment};
use glam::Vec2;

/// Point on a circle at the given angle (radians, measured from the
/// positive x axis).
pub fn point_at_angle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// Declarative description of a circle, validated by [`build`].
///
/// Mirrors the option set a caller would pass when constructing the shape:
///
/// ```
/// use nib_core::Color;
/// use nib_geometry::{CircleDescriptor, StrokeAlignment};
///
/// let circle = CircleDescriptor::new(100.0, 100.0, 50.0)
///     .with_fill(Color::BLACK.into())
///     .with_stroke(Color::BLACK.into(), 20.0)
///     .with_stroke_opacity(0.5)
///     .with_stroke_alignment(StrokeAlignment::Inner)
///     .build()
///     .unwrap();
/// assert_eq!(circle.radius(), 50.0);
/// ```
///
/// [`build`]: CircleDescriptor::build
#[derive(Debug, Clone, PartialEq)]
pub struct CircleDescriptor {
    /// Center x coordinate.
    pub cx: f32,
    /// Center y coordinate.
    pub cy: f32,
    /// Radius. Must be positive.
    pub r: f32,
    /// Optional fill paint.
    pub fill: Option<Paint>,
    /// Fill opacity multiplier (0.0 to 1.0).
    pub fill_opacity: f32,
    /// Optional stroke paint.
    pub stroke: Option<Paint>,
    /// Stroke opacity multiplier (0.0 to 1.0).
    pub stroke_opacity: f32,
    /// Stroke width. Must be non-negative; zero means no stroke geometry.
    pub stroke_width: f32,
    /// Stroke band placement.
    pub stroke_alignment: StrokeAlignment,
    /// Dash run lengths; empty means a solid outline.
    pub stroke_dasharray: Vec<f32>,
    /// Arc-length phase shift for the dash pattern.
    pub stroke_dash_offset: f32,
    /// Hold the on-screen stroke width constant under camera zoom.
    pub size_attenuation: bool,
}

impl Default for CircleDescriptor {
    fn default() -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            r: 0.0,
            fill: None,
            fill_opacity: 1.0,
            stroke: None,
            stroke_opacity: 1.0,
            stroke_width: 0.0,
            stroke_alignment: StrokeAlignment::Center,
            stroke_dasharray: Vec::new(),
            stroke_dash_offset: 0.0,
            size_attenuation: false,
        }
    }
}

impl CircleDescriptor {
    /// Start a descriptor from center coordinates and radius.
    pub fn new(cx: f32, cy: f32, r: f32) -> Self {
        Self {
            cx,
            cy,
            r,
            ..Default::default()
        }
    }

    /// Set the fill paint.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fill = Some(paint);
        self
    }

    /// Set the fill opacity.
    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = opacity;
        self
    }

    /// Set the stroke paint and width.
    pub fn with_stroke(mut self, paint: Paint, width: f32) -> Self {
        self.stroke = Some(paint);
        self.stroke_width = width;
        self
    }

    /// Set the stroke opacity.
    pub fn with_stroke_opacity(mut self, opacity: f32) -> Self {
        self.stroke_opacity = opacity;
        self
    }

    /// Set the stroke band placement.
    pub fn with_stroke_alignment(mut self, alignment: StrokeAlignment) -> Self {
        self.stroke_alignment = alignment;
        self
    }

    /// Set the dash run lengths.
    pub fn with_dasharray(mut self, lengths: Vec<f32>) -> Self {
        self.stroke_dasharray = lengths;
        self
    }

    /// Set the dash phase shift.
    pub fn with_dash_offset(mut self, offset: f32) -> Self {
        self.stroke_dash_offset = offset;
        self
    }

    /// Enable or disable size attenuation.
    pub fn with_size_attenuation(mut self, attenuation: bool) -> Self {
        self.size_attenuation = attenuation;
        self
    }

    /// Validate the description and build the shape.
    ///
    /// Rejected configurations never produce a shape: non-positive radius,
    /// negative stroke width, opacities outside `0.0..=1.0`, non-positive
    /// dash lengths, and a center-aligned stroke wider than the diameter.
    pub fn build(self) -> GeometryResult<Circle> {
        // Negated comparisons so NaN fails every check.
        if !(self.r > 0.0) {
            return Err(ConfigError::Radius { radius: self.r });
        }
        if !(self.stroke_width >= 0.0) {
            return Err(ConfigError::StrokeWidth {
                width: self.stroke_width,
            });
        }
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(ConfigError::Opacity {
                attribute: "fill opacity",
                value: self.fill_opacity,
            });
        }
        if !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(ConfigError::Opacity {
                attribute: "stroke opacity",
                value: self.stroke_opacity,
            });
        }
        for &length in &self.stroke_dasharray {
            if !(length > 0.0) {
                return Err(ConfigError::DashLength { length });
            }
        }
        if self.stroke_alignment == StrokeAlignment::Center && self.stroke_width > self.r * 2.0 {
            return Err(ConfigError::StrokeTooWide {
                width: self.stroke_width,
                radius: self.r,
            });
        }

        let stroke = self.stroke.map(|paint| Stroke {
            paint,
            width: self.stroke_width,
            opacity: self.stroke_opacity,
            alignment: self.stroke_alignment,
            dash: if self.stroke_dasharray.is_empty() {
                None
            } else {
                Some(DashPattern::new(
                    self.stroke_dasharray,
                    self.stroke_dash_offset,
                ))
            },
            size_attenuation: self.size_attenuation,
        });

        Ok(Circle {
            center: Vec2::new(self.cx, self.cy),
            radius: self.r,
            fill: self.fill,
            fill_opacity: self.fill_opacity,
            stroke,
        })
    }
}

/// An immutable, validated circle shape.
///
/// Construction goes through [`CircleDescriptor::build`]; once built, the
/// shape's invariants hold for its whole lifetime and every render reads the
/// same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Vec2,
    radius: f32,
    fill: Option<Paint>,
    fill_opacity: f32,
    stroke: Option<Stroke>,
}

impl Circle {
    /// Center point.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Fill paint, if any.
    pub fn fill(&self) -> Option<&Paint> {
        self.fill.as_ref()
    }

    /// Fill opacity multiplier.
    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }

    /// Stroke properties, if any.
    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    /// Axis-aligned bounding box of the nominal shape, ignoring any stroke
    /// band that extends outside the boundary.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let r = Vec2::splat(self.radius);
        (self.center - r, self.center + r)
    }
}
