//! Stroke properties and stroke band construction.
//!
//! A stroke on a closed curve occupies an annular band between two offset
//! curves. Alignment picks where that band sits relative to the nominal
//! curve; for a circle both offsets stay circles, so the band is fully
//! described by an inner and an outer radius.

use crate::Paint;
use nib_core::Color;

/// Where the stroke band sits relative to the shape's nominal boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeAlignment {
    /// The band straddles the boundary, half inside and half outside.
    #[default]
    Center,
    /// The band lies entirely inside the boundary.
    Inner,
    /// The band lies entirely outside the boundary.
    Outer,
}

/// Dash pattern for stroked outlines.
///
/// Run lengths alternate on/off and cycle indefinitely along the curve. An
/// odd number of lengths flips parity on every cycle, matching SVG
/// `stroke-dasharray` semantics. All lengths must be positive; this is
/// enforced when the owning shape is built.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    /// Alternating on/off run lengths.
    pub lengths: Vec<f32>,
    /// Arc-length phase shift applied before the first run.
    pub offset: f32,
}

impl DashPattern {
    /// Create a new dash pattern.
    pub fn new(lengths: Vec<f32>, offset: f32) -> Self {
        Self { lengths, offset }
    }

    /// Create a simple dashed outline.
    pub fn dashed(dash: f32, gap: f32) -> Self {
        Self {
            lengths: vec![dash, gap],
            offset: 0.0,
        }
    }

    /// Create a dash-dot pattern.
    pub fn dash_dot(dash: f32, gap: f32, dot: f32) -> Self {
        Self {
            lengths: vec![dash, gap, dot, gap],
            offset: 0.0,
        }
    }

    /// Total arc length of one on/off cycle.
    ///
    /// An odd-length pattern needs two passes over the lengths to return to
    /// its starting parity, so its cycle is twice the sum.
    pub fn cycle_length(&self) -> f32 {
        let sum: f32 = self.lengths.iter().sum();
        if self.lengths.len() % 2 == 0 { sum } else { sum * 2.0 }
    }

    /// An empty pattern renders as a solid outline.
    pub fn is_solid(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Stroke properties for a shape outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Paint for the stroke color/gradient
    pub paint: Paint,
    /// Nominal stroke width in logical pixels
    pub width: f32,
    /// Opacity multiplier (0.0 to 1.0)
    pub opacity: f32,
    /// Band placement relative to the nominal boundary
    pub alignment: StrokeAlignment,
    /// Optional dash pattern
    pub dash: Option<DashPattern>,
    /// Hold the on-screen width constant under camera zoom
    pub size_attenuation: bool,
}

impl Stroke {
    /// Create a solid color stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self::from_paint(Paint::Solid(color), width)
    }

    /// Create a stroke from a paint.
    pub fn from_paint(paint: Paint, width: f32) -> Self {
        Self {
            paint,
            width,
            opacity: 1.0,
            alignment: StrokeAlignment::Center,
            dash: None,
            size_attenuation: false,
        }
    }

    /// Set the opacity. Values outside `0.0..=1.0` are rejected when the
    /// owning shape is built.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the band alignment.
    pub fn with_alignment(mut self, alignment: StrokeAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set a dash pattern.
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Enable or disable size attenuation.
    pub fn with_size_attenuation(mut self, attenuation: bool) -> Self {
        self.size_attenuation = attenuation;
        self
    }

    /// Check if the stroke contributes any geometry.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.opacity > 0.0
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// The annular region a stroke occupies around a circle.
///
/// Produced once per render and consumed read-only by both the mesh and the
/// path backend, which is what keeps the two outputs in agreement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeBand {
    /// Inner boundary radius (clamped to zero when the band reaches the
    /// center).
    pub inner: f32,
    /// Outer boundary radius.
    pub outer: f32,
    /// Set when the band covers the whole interior disc, leaving no area
    /// for a separate fill.
    pub covers_interior: bool,
}

impl StrokeBand {
    /// Compute the band around a circle of the given radius.
    pub fn around_circle(radius: f32, width: f32, alignment: StrokeAlignment) -> Self {
        let (inner, outer) = match alignment {
            StrokeAlignment::Center => (radius - width * 0.5, radius + width * 0.5),
            StrokeAlignment::Inner => (radius - width, radius),
            StrokeAlignment::Outer => (radius, radius + width),
        };

        let covers_interior = width > 0.0 && inner <= 0.0;
        if inner < 0.0 {
            tracing::debug!(
                inner,
                radius,
                width,
                "stroke band reaches past the center, clamping inner radius to zero"
            );
        }

        Self {
            inner: inner.max(0.0),
            outer,
            covers_interior,
        }
    }

    /// Band thickness after clamping.
    pub fn width(&self) -> f32 {
        self.outer - self.inner
    }

    /// Radius of the band's center curve, along which dashes are sampled.
    pub fn mid_radius(&self) -> f32 {
        (self.inner + self.outer) * 0.5
    }

    /// Circumference of the band's center curve.
    pub fn circumference(&self) -> f32 {
        std::f32::consts::TAU * self.mid_radius()
    }

    /// Radius bounding the filled interior of the shape.
    ///
    /// An inner-aligned stroke consumes area that would otherwise be fill,
    /// so the fill stops at the band's inner boundary; for the other
    /// alignments the fill extends to the nominal radius and the band is
    /// composited over it.
    pub fn fill_radius(&self, alignment: StrokeAlignment, nominal_radius: f32) -> f32 {
        match alignment {
            StrokeAlignment::Inner => self.inner,
            StrokeAlignment::Center | StrokeAlignment::Outer => nominal_radius,
        }
    }
}
