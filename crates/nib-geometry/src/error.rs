//! Error types for shape configuration.

use std::fmt;

/// Errors raised while validating a shape description.
///
/// Every variant is a programming/input error: the same inputs always fail
/// the same way, and no retry is meaningful. The offending shape or geometry
/// is never constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The radius is zero, negative, or not a number.
    Radius {
        /// The rejected radius.
        radius: f32,
    },

    /// The stroke width is negative or not a number.
    StrokeWidth {
        /// The rejected width.
        width: f32,
    },

    /// An opacity value lies outside `0.0..=1.0`.
    Opacity {
        /// Which attribute carried the value.
        attribute: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A dash run length is zero, negative, or not a number.
    DashLength {
        /// The rejected run length.
        length: f32,
    },

    /// A center-aligned stroke is wider than the circle's diameter.
    StrokeTooWide {
        /// The rejected stroke width.
        width: f32,
        /// The circle radius it was paired with.
        radius: f32,
    },

    /// The camera zoom factor is zero, negative, or not a number.
    Zoom {
        /// The rejected zoom factor.
        zoom: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Radius { radius } => {
                write!(f, "circle radius must be positive, got {}", radius)
            }
            ConfigError::StrokeWidth { width } => {
                write!(f, "stroke width must be non-negative, got {}", width)
            }
            ConfigError::Opacity { attribute, value } => {
                write!(f, "{} must be within 0.0..=1.0, got {}", attribute, value)
            }
            ConfigError::DashLength { length } => {
                write!(f, "dash run lengths must be positive, got {}", length)
            }
            ConfigError::StrokeTooWide { width, radius } => {
                write!(
                    f,
                    "center-aligned stroke width {} exceeds the diameter of a radius-{} circle",
                    width, radius
                )
            }
            ConfigError::Zoom { zoom } => {
                write!(f, "camera zoom must be positive, got {}", zoom)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, ConfigError>;
