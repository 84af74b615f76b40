//! Camera zoom compensation for stroke widths.
//!
//! With size attenuation enabled, a stroke keeps a constant thickness on
//! screen regardless of camera zoom, so its world-space width is divided by
//! the zoom factor before any geometry is built.

use crate::{ConfigError, GeometryResult};

/// Narrow read-only view of the camera: the only thing geometry compilation
/// needs from it is the current zoom factor (positive, 1.0 = no scaling).
///
/// Implemented for plain `f32` so tests and headless exports need no camera
/// object at all.
pub trait Zoom {
    /// Current zoom factor.
    fn zoom(&self) -> f32;
}

impl Zoom for f32 {
    fn zoom(&self) -> f32 {
        *self
    }
}

/// Effective stroke width under the given zoom.
///
/// Pure: `width / zoom` when attenuation is enabled, `width` otherwise.
/// A zoom that is zero, negative, or NaN is a configuration error.
pub fn resolved_stroke_width(
    width: f32,
    size_attenuation: bool,
    zoom: f32,
) -> GeometryResult<f32> {
    if !(zoom > 0.0) {
        return Err(ConfigError::Zoom { zoom });
    }
    Ok(if size_attenuation { width / zoom } else { width })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attenuated_width_scales_inversely() {
        assert_eq!(resolved_stroke_width(10.0, true, 2.0).unwrap(), 5.0);
        assert_eq!(resolved_stroke_width(10.0, true, 0.5).unwrap(), 20.0);
    }

    #[test]
    fn test_unattenuated_width_ignores_zoom() {
        assert_eq!(resolved_stroke_width(10.0, false, 2.0).unwrap(), 10.0);
        assert_eq!(resolved_stroke_width(10.0, false, 0.25).unwrap(), 10.0);
    }

    #[test]
    fn test_rejects_non_positive_zoom() {
        assert_eq!(
            resolved_stroke_width(10.0, true, 0.0).unwrap_err(),
            ConfigError::Zoom { zoom: 0.0 }
        );
        assert!(resolved_stroke_width(10.0, false, -1.0).is_err());
        assert!(resolved_stroke_width(10.0, true, f32::NAN).is_err());
    }

    #[test]
    fn test_f32_is_a_zoom_source() {
        let camera = 2.0f32;
        assert_eq!(camera.zoom(), 2.0);
    }
}
