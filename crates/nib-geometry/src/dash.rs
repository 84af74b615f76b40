//! Arc-length dash sampling along a closed curve.
//!
//! Dashes are sampled on the stroke band's center curve. The walk covers
//! `[0, C)` where `C` is that curve's circumference; runs are clipped to the
//! interval, so a dash that straddles the wrap point shows up as a tail
//! segment ending at `C` plus a head segment starting at 0, with its total
//! length preserved.

use crate::DashPattern;
use std::f32::consts::TAU;

/// Angular slack under which a segment counts as a full revolution.
const FULL_TURN_EPSILON: f32 = 1e-4;

/// A contiguous "on" run of the dash pattern, in arc-length positions along
/// the band's center curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashSegment {
    /// Arc-length position where the run starts.
    pub start: f32,
    /// Arc-length position where the run ends.
    pub end: f32,
}

impl DashSegment {
    /// A segment covering the entire curve (solid outline).
    pub fn full(circumference: f32) -> Self {
        Self {
            start: 0.0,
            end: circumference,
        }
    }

    /// Rendered length of this run.
    pub fn arc_length(&self) -> f32 {
        self.end - self.start
    }

    /// Start/end angles in radians on a curve of the given radius.
    pub fn angular_span(&self, radius: f32) -> (f32, f32) {
        (self.start / radius, self.end / radius)
    }

    /// Whether the run sweeps a full revolution on a curve of the given
    /// radius. Both backends use this to close their seams the same way.
    pub fn spans_full_circle(&self, radius: f32) -> bool {
        let (start, end) = self.angular_span(radius);
        end - start >= TAU - FULL_TURN_EPSILON
    }
}

/// Sample the on-runs of a dash pattern around a curve of the given
/// circumference.
///
/// `None` (or an empty pattern) renders a solid outline: one segment
/// spanning the whole curve. Otherwise the pattern alternates on/off,
/// cycling from the fixed reference angle 0, phase-shifted by the pattern's
/// offset. Emitted segments are ordered, disjoint, and clipped to
/// `[0, circumference)`.
pub fn sample_dashes(circumference: f32, pattern: Option<&DashPattern>) -> Vec<DashSegment> {
    let Some(pattern) = pattern.filter(|p| !p.is_solid()) else {
        return vec![DashSegment::full(circumference)];
    };

    let cycle = pattern.cycle_length();
    if !(cycle > 0.0) {
        tracing::warn!("dash pattern has no positive run length, rendering a solid outline");
        return vec![DashSegment::full(circumference)];
    }

    // A positive offset pulls the pattern backwards along the curve, so the
    // walk starts one partial cycle before position 0.
    let mut position = -pattern.offset.rem_euclid(cycle);
    let mut run = 0usize;
    let mut segments = Vec::new();

    while position < circumference {
        let length = pattern.lengths[run % pattern.lengths.len()];
        let on = run % 2 == 0;
        let end = position + length;

        if on && end > 0.0 {
            let clipped_start = position.max(0.0);
            let clipped_end = end.min(circumference);
            if clipped_end > clipped_start {
                segments.push(DashSegment {
                    start: clipped_start,
                    end: clipped_end,
                });
            }
        }

        position = end;
        run += 1;
    }

    segments
}
