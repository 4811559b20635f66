//! Shape parameters and their validation

use crate::constants::*;
use crate::error::{MeshError, MeshResult};

/// Largest radius that fits a `width` x `height` quad.
#[inline]
pub fn max_radius(width: f32, height: f32) -> f32 {
    width.min(height) * 0.5
}

/// Clamp a corner radius into `[0, min(width, height) / 2]`.
///
/// Out-of-range radii are never an error. A negative maximum (from negative
/// dimensions) collapses to zero so the result is always a usable radius.
pub fn clamp_radius(width: f32, height: f32, radius: f32) -> f32 {
    let max = max_radius(width, height).max(0.0);
    radius.clamp(0.0, max)
}

/// Clamp a per-corner sample count into `[MIN_CORNER_SEGMENTS, MAX_CORNER_SEGMENTS]`.
#[inline]
pub fn clamp_segments(segments: u32) -> u32 {
    segments.clamp(MIN_CORNER_SEGMENTS, MAX_CORNER_SEGMENTS)
}

/// Input to a generation call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParameters {
    pub width: f32,
    pub height: f32,
    /// Corner radius, clamped to `[0, min(width, height) / 2]` before use
    pub corner_radius: f32,
    /// Samples along each 90 degree arc, both endpoints included. Clamped to `[4, 32]`.
    pub corner_segments: u32,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            corner_radius: DEFAULT_CORNER_RADIUS,
            corner_segments: DEFAULT_CORNER_SEGMENTS,
        }
    }
}

impl ShapeParameters {
    pub fn new(width: f32, height: f32, corner_radius: f32, corner_segments: u32) -> Self {
        Self {
            width,
            height,
            corner_radius,
            corner_segments,
        }
    }

    /// Check the preconditions clamping cannot repair.
    ///
    /// Width and height must be finite and positive, otherwise the maximum
    /// radius and the UV normalization are undefined. A NaN radius has no
    /// meaningful clamp and is rejected as well.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(MeshError::invalid(
                "width",
                self.width,
                "must be finite and greater than zero",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(MeshError::invalid(
                "height",
                self.height,
                "must be finite and greater than zero",
            ));
        }
        if self.corner_radius.is_nan() {
            return Err(MeshError::invalid(
                "corner_radius",
                self.corner_radius,
                "must be a number",
            ));
        }
        Ok(())
    }

    /// Validated copy with radius and segment count clamped into range.
    pub fn clamped(&self) -> MeshResult<Self> {
        self.validate()?;

        let corner_radius = clamp_radius(self.width, self.height, self.corner_radius);
        let corner_segments = clamp_segments(self.corner_segments);

        if corner_radius != self.corner_radius {
            log::debug!(
                "corner radius {} clamped to {} for {}x{} quad",
                self.corner_radius,
                corner_radius,
                self.width,
                self.height
            );
        }
        if corner_segments != self.corner_segments {
            log::debug!(
                "corner segments {} clamped to {}",
                self.corner_segments,
                corner_segments
            );
        }

        Ok(Self {
            corner_radius,
            corner_segments,
            ..*self
        })
    }

    /// Vertex count of the generated mesh: four arcs plus the center.
    pub fn vertex_count(&self) -> usize {
        (CORNER_COUNT * clamp_segments(self.corner_segments) + 1) as usize
    }

    /// Triangle count: `segments - 1` per corner fan plus one connector per edge.
    pub fn triangle_count(&self) -> usize {
        (CORNER_COUNT * (clamp_segments(self.corner_segments) - 1) + CORNER_COUNT) as usize
    }

    pub fn index_count(&self) -> usize {
        self.triangle_count() * 3
    }
}
