//! Shape constants for rounded quad generation
//!
//! Defaults match the component the mesh is modelled on: a 2 x 1 quad with
//! 0.2 rounding and eight samples per corner.

use std::f32::consts::FRAC_PI_2;

/// Fewest samples allowed along one corner arc (both endpoints included)
pub const MIN_CORNER_SEGMENTS: u32 = 4;

/// Most samples allowed along one corner arc
pub const MAX_CORNER_SEGMENTS: u32 = 32;

/// Default quad width in local units
pub const DEFAULT_WIDTH: f32 = 2.0;

/// Default quad height in local units
pub const DEFAULT_HEIGHT: f32 = 1.0;

/// Default corner radius
pub const DEFAULT_CORNER_RADIUS: f32 = 0.2;

/// Default samples per corner arc
pub const DEFAULT_CORNER_SEGMENTS: u32 = 8;

/// Number of rounded corners
pub const CORNER_COUNT: u32 = 4;

/// Angular sweep of one corner arc (90 degrees)
pub const CORNER_SWEEP: f32 = FRAC_PI_2;

/// Start angle of each corner arc, counter-clockwise from +X.
/// Order: top-right, top-left, bottom-left, bottom-right.
pub const CORNER_START_ANGLES: [f32; 4] = [0.0, FRAC_PI_2, 2.0 * FRAC_PI_2, 3.0 * FRAC_PI_2];

/// UV of the shared center vertex
pub const CENTER_UV: [f32; 2] = [0.5, 0.5];

/// Name given to generated meshes unless overridden
pub const DEFAULT_MESH_NAME: &str = "RoundedRect";
