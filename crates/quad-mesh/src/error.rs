//! Error types for mesh generation.
//!
//! Out-of-range radii and segment counts are clamped and never reach this
//! type. Only parameters that would make the geometry undefined are errors.

use thiserror::Error;

/// Errors that can occur while generating a rounded quad.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A shape parameter cannot produce valid geometry.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name (`width`, `height`, `corner_radius`)
        name: &'static str,
        /// Offending value
        value: f32,
        /// Why the value was rejected
        reason: &'static str,
    },
}

impl MeshError {
    pub(crate) fn invalid(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;
