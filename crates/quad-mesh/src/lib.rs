//! # quad-mesh
//!
//! Procedural mesh generation for flat rounded rectangles ("rounded quads").
//!
//! A quad is described by width, height, corner radius and the number of
//! samples per corner arc. Generation produces a vertex buffer, a matching UV
//! buffer and a fan-triangulated index buffer around one shared center vertex.
//! Uploading the result is left to the rendering backend.
//!
//! ```
//! use quad_mesh::{generate, ShapeParameters};
//!
//! let mesh = generate(&ShapeParameters::new(2.0, 1.0, 0.2, 8)).unwrap();
//! assert_eq!(mesh.vertex_count(), 33);
//! assert_eq!(mesh.triangle_count(), 32);
//! ```

mod builder;
pub mod constants;
mod error;
mod mesh;
mod params;
mod tessellate;
#[cfg(feature = "bytemuck")]
mod vertex;

pub use builder::*;
pub use error::*;
pub use mesh::*;
pub use params::*;
pub use tessellate::*;
#[cfg(feature = "bytemuck")]
pub use vertex::*;
