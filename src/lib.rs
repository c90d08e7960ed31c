//! # Icosa
//!
//! Icosphere mesh generation for interactive 3D viewers.
//!
//! Icosa builds a triangulated unit sphere by recursively subdividing an
//! icosahedron, sharing every edge midpoint between the two triangles that
//! own the edge so the mesh stays manifold at every level. Around the
//! generator it provides the pieces a viewer needs to drive it: a dirty-flag
//! layer that re-runs generation only when a parameter actually changed, and
//! buffer staging for flat and Phong shading.
//!
//! ## Quick Start
//!
//! ```
//! use icosa::prelude::*;
//!
//! let mesh = generate(2);
//! assert_eq!(mesh.num_positions(), 162);
//! assert_eq!(mesh.num_triangles(), 320);
//!
//! // Derived triangles with outward face normals.
//! for triangle in mesh.triangles() {
//!     let normal = triangle.normal();
//!     assert!((normal.norm() - 1.0).abs() < 1e-6);
//! }
//! ```
//!
//! ## Driving regeneration from an update loop
//!
//! The expensive rebuild is gated on parameter changes, so calling
//! [`ViewerParams::refresh`] every frame regenerates at most once per
//! user-driven change:
//!
//! ```
//! use icosa::prelude::*;
//!
//! let mut params = ViewerParams::new();
//! params.set_subdivision_level(3);
//!
//! // Once per frame.
//! let regenerated = params.refresh(|staged| {
//!     // Upload staged buffer bytes to the GPU here.
//!     assert!(staged.position_data().is_some());
//! });
//! assert!(regenerated);
//!
//! // Nothing changed, so the next tick is free.
//! assert!(!params.refresh(|_| unreachable!()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dirty;
pub mod error;
pub mod icosphere;
pub mod mesh;
pub mod shading;
pub mod viewer;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use icosa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dirty::DirtyProperty;
    pub use crate::error::{MeshError, Result};
    pub use crate::icosphere::generate;
    pub use crate::mesh::{Mesh, Triangle};
    pub use crate::shading::{flat_vertices, Shading, StagedMesh, Vertex};
    pub use crate::viewer::{ViewerParams, MAX_SUBDIVISION_LEVEL};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
