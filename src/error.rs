//! Error types for icosa.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors reported by mesh validation.
///
/// Icosphere generation itself has no error path: a malformed intermediate
/// mesh is a contract violation caught by debug assertions, and out-of-range
/// subdivision levels are clamped by the parameter layer before they reach
/// generation.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A face references a vertex index outside the position list.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An edge is not shared by exactly two faces, so the mesh is not a
    /// closed manifold surface.
    #[error("edge ({v0}, {v1}) has {incident} incident faces, expected 2")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
        /// Number of faces incident to the edge.
        incident: usize,
    },
}
