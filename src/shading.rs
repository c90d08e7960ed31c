//! Shading modes and CPU-side buffer staging for the renderer.
//!
//! The renderer consumes the icosphere in one of two layouts:
//!
//! - **Flat**: one vertex per triangle corner carrying the face normal.
//!   Vertices are not shared, so every face shades uniformly and the mesh
//!   is drawn unindexed.
//! - **Phong**: the mesh's shared positions plus an element buffer. On the
//!   unit sphere every position is its own outward normal, so the position
//!   attribute doubles as the normal attribute and normals interpolate
//!   smoothly across faces.
//!
//! [`Shading`] selects between the two and carries the per-variant counts
//! shown in the viewer's panel; [`StagedMesh`] is the staged buffer data.

use bytemuck::{Pod, Zeroable};
use nalgebra::Point3;

use crate::mesh::Mesh;

/// Shading mode, carrying the statistics of the last staged mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Flat shading from per-face normals.
    Flat {
        /// Number of staged vertices (three per triangle).
        vertex_count: usize,
    },
    /// Phong shading from interpolated per-vertex normals.
    Phong {
        /// Number of shared vertex positions.
        position_count: usize,
        /// Number of element-buffer indices (three per triangle).
        index_count: usize,
    },
}

impl Shading {
    /// Flat shading with zeroed statistics.
    pub fn flat() -> Self {
        Shading::Flat { vertex_count: 0 }
    }

    /// Phong shading with zeroed statistics.
    pub fn phong() -> Self {
        Shading::Phong {
            position_count: 0,
            index_count: 0,
        }
    }

    /// Display label for the viewer's mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            Shading::Flat { .. } => "Flat shading",
            Shading::Phong { .. } => "Phong shading",
        }
    }
}

impl Default for Shading {
    fn default() -> Self {
        Shading::phong()
    }
}

/// GPU vertex with position and normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Vertex normal.
    pub normal: [f32; 3],
}

/// Flattens a mesh into per-triangle vertices carrying the face normal.
pub fn flat_vertices(mesh: &Mesh) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(3 * mesh.num_triangles());

    for triangle in mesh.triangles() {
        let normal: [f32; 3] = triangle.normal().into();
        vertices.push(Vertex {
            position: triangle.p1.into(),
            normal,
        });
        vertices.push(Vertex {
            position: triangle.p2.into(),
            normal,
        });
        vertices.push(Vertex {
            position: triangle.p3.into(),
            normal,
        });
    }

    vertices
}

/// Buffer data handed to the renderer after regeneration.
///
/// Byte-level accessors return the exact contents of the corresponding GPU
/// buffer upload.
#[derive(Debug, Clone, PartialEq)]
pub enum StagedMesh {
    /// Unindexed vertex buffer for flat shading.
    Flat {
        /// Per-triangle vertices with face normals.
        vertices: Vec<Vertex>,
    },
    /// Shared positions plus element buffer for Phong shading.
    Indexed {
        /// Shared vertex positions; each is also its own unit normal.
        positions: Vec<Point3<f32>>,
        /// Triangle index triples into `positions`.
        triangle_indices: Vec<[u32; 3]>,
    },
}

impl StagedMesh {
    /// Stages `mesh` for the given shading mode, updating the mode's
    /// displayed statistics. The mesh is consumed; for Phong shading its
    /// buffers are moved into the result without copying.
    pub fn stage(mesh: Mesh, shading: &mut Shading) -> Self {
        match shading {
            Shading::Flat { vertex_count } => {
                let vertices = flat_vertices(&mesh);
                *vertex_count = vertices.len();
                StagedMesh::Flat { vertices }
            }
            Shading::Phong {
                position_count,
                index_count,
            } => {
                *position_count = mesh.num_positions();
                *index_count = 3 * mesh.num_triangles();
                StagedMesh::Indexed {
                    positions: mesh.positions,
                    triangle_indices: mesh.triangle_indices,
                }
            }
        }
    }

    /// Vertex buffer bytes for flat drawing; `None` for the indexed layout.
    pub fn vertex_data(&self) -> Option<&[u8]> {
        match self {
            StagedMesh::Flat { vertices } => Some(bytemuck::cast_slice(vertices)),
            StagedMesh::Indexed { .. } => None,
        }
    }

    /// Position attribute bytes for indexed drawing; `None` for the flat layout.
    pub fn position_data(&self) -> Option<&[u8]> {
        match self {
            StagedMesh::Flat { .. } => None,
            StagedMesh::Indexed { positions, .. } => Some(bytemuck::cast_slice(positions)),
        }
    }

    /// Element buffer bytes for indexed drawing; `None` for the flat layout.
    pub fn index_data(&self) -> Option<&[u8]> {
        match self {
            StagedMesh::Flat { .. } => None,
            StagedMesh::Indexed {
                triangle_indices, ..
            } => Some(bytemuck::cast_slice(triangle_indices)),
        }
    }
}
