//! Plain triangle-mesh data produced by icosphere generation.
//!
//! A [`Mesh`] is index-based: an append-only list of positions and a list of
//! index triples referencing them. This is deliberately the same layout the
//! renderer consumes (vertex attribute buffer plus element buffer), so a
//! generated mesh can be uploaded without restructuring.
//!
//! [`Triangle`] is a derived view: three dereferenced corner positions with a
//! computed face normal. Triangles are never stored; they are produced on
//! demand by [`Mesh::triangles`].

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};

/// An indexed triangle mesh.
///
/// `positions` is append-only during construction: an index, once assigned,
/// never changes. Every entry of `triangle_indices` references three distinct
/// positions in counter-clockwise order as seen from outside the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions; insertion order defines index identity.
    pub positions: Vec<Point3<f32>>,
    /// Triangles as index triples into `positions`, counter-clockwise winding.
    pub triangle_indices: Vec<[u32; 3]>,
}

impl Mesh {
    /// Number of vertex positions.
    pub fn num_positions(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangle_indices.len()
    }

    /// Iterates over the dereferenced triangles of this mesh.
    ///
    /// The iterator is recomputed from the index list on every call, so it
    /// can be restarted at any time without side effects.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangle_indices.iter().map(|&[i1, i2, i3]| Triangle {
            p1: self.positions[i1 as usize],
            p2: self.positions[i2 as usize],
            p3: self.positions[i3 as usize],
        })
    }

    /// Checks that the mesh is well-formed and a closed manifold surface.
    ///
    /// Verifies that every triangle references three distinct in-range
    /// positions and that every edge is shared by exactly two triangles.
    pub fn validate(&self) -> Result<()> {
        let num_positions = self.positions.len();
        let mut edge_faces: HashMap<(u32, u32), usize> = HashMap::new();

        for (face, &[i1, i2, i3]) in self.triangle_indices.iter().enumerate() {
            for index in [i1, i2, i3] {
                if index as usize >= num_positions {
                    return Err(MeshError::InvalidVertexIndex {
                        face,
                        vertex: index as usize,
                    });
                }
            }
            if i1 == i2 || i2 == i3 || i3 == i1 {
                return Err(MeshError::DegenerateFace { face });
            }
            for (a, b) in [(i1, i2), (i2, i3), (i3, i1)] {
                let key = if a < b { (a, b) } else { (b, a) };
                *edge_faces.entry(key).or_insert(0) += 1;
            }
        }

        for (&(v0, v1), &incident) in &edge_faces {
            if incident != 2 {
                return Err(MeshError::NonManifoldEdge {
                    v0: v0 as usize,
                    v1: v1 as usize,
                    incident,
                });
            }
        }

        Ok(())
    }
}

/// A triangle dereferenced from a [`Mesh`], with a computed face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner.
    pub p1: Point3<f32>,
    /// Second corner.
    pub p2: Point3<f32>,
    /// Third corner.
    pub p3: Point3<f32>,
}

impl Triangle {
    /// Unit face normal, pointing outward for counter-clockwise winding.
    ///
    /// Well-defined only for non-degenerate triangles; all triangles produced
    /// by icosphere generation are non-degenerate by construction.
    pub fn normal(&self) -> Vector3<f32> {
        (self.p2 - self.p1).cross(&(self.p3 - self.p1)).normalize()
    }

    /// Centroid of the three corners.
    pub fn centroid(&self) -> Point3<f32> {
        Point3::from((self.p1.coords + self.p2.coords + self.p3.coords) / 3.0)
    }
}
