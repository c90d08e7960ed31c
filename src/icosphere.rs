//! Icosphere generation by recursive icosahedron subdivision.
//!
//! An icosphere approximates the unit sphere by starting from a regular
//! icosahedron (12 vertices, 20 triangles) and repeatedly splitting every
//! triangle into four. Each subdivision step inserts one new vertex at the
//! midpoint of every edge and re-projects it onto the sphere by normalizing
//! to unit length, which is what makes the mesh rounder at every level.
//!
//! The mesh stays manifold because each edge midpoint is computed exactly
//! once and shared by the two triangles adjacent to the edge. A scratch map
//! keyed by the edge's canonical (ascending) index pair holds the midpoint
//! index between the first and second visit of the edge; the second visit
//! removes the entry, so the map must be empty once a step finishes.
//!
//! # Example
//!
//! ```
//! let mesh = icosa::icosphere::generate(1);
//!
//! // Each level quadruples the triangle count and adds 3/2 midpoints
//! // per previous triangle: 20 * 4 = 80, 12 + 20 * 3 / 2 = 42.
//! assert_eq!(mesh.triangle_indices.len(), 80);
//! assert_eq!(mesh.positions.len(), 42);
//! ```

use std::collections::HashMap;

use nalgebra::Point3;

use crate::mesh::Mesh;

/// Unit-sphere vertex positions of the base icosahedron.
#[allow(clippy::excessive_precision)]
const BASE_POSITIONS: [[f32; 3]; 12] = [
    [0.0, 0.0, 1.0],
    [0.894_427_18, 0.0, 0.447_213_59],
    [0.276_393_2, 0.850_650_79, 0.447_213_59],
    [-0.723_606_82, 0.525_731_09, 0.447_213_59],
    [-0.723_606_82, -0.525_731_09, 0.447_213_59],
    [0.276_393_2, -0.850_650_79, 0.447_213_59],
    [0.723_606_82, 0.525_731_09, -0.447_213_59],
    [-0.276_393_2, 0.850_650_79, -0.447_213_59],
    [-0.894_427_18, 1.095_357_4e-16, -0.447_213_59],
    [-0.276_393_2, -0.850_650_79, -0.447_213_59],
    [0.723_606_82, -0.525_731_09, -0.447_213_59],
    [0.0, 0.0, -1.0],
];

/// Triangles of the base icosahedron, counter-clockwise from outside.
const BASE_TRIANGLES: [[u32; 3]; 20] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 1],
    [1, 6, 2],
    [2, 7, 3],
    [3, 8, 4],
    [4, 9, 5],
    [5, 10, 1],
    [2, 6, 7],
    [3, 7, 8],
    [4, 8, 9],
    [5, 9, 10],
    [1, 10, 6],
    [6, 11, 7],
    [7, 11, 8],
    [8, 11, 9],
    [9, 11, 10],
    [10, 11, 6],
];

/// The level-0 mesh: the base icosahedron.
fn base() -> Mesh {
    Mesh {
        positions: BASE_POSITIONS.iter().map(|&p| Point3::from(p)).collect(),
        triangle_indices: BASE_TRIANGLES.to_vec(),
    }
}

/// Generates the icosphere at the given subdivision level.
///
/// Level 0 is the undivided icosahedron; each further level splits every
/// triangle into four, so level `L` has `20 * 4^L` triangles. The result is
/// deterministic: the same level always yields identical positions and
/// indices.
///
/// Generation runs to completion on the calling thread. Callers driving this
/// from a frame loop are expected to bound `level` (see
/// [`crate::viewer::MAX_SUBDIVISION_LEVEL`]) since cost grows with `4^level`.
pub fn generate(level: u8) -> Mesh {
    let mut mesh = base();
    for _ in 0..level {
        mesh = subdivide_once(mesh);
    }
    mesh
}

/// Splits every triangle of `previous` into four, re-projecting the new edge
/// midpoints onto the unit sphere.
///
/// Consumes the previous mesh: its position list is moved into the new mesh
/// unchanged, so all indices of the previous level stay valid in the result.
fn subdivide_once(previous: Mesh) -> Mesh {
    let Mesh {
        mut positions,
        triangle_indices: previous_indices,
    } = previous;

    // Each previous triangle contributes 3 midpoints, each shared by 2 triangles.
    positions.reserve(previous_indices.len() * 3 / 2);
    let mut triangle_indices = Vec::with_capacity(previous_indices.len() * 4);

    // Midpoint index per pending edge, keyed by the canonical (ascending)
    // endpoint pair. An edge of a closed manifold belongs to exactly two
    // triangles, so the entry is removed on its second visit and the map
    // must be empty when the pass completes.
    let mut edge_midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    let mut midpoint = |i1: u32, i2: u32| -> u32 {
        let key = if i1 < i2 { (i1, i2) } else { (i2, i1) };
        if let Some(index) = edge_midpoints.remove(&key) {
            return index;
        }

        let a = positions[i1 as usize].coords;
        let b = positions[i2 as usize].coords;
        let index = positions.len() as u32;
        positions.push(Point3::from(((a + b) * 0.5).normalize()));
        edge_midpoints.insert(key, index);
        index
    };

    for &[i1, i2, i3] in &previous_indices {
        let m12 = midpoint(i1, i2);
        let m23 = midpoint(i2, i3);
        let m31 = midpoint(i3, i1);

        // Three corner triangles and the inverted center one, all keeping
        // the outward counter-clockwise winding.
        triangle_indices.push([i1, m12, m31]);
        triangle_indices.push([m12, i2, m23]);
        triangle_indices.push([m31, m23, i3]);
        triangle_indices.push([m12, m23, m31]);
    }

    debug_assert!(
        edge_midpoints.is_empty(),
        "{} unmatched edges after subdivision, input mesh is not a closed manifold",
        edge_midpoints.len()
    );
    debug_assert_eq!(triangle_indices.len(), previous_indices.len() * 4);

    Mesh {
        positions,
        triangle_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_0_is_base_icosahedron() {
        let mesh = generate(0);

        assert_eq!(mesh.num_positions(), 12);
        assert_eq!(mesh.num_triangles(), 20);
        // Bit-for-bit parity with the constant table.
        assert_eq!(mesh.positions[1], Point3::new(0.894_427_18, 0.0, 0.447_213_59));
        assert_eq!(mesh.positions[8], Point3::new(-0.894_427_18, 1.095_357_4e-16, -0.447_213_59));
        assert_eq!(mesh.triangle_indices[0], [0, 1, 2]);
        assert_eq!(mesh.triangle_indices[19], [10, 11, 6]);
    }

    #[test]
    fn test_expected_counts_per_level() {
        let level_1 = generate(1);
        assert_eq!(level_1.num_positions(), 42);
        assert_eq!(level_1.num_triangles(), 80);

        let level_2 = generate(2);
        assert_eq!(level_2.num_positions(), 162);
        assert_eq!(level_2.num_triangles(), 320);
    }

    #[test]
    fn test_each_level_quadruples_triangles() {
        for level in 0..4 {
            let coarse = generate(level);
            let fine = generate(level + 1);
            assert_eq!(fine.num_triangles(), 4 * coarse.num_triangles());
        }
    }

    #[test]
    fn test_all_positions_on_unit_sphere() {
        for level in 0..4 {
            let mesh = generate(level);
            for position in &mesh.positions {
                assert!(
                    (position.coords.norm() - 1.0).abs() < 1e-6,
                    "position {:?} at level {} is off the unit sphere",
                    position,
                    level
                );
            }
        }
    }

    #[test]
    fn test_every_level_is_closed_manifold() {
        for level in 0..4 {
            generate(level).validate().unwrap();
        }
    }

    #[test]
    fn test_subdivision_preserves_previous_positions() {
        let coarse = generate(1);
        let fine = generate(2);

        // The previous level's positions survive at the same indices.
        assert_eq!(&fine.positions[..coarse.num_positions()], &coarse.positions[..]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate(3), generate(3));
    }

    #[test]
    fn test_base_normals_point_outward() {
        let mesh = generate(0);

        let mut count = 0;
        for triangle in mesh.triangles() {
            // The mesh is centered at the origin, so an outward normal has a
            // positive component along the centroid direction.
            assert!(triangle.normal().dot(&triangle.centroid().coords) > 0.0);
            count += 1;
        }
        assert_eq!(count, 20);
    }

    #[test]
    fn test_subdivided_normals_point_outward() {
        for triangle in generate(2).triangles() {
            assert!(triangle.normal().dot(&triangle.centroid().coords) > 0.0);
        }
    }
}
