//! Marching-cubes polygonization of a single cube
//!
//! The sampled field is binary (0.0 outside, 1.0 inside), so edge crossings
//! snap to the inside corner rather than interpolating along the edge.

use morphosis_math::Vec3;

use crate::lookup_tables::{EdgeMask, EDGES, TRI_END, TRI_TABLE};
use crate::triangle::{Triangle, TriangleBatch};

/// The 8 sampled corners of one cube
///
/// Corner order follows the voxel template; see [`crate::lookup_tables`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubeSample {
    /// Corner positions
    pub positions: [Vec3; 8],
    /// Membership value per corner (non-zero = inside)
    pub values: [f32; 8],
}

impl CubeSample {
    pub fn new(positions: [Vec3; 8], values: [f32; 8]) -> Self {
        Self { positions, values }
    }

    /// 8-bit configuration index: bit i is set when corner i is inside
    pub fn cube_index(&self) -> u8 {
        let mut index = 0u8;
        for (i, &value) in self.values.iter().enumerate() {
            if value != 0.0 {
                index |= 1 << i;
            }
        }
        index
    }
}

/// Crossing point on the edge `p0..p1` with corner values `v0`, `v1`
///
/// An endpoint whose value is exactly 1.0 wins (`p0` first). Equal values
/// resolve to `p0`. Anything else interpolates towards the 1.0 level.
pub fn interpolate(p0: Vec3, p1: Vec3, v0: f32, v1: f32) -> Vec3 {
    if v0 == 1.0 {
        return p0;
    }
    if v1 == 1.0 {
        return p1;
    }
    if v1 - v0 == 0.0 {
        return p0;
    }
    let mu = (1.0 - v0) / (v1 - v0);
    p0.lerp(p1, mu)
}

/// Crossing points for every edge set in the cube's edge mask
fn edge_vertices(cube: &CubeSample, mask: EdgeMask) -> [Vec3; 12] {
    let mut vertices = [Vec3::ZERO; 12];
    for (edge, &[a, b]) in EDGES.iter().enumerate() {
        if mask.crosses(edge) {
            vertices[edge] = interpolate(
                cube.positions[a],
                cube.positions[b],
                cube.values[a],
                cube.values[b],
            );
        }
    }
    vertices
}

/// Polygonize one cube, returning its triangles (0 to 5)
pub fn polygonise(cube: &CubeSample) -> TriangleBatch {
    let mut batch = TriangleBatch::new();
    polygonise_into(cube, &mut batch);
    batch
}

/// Polygonize one cube into `batch`, replacing whatever it held
pub fn polygonise_into(cube: &CubeSample, batch: &mut TriangleBatch) {
    batch.clear();
    let cube_index = cube.cube_index();
    let mask = EdgeMask::for_case(cube_index);
    if mask.is_empty() {
        return;
    }

    let vertices = edge_vertices(cube, mask);
    for tri in TRI_TABLE[cube_index as usize].chunks_exact(3) {
        if tri[0] == TRI_END {
            break;
        }
        batch.push(Triangle::new(
            vertices[tri[0] as usize],
            vertices[tri[1] as usize],
            vertices[tri[2] as usize],
        ));
    }
}
