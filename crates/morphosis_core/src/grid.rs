//! Sampling lattice and voxel corner template
//!
//! Axis coordinates are produced by repeatedly adding the step size to the
//! lower bound, so the number of samples per axis comes out of the loop
//! rather than from a division.

use morphosis_math::Vec3;

use crate::error::BuildError;
use crate::params::{FractalParams, BOUNDS_MAX, BOUNDS_MIN};

/// Offsets of the 8 cube corners relative to a lattice point
///
/// Corners 0..4 sit on the lower z-level and 4..8 on the upper one; within a
/// level they trace the square (-,+), (+,+), (+,-), (-,-) in (x, y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelTemplate {
    offsets: [Vec3; 8],
}

impl VoxelTemplate {
    /// Build the template for cubes of side `step`
    pub fn new(step: f32) -> Self {
        let h = step / 2.0;
        let zz = [-h, h];
        let xx = [-h, h, h, -h];
        let yy = [h, h, -h, -h];

        let mut offsets = [Vec3::ZERO; 8];
        let mut n = 0;
        for z in zz {
            for j in 0..4 {
                offsets[n] = Vec3::new(xx[j], yy[j], z);
                n += 1;
            }
        }
        Self { offsets }
    }

    /// Corner offsets in template order
    #[inline]
    pub fn offsets(&self) -> &[Vec3; 8] {
        &self.offsets
    }

    /// Corner positions of the cube centred on `center`
    #[inline]
    pub fn corners(&self, center: Vec3) -> [Vec3; 8] {
        self.offsets.map(|o| center + o)
    }
}

/// Regular lattice covering the sampling volume
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    /// `grid_length / step_size`
    pub grid_size: f32,
    /// Cubes visited per axis
    pub cells: usize,
    /// Corner template shared by every cube
    pub voxel: VoxelTemplate,
}

impl Grid {
    /// Build the lattice for `params`
    ///
    /// The per-axis cube count is `ceil(grid_size)`, limited to the number of
    /// axis samples the accumulation actually produced.
    pub fn new(params: &FractalParams) -> Result<Self, BuildError> {
        let step = params.step_size;
        let grid_size = params.grid_size();
        let capacity = grid_size as usize + 1;

        let x = subdiv_axis(BOUNDS_MIN.x, BOUNDS_MAX.x, step, capacity)?;
        let y = subdiv_axis(BOUNDS_MIN.y, BOUNDS_MAX.y, step, capacity)?;
        let z = subdiv_axis(BOUNDS_MIN.z, BOUNDS_MAX.z, step, capacity)?;

        let cells = (grid_size.ceil() as usize).min(x.len());

        Ok(Self {
            x,
            y,
            z,
            grid_size,
            cells,
            voxel: VoxelTemplate::new(step),
        })
    }

    /// Lattice point for cell `(x, y, z)`
    #[inline]
    pub fn point(&self, x: usize, y: usize, z: usize) -> Vec3 {
        Vec3::new(self.x[x], self.y[y], self.z[z])
    }

    /// Corner positions of cell `(x, y, z)`
    #[inline]
    pub fn cube_corners(&self, x: usize, y: usize, z: usize) -> [Vec3; 8] {
        self.voxel.corners(self.point(x, y, z))
    }

    /// Total number of cubes visited by a build
    pub fn cube_count(&self) -> usize {
        self.cells * self.cells * self.cells
    }

    /// Bytes held by the three axis sequences
    pub fn memory_bytes(&self) -> usize {
        (self.x.capacity() + self.y.capacity() + self.z.capacity()) * std::mem::size_of::<f32>()
    }
}

/// Coordinates `start, start + step, ...` up to and including `stop`
///
/// `capacity` is the expected length; the vector grows past it if the
/// accumulation yields more samples.
pub fn subdiv_axis(start: f32, stop: f32, step: f32, capacity: usize) -> Result<Vec<f32>, BuildError> {
    let mut axis = Vec::new();
    axis.try_reserve(capacity)
        .map_err(|_| BuildError::Allocation { what: "grid axis", requested: capacity })?;

    let mut val = start;
    while val <= stop {
        if axis.len() == axis.capacity() {
            axis.try_reserve(1)
                .map_err(|_| BuildError::Allocation { what: "grid axis", requested: axis.len() + 1 })?;
        }
        axis.push(val);
        val += step;
    }
    Ok(axis)
}
