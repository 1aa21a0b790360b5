//! The result of a fractal build

use std::time::Duration;

use morphosis_mesh::{Bounds, Triangle, TriangleBuffer};

use crate::params::FractalParams;
use crate::sampler::SamplingStrategy;

/// Half-width of the display cube the mesh is scaled into
pub const DISPLAY_HALF_EXTENT: f32 = 0.75;

/// Counters gathered while building a mesh
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BuildStats {
    /// Cubes visited per axis
    pub cells_per_axis: usize,
    /// Total cubes visited
    pub cubes_visited: usize,
    /// Wall-clock build time
    pub elapsed: Duration,
    /// Bytes held by the triangle records
    pub triangle_bytes: usize,
    /// Bytes held by the grid axes
    pub grid_bytes: usize,
}

impl BuildStats {
    /// Estimated total memory in megabytes
    pub fn memory_mb(&self) -> f64 {
        (self.triangle_bytes + self.grid_bytes) as f64 / (1024.0 * 1024.0)
    }
}

/// Triangles of a finished build plus the inputs that produced them
///
/// Immutable once built; a rebuild produces a new mesh.
#[derive(Clone, Debug)]
pub struct FractalMesh {
    params: FractalParams,
    strategy: SamplingStrategy,
    grid_size: f32,
    triangles: TriangleBuffer,
    bounds: Option<Bounds>,
    stats: BuildStats,
}

impl FractalMesh {
    pub(crate) fn new(
        params: FractalParams,
        strategy: SamplingStrategy,
        grid_size: f32,
        triangles: TriangleBuffer,
        stats: BuildStats,
    ) -> Self {
        let bounds = triangles.bounds();
        Self {
            params,
            strategy,
            grid_size,
            triangles,
            bounds,
            stats,
        }
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// `grid_length / step_size` for the build
    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Triangle storage
    pub fn triangles(&self) -> &TriangleBuffer {
        &self.triangles
    }

    pub fn as_slice(&self) -> &[Triangle] {
        self.triangles.as_slice()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Three vertices per triangle, no sharing
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.triangle_count() * 3
    }

    /// Number of floats in the flat coordinate view
    #[inline]
    pub fn point_count(&self) -> usize {
        self.vertex_count() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounds of every vertex, `None` when the mesh is empty
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Flat `x, y, z` coordinates scaled into `[-0.75, 0.75]` per axis
    ///
    /// Each axis is normalised by the mesh's own extent; an axis with zero
    /// extent uses a denominator of 1.
    pub fn display_buffer(&self) -> Vec<f32> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        let min = bounds.min.to_array();
        let mut delta = bounds.extent().to_array();
        for d in &mut delta {
            if *d == 0.0 {
                *d = 1.0;
            }
        }

        self.triangles
            .as_flat()
            .chunks_exact(3)
            .flat_map(|v| {
                (0..3).map(move |axis| {
                    (v[axis] - min[axis]) / delta[axis] * (2.0 * DISPLAY_HALF_EXTENT)
                        - DISPLAY_HALF_EXTENT
                })
            })
            .collect()
    }
}
