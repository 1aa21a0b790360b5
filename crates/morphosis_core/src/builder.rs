//! Fractal mesh build
//!
//! Visits every cube of the grid with x varying fastest, then y, then z.
//! Each cube's 8 corners are sampled, polygonized, and the resulting batch
//! is appended to the triangle buffer. The parallel build splits the work
//! into z-slices and concatenates the slice buffers in z order, so both
//! paths produce the same triangles in the same order.

use std::time::Instant;

use rayon::prelude::*;

use morphosis_mesh::{polygonise_into, CubeSample, Triangle, TriangleBatch, TriangleBuffer};

use crate::error::BuildError;
use crate::grid::Grid;
use crate::mesh::{BuildStats, FractalMesh};
use crate::params::{FractalParams, JuliaParams};
use crate::sampler::SamplingStrategy;

/// How a build is carried out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Membership test used for every corner
    pub strategy: SamplingStrategy,
    /// Spread z-slices over the rayon thread pool
    pub parallel: bool,
}

/// Builds a [`FractalMesh`] from parameters
///
/// # Example
/// ```ignore
/// let mesh = FractalBuilder::new(FractalParams::default())
///     .with_strategy(SamplingStrategy::EarlyExit)
///     .parallel(true)
///     .build()?;
/// println!("{} triangles", mesh.triangle_count());
/// ```
#[derive(Clone, Debug)]
pub struct FractalBuilder {
    params: FractalParams,
    options: BuildOptions,
}

impl FractalBuilder {
    pub fn new(params: FractalParams) -> Self {
        Self {
            params,
            options: BuildOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Run the build
    ///
    /// Parameters are validated first. On an allocation failure everything
    /// built so far is dropped and the error is returned.
    pub fn build(&self) -> Result<FractalMesh, BuildError> {
        self.params.validate()?;
        if self.params.is_small_step() {
            log::warn!(
                "Step size {} is very small, the mesh will be large",
                self.params.step_size
            );
        }

        let start = Instant::now();
        let grid = Grid::new(&self.params)?;
        log::info!(
            "Building fractal: step {} ({} cells per axis), c = {:?}, w = {}, {} iterations, {} sampling",
            self.params.step_size,
            grid.cells,
            self.params.julia.c.to_array(),
            self.params.julia.w,
            self.params.julia.max_iter,
            self.options.strategy.name()
        );

        let triangles = if self.options.parallel {
            self.build_parallel(&grid)?
        } else {
            self.build_sequential(&grid)?
        };

        let stats = BuildStats {
            cells_per_axis: grid.cells,
            cubes_visited: grid.cube_count(),
            elapsed: start.elapsed(),
            triangle_bytes: triangles.len() * std::mem::size_of::<Triangle>(),
            grid_bytes: grid.memory_bytes(),
        };
        log::info!(
            "Built {} triangles from {} cubes in {:.2?} (~{:.2} MB)",
            triangles.len(),
            stats.cubes_visited,
            stats.elapsed,
            stats.memory_mb()
        );

        Ok(FractalMesh::new(
            self.params,
            self.options.strategy,
            grid.grid_size,
            triangles,
            stats,
        ))
    }

    fn build_sequential(&self, grid: &Grid) -> Result<TriangleBuffer, BuildError> {
        let mut triangles = TriangleBuffer::new();
        for z in 0..grid.cells {
            build_slice(grid, &self.params.julia, self.options.strategy, z, &mut triangles)?;
            log::debug!("{}/{}", z + 1, grid.cells);
        }
        Ok(triangles)
    }

    fn build_parallel(&self, grid: &Grid) -> Result<TriangleBuffer, BuildError> {
        let julia = self.params.julia;
        let strategy = self.options.strategy;

        let slices: Vec<TriangleBuffer> = (0..grid.cells)
            .into_par_iter()
            .map(|z| -> Result<TriangleBuffer, BuildError> {
                let mut slice = TriangleBuffer::new();
                build_slice(grid, &julia, strategy, z, &mut slice)?;
                log::debug!("slice {} done ({} triangles)", z, slice.len());
                Ok(slice)
            })
            .collect::<Result<_, _>>()?;

        let mut triangles = TriangleBuffer::new();
        for mut slice in slices {
            triangles.append(&mut slice)?;
        }
        Ok(triangles)
    }
}

/// Polygonize every cube of z-slice `z`, appending to `out`
fn build_slice(
    grid: &Grid,
    julia: &JuliaParams,
    strategy: SamplingStrategy,
    z: usize,
    out: &mut TriangleBuffer,
) -> Result<(), BuildError> {
    let mut batch = TriangleBatch::new();
    for y in 0..grid.cells {
        for x in 0..grid.cells {
            let positions = grid.cube_corners(x, y, z);
            let values = positions.map(|p| strategy.sample(julia, p));
            polygonise_into(&CubeSample::new(positions, values), &mut batch);
            out.append_batch(&mut batch)?;
        }
    }
    Ok(())
}
