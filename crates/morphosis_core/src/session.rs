//! Current parameters and the published mesh
//!
//! Every parameter change routes through [`FractalSession::rebuild`], which
//! drops the previous mesh before the new traversal starts. Meshes are
//! handed out as `Arc`s and never mutated after publication.

use std::sync::Arc;

use morphosis_math::Quaternion;

use crate::builder::{BuildOptions, FractalBuilder};
use crate::error::BuildError;
use crate::mesh::FractalMesh;
use crate::params::FractalParams;
use crate::preset::Preset;

pub struct FractalSession {
    params: FractalParams,
    options: BuildOptions,
    mesh: Option<Arc<FractalMesh>>,
}

impl Default for FractalSession {
    fn default() -> Self {
        Self::new(FractalParams::default(), BuildOptions::default())
    }
}

impl FractalSession {
    /// Create a session; nothing is built until [`rebuild`](Self::rebuild)
    pub fn new(params: FractalParams, options: BuildOptions) -> Self {
        Self {
            params,
            options,
            mesh: None,
        }
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    pub fn set_options(&mut self, options: BuildOptions) {
        self.options = options;
    }

    /// The most recently published mesh
    pub fn mesh(&self) -> Option<Arc<FractalMesh>> {
        self.mesh.clone()
    }

    /// Build a mesh from the current parameters and publish it
    ///
    /// The previous mesh is released first. If the build fails the session
    /// is left without a mesh.
    pub fn rebuild(&mut self) -> Result<Arc<FractalMesh>, BuildError> {
        self.mesh = None;
        let mesh = Arc::new(
            FractalBuilder::new(self.params)
                .with_options(self.options)
                .build()?,
        );
        self.mesh = Some(Arc::clone(&mesh));
        Ok(mesh)
    }

    /// Replace the parameters and rebuild
    ///
    /// Invalid parameters are rejected before anything changes.
    pub fn rebuild_with(&mut self, params: FractalParams) -> Result<Arc<FractalMesh>, BuildError> {
        params.validate()?;
        self.params = params;
        self.rebuild()
    }

    /// Change the iteration cap and rebuild
    pub fn set_max_iter(&mut self, max_iter: u32) -> Result<Arc<FractalMesh>, BuildError> {
        let mut params = self.params;
        params.julia.max_iter = max_iter;
        self.rebuild_with(params)
    }

    /// Change the quaternion constant and rebuild
    pub fn set_constant(&mut self, c: Quaternion) -> Result<Arc<FractalMesh>, BuildError> {
        let mut params = self.params;
        params.julia.c = c;
        self.rebuild_with(params)
    }

    /// Change the step size and rebuild
    pub fn set_step_size(&mut self, step_size: f32) -> Result<Arc<FractalMesh>, BuildError> {
        let mut params = self.params;
        params.step_size = step_size;
        self.rebuild_with(params)
    }

    /// Switch to a built-in preset and rebuild
    pub fn apply_preset(&mut self, name: &str) -> Result<Arc<FractalMesh>, BuildError> {
        let preset = Preset::builtin(name)?;
        log::info!("Applying preset '{}'", preset.name);
        self.rebuild_with(preset.params)
    }
}
