//! Command-line arguments
//!
//! Parameters come from exactly one source: positional `STEP QX QY QZ QW`,
//! `--default`, `--preset NAME`, `--preset-file PATH`, or (with none of
//! those) the `[fractal]` section of the configuration.

use std::path::PathBuf;

use clap::Parser;

use morphosis_core::{BuildOptions, FractalParams, JuliaParams, Preset, Quaternion, SamplingStrategy, BUILTIN_PRESETS};

use crate::app::AppError;
use crate::config::AppConfig;

/// Quaternion Julia set mesher
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Step size and quaternion constant
    #[clap(
        num_args = 5,
        value_names = ["STEP", "QX", "QY", "QZ", "QW"],
        allow_negative_numbers = true,
        conflicts_with_all = ["default", "preset", "preset_file"]
    )]
    pub values: Option<Vec<f32>>,

    /// Use the default parameters
    #[clap(short, long, conflicts_with_all = ["preset", "preset_file"])]
    pub default: bool,

    /// Use a built-in preset (default, zero, complex, quaternion)
    #[clap(short, long, conflicts_with = "preset_file")]
    pub preset: Option<String>,

    /// Load parameters from a RON preset file
    #[clap(long)]
    pub preset_file: Option<PathBuf>,

    /// Iteration cap, overriding the chosen source
    #[clap(short, long)]
    pub iterations: Option<u32>,

    /// Membership test (standard, early-exit)
    #[clap(short, long)]
    pub strategy: Option<SamplingStrategy>,

    /// Build z-slices in parallel
    #[clap(long)]
    pub parallel: bool,

    /// Name of a `.obj` file to write
    #[clap(long)]
    pub obj: Option<PathBuf>,

    /// Skip the OBJ file
    #[clap(long, conflicts_with = "obj")]
    pub no_obj: bool,

    /// Name of a `.json` file to write
    #[clap(long)]
    pub json: Option<PathBuf>,

    /// Save the resolved parameters as a RON preset
    #[clap(long)]
    pub save_preset: Option<PathBuf>,

    /// Configuration directory
    #[clap(long, default_value = "config")]
    pub config: PathBuf,
}

impl Args {
    /// Resolve the build parameters from the arguments, falling back to `config`
    pub fn resolve_params(&self, config: &AppConfig) -> Result<FractalParams, AppError> {
        // clap guarantees five positional values when any are given
        let mut params = if let Some(&[step, x, y, z, w]) = self.values.as_deref() {
            FractalParams {
                step_size: step,
                julia: JuliaParams {
                    c: Quaternion::new(x, y, z, w),
                    w: config.fractal.w,
                    max_iter: config.fractal.max_iter,
                },
            }
        } else if self.default {
            Preset::builtin("default")?.params
        } else if let Some(name) = &self.preset {
            Preset::builtin(name).map_err(|e| {
                log::error!("Available presets: {}", BUILTIN_PRESETS.join(", "));
                e
            })?.params
        } else if let Some(path) = &self.preset_file {
            let preset = Preset::load(path)?;
            log::info!("Loaded preset '{}' from {}", preset.name, path.display());
            preset.params
        } else {
            config.fractal.to_params()?
        };

        if let Some(max_iter) = self.iterations {
            params.julia.max_iter = max_iter;
        }
        params.validate()?;
        Ok(params)
    }

    /// Build options from `config` with the command-line overrides applied
    pub fn build_options(&self, config: &AppConfig) -> BuildOptions {
        let mut options = config.build_options();
        if let Some(strategy) = self.strategy {
            options.strategy = strategy;
        }
        options.parallel |= self.parallel;
        options
    }
}
