//! Build-and-export pipeline driven by the binary

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use morphosis_core::{
    BuildError, FractalMesh, FractalSession, ParamError, Preset, PresetError,
};
use morphosis_export::{export_json, export_obj, ExportError};

use crate::cli::Args;
use crate::config::{AppConfig, ConfigError};

/// Anything that stops a run
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Params(ParamError),
    Preset(PresetError),
    Build(BuildError),
    Export(ExportError),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<ParamError> for AppError {
    fn from(e: ParamError) -> Self {
        AppError::Params(e)
    }
}

impl From<PresetError> for AppError {
    fn from(e: PresetError) -> Self {
        AppError::Preset(e)
    }
}

impl From<BuildError> for AppError {
    fn from(e: BuildError) -> Self {
        AppError::Build(e)
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Export(e)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Params(e) => write!(f, "{}", e),
            AppError::Preset(e) => write!(f, "Preset error: {}", e),
            AppError::Build(e) => write!(f, "Build failed: {}", e),
            AppError::Export(e) => write!(f, "Export failed: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Params(_) => 2,
            _ => 1,
        }
    }
}

/// Output files resolved from the arguments and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTargets {
    pub obj: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub precision: usize,
}

impl ExportTargets {
    pub fn resolve(args: &Args, config: &AppConfig) -> Self {
        let obj = if args.no_obj {
            None
        } else {
            args.obj
                .clone()
                .or_else(|| config.export.write_obj.then(|| PathBuf::from(&config.export.obj_path)))
        };
        let json = args
            .json
            .clone()
            .or_else(|| config.export.write_json.then(|| PathBuf::from(&config.export.json_path)));
        Self {
            obj,
            json,
            precision: config.export.precision,
        }
    }

    /// Write every requested file
    pub fn write(&self, mesh: &FractalMesh) -> Result<(), ExportError> {
        if let Some(path) = &self.obj {
            export_obj(mesh, path, self.precision)?;
        }
        if let Some(path) = &self.json {
            export_json(mesh, path)?;
        }
        Ok(())
    }
}

/// Resolve parameters, build the mesh and write the requested outputs
pub fn run(args: &Args, config: &AppConfig) -> Result<Arc<FractalMesh>, AppError> {
    let params = args.resolve_params(config)?;

    if let Some(path) = &args.save_preset {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "preset".to_string());
        Preset::new(name, params).save(path)?;
    }

    let mut session = FractalSession::new(params, args.build_options(config));
    let mesh = session.rebuild()?;

    let stats = mesh.stats();
    log::info!(
        "{} triangles, {} vertices, {} cells per axis, {:.2?}",
        mesh.triangle_count(),
        mesh.vertex_count(),
        stats.cells_per_axis,
        stats.elapsed
    );
    if let Some(bounds) = mesh.bounds() {
        log::debug!("Mesh bounds: {:?} .. {:?}", bounds.min, bounds.max);
    }

    ExportTargets::resolve(args, config).write(&mesh)?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("morphosis").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_export_targets() {
        let config = AppConfig::default();

        let targets = ExportTargets::resolve(&parse(&[]), &config);
        assert_eq!(targets.obj, Some(PathBuf::from("./fractal.obj")));
        assert_eq!(targets.json, None);

        let targets = ExportTargets::resolve(&parse(&["--no-obj", "--json", "out.json"]), &config);
        assert_eq!(targets.obj, None);
        assert_eq!(targets.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::Params(ParamError::ZeroIterations).exit_code(), 2);
        let err = AppError::Build(BuildError::Allocation { what: "grid axis", requested: 1 });
        assert_eq!(err.exit_code(), 1);
        assert!(format!("{}", err).contains("grid axis"));
    }

    #[test]
    fn test_run_without_exports() {
        let args = parse(&["0.5", "-0.2", "0.8", "0", "0", "-i", "1", "--no-obj"]);
        let mesh = run(&args, &AppConfig::default()).unwrap();
        assert_eq!(mesh.triangle_count(), 250);
    }
}
