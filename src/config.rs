//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`MORPHOSIS_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use morphosis_core::{BuildOptions, FractalParams, JuliaParams, ParamError, Quaternion, SamplingStrategy};
use morphosis_export::{DEFAULT_JSON_PATH, DEFAULT_OBJ_PATH, DEFAULT_PRECISION};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fractal parameters used when no preset or arguments are given
    #[serde(default)]
    pub fractal: FractalConfig,
    /// Build configuration
    #[serde(default)]
    pub build: BuildConfig,
    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`MORPHOSIS_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional, not checked in
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // MORPHOSIS_FRACTAL__MAX_ITER=10 -> fractal.max_iter = 10
        figment = figment.merge(Env::prefixed("MORPHOSIS_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Fractal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    /// Distance between lattice samples, in (0.00001, 0.5]
    pub step_size: f32,
    /// Quaternion constant [x, y, z, w]
    pub c: [f32; 4],
    /// Fourth coordinate of every sampled point
    pub w: f32,
    /// Iteration cap
    pub max_iter: u32,
    /// Membership test: "standard" or "early-exit"
    pub strategy: SamplingStrategy,
}

impl Default for FractalConfig {
    fn default() -> Self {
        let params = FractalParams::default();
        Self {
            step_size: params.step_size,
            c: params.julia.c.to_array(),
            w: params.julia.w,
            max_iter: params.julia.max_iter,
            strategy: SamplingStrategy::default(),
        }
    }
}

impl FractalConfig {
    /// Validated build parameters
    pub fn to_params(&self) -> Result<FractalParams, ParamError> {
        let params = FractalParams {
            step_size: self.step_size,
            julia: JuliaParams {
                c: Quaternion::from_array(self.c),
                w: self.w,
                max_iter: self.max_iter,
            },
        };
        params.validate()?;
        Ok(params)
    }
}

/// Build configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build z-slices in parallel
    pub parallel: bool,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Write an OBJ file after every build
    pub write_obj: bool,
    /// OBJ output path
    pub obj_path: String,
    /// Write a JSON file after every build
    pub write_json: bool,
    /// JSON output path
    pub json_path: String,
    /// Decimal places per OBJ coordinate
    pub precision: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            write_obj: true,
            obj_path: DEFAULT_OBJ_PATH.to_string(),
            write_json: false,
            json_path: DEFAULT_JSON_PATH.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build options from the fractal and build sections
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            strategy: self.fractal.strategy,
            parallel: self.build.parallel,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.fractal.step_size, 0.05);
        assert_eq!(config.fractal.c, [-0.2, 0.8, 0.0, 0.0]);
        assert_eq!(config.fractal.max_iter, 6);
        assert!(!config.build.parallel);
        assert_eq!(config.export.obj_path, "./fractal.obj");
        assert_eq!(config.export.precision, 3);
    }

    #[test]
    fn test_default_fractal_matches_params() {
        let params = AppConfig::default().fractal.to_params().unwrap();
        assert_eq!(params, FractalParams::default());
    }

    #[test]
    fn test_invalid_fractal_section() {
        let fractal = FractalConfig {
            step_size: 0.9,
            ..FractalConfig::default()
        };
        assert_eq!(fractal.to_params(), Err(ParamError::StepSize(0.9)));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("step_size"));
        assert!(toml.contains("strategy = \"standard\""));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_partial_section() {
        let config: AppConfig = toml::from_str("[fractal]\nmax_iter = 12\n").unwrap();
        assert_eq!(config.fractal.max_iter, 12);
        assert_eq!(config.fractal.step_size, 0.05);
        assert_eq!(config.build_options(), BuildOptions::default());
    }
}
