//! Named parameter presets
//!
//! A handful of presets are built in; any set of parameters can also be
//! saved to and loaded from a RON file.

use serde::{Serialize, Deserialize};
use std::fs;
use std::path::Path;

use morphosis_math::Quaternion;

use crate::error::{ParamError, PresetError};
use crate::params::{FractalParams, JuliaParams};

/// Names of the built-in presets, in menu order
pub const BUILTIN_PRESETS: [&str; 4] = ["default", "zero", "complex", "quaternion"];

/// A named set of fractal parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Preset name (for display/debugging)
    pub name: String,
    /// Parameters applied when the preset is selected
    pub params: FractalParams,
}

impl Preset {
    /// Create a preset from existing parameters
    pub fn new(name: impl Into<String>, params: FractalParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Look up a built-in preset by name
    pub fn builtin(name: &str) -> Result<Self, ParamError> {
        let (c, max_iter) = match name {
            "default" => return Ok(Self::new(name, FractalParams::default())),
            "zero" => (Quaternion::ZERO, 6),
            "complex" => (Quaternion::new(-0.4, 0.6, 0.0, 0.0), 8),
            "quaternion" => (Quaternion::new(0.18, 0.0, 0.0, 0.78), 10),
            _ => return Err(ParamError::UnknownPreset(name.to_string())),
        };
        let params = FractalParams {
            julia: JuliaParams { c, w: 0.0, max_iter },
            ..FractalParams::default()
        };
        Ok(Self::new(name, params))
    }

    /// Every built-in preset
    pub fn builtins() -> impl Iterator<Item = Preset> {
        BUILTIN_PRESETS
            .iter()
            .filter_map(|name| Self::builtin(name).ok())
    }

    /// Load a preset from a RON file
    ///
    /// The parameters are validated before the preset is returned.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresetError> {
        let contents = fs::read_to_string(path)?;
        let preset: Preset = ron::from_str(&contents)?;
        preset.params.validate()?;
        Ok(preset)
    }

    /// Save this preset to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PresetError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        log::info!("Saved preset '{}'", self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets_are_valid() {
        let presets: Vec<Preset> = Preset::builtins().collect();
        assert_eq!(presets.len(), BUILTIN_PRESETS.len());
        for preset in &presets {
            assert!(preset.params.validate().is_ok(), "{}", preset.name);
        }
    }

    #[test]
    fn test_builtin_values() {
        let q = Preset::builtin("quaternion").unwrap();
        assert_eq!(q.params.julia.c, Quaternion::new(0.18, 0.0, 0.0, 0.78));
        assert_eq!(q.params.julia.max_iter, 10);
        assert_eq!(q.params.step_size, 0.05);

        let d = Preset::builtin("default").unwrap();
        assert_eq!(d.params, FractalParams::default());
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(
            Preset::builtin("mandelbulb"),
            Err(ParamError::UnknownPreset("mandelbulb".to_string()))
        );
    }

    #[test]
    fn test_preset_ron_roundtrip() {
        let preset = Preset::builtin("complex").unwrap();
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        let serialized = ron::ser::to_string_pretty(&preset, pretty).unwrap();

        assert!(serialized.contains("complex"));
        assert!(serialized.contains("max_iter"));

        let deserialized: Preset = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, preset);
    }

    #[test]
    fn test_preset_w_defaults_to_zero() {
        let ron_str = r#"(
            name: "slice",
            params: (
                step_size: 0.25,
                julia: (c: (x: 0.1, y: 0.2, z: 0.0, w: 0.0), max_iter: 4),
            ),
        )"#;
        let preset: Preset = ron::from_str(ron_str).unwrap();
        assert_eq!(preset.params.julia.w, 0.0);
        assert_eq!(preset.params.julia.max_iter, 4);
    }
}
