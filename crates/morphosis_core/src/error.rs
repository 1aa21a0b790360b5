//! Error types for parameter validation, mesh builds and preset files

use std::fmt;
use std::io;

use morphosis_mesh::AllocError;

/// Invalid fractal parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Step size outside `(MIN_STEP_SIZE, MAX_STEP_SIZE]`
    StepSize(f32),
    /// Iteration cap of zero
    ZeroIterations,
    /// Quaternion constant or `w` offset is NaN or infinite
    NonFinite(&'static str),
    /// No built-in preset with this name
    UnknownPreset(String),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::StepSize(s) => write!(
                f,
                "Invalid step size {}: min {} (exclusive) | max {}",
                s,
                crate::params::MIN_STEP_SIZE,
                crate::params::MAX_STEP_SIZE
            ),
            ParamError::ZeroIterations => write!(f, "Iteration count must be at least 1"),
            ParamError::NonFinite(what) => write!(f, "Parameter {} must be finite", what),
            ParamError::UnknownPreset(name) => write!(f, "Unknown preset: {}", name),
        }
    }
}

impl std::error::Error for ParamError {}

/// Failure while building a fractal mesh
#[derive(Debug, Clone)]
pub enum BuildError {
    /// Parameters rejected before the build started
    Params(ParamError),
    /// Triangle storage could not grow
    TriangleStorage(AllocError),
    /// Memory for the grid could not be allocated
    Allocation {
        /// Which buffer was growing
        what: &'static str,
        /// Number of elements requested
        requested: usize,
    },
}

impl From<ParamError> for BuildError {
    fn from(e: ParamError) -> Self {
        BuildError::Params(e)
    }
}

impl From<AllocError> for BuildError {
    fn from(e: AllocError) -> Self {
        BuildError::TriangleStorage(e)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Params(e) => write!(f, "Invalid parameters: {}", e),
            BuildError::TriangleStorage(e) => write!(f, "{}", e),
            BuildError::Allocation { what, requested } => write!(
                f,
                "Could not allocate memory: {} ({} elements requested)",
                what, requested
            ),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Params(e) => Some(e),
            BuildError::TriangleStorage(e) => Some(e),
            BuildError::Allocation { .. } => None,
        }
    }
}

/// Error loading or saving a preset file
#[derive(Debug)]
pub enum PresetError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
    /// File parsed but holds invalid parameters
    Params(ParamError),
}

impl From<io::Error> for PresetError {
    fn from(e: io::Error) -> Self {
        PresetError::Io(e)
    }
}

impl From<ron::error::SpannedError> for PresetError {
    fn from(e: ron::error::SpannedError) -> Self {
        PresetError::Parse(e)
    }
}

impl From<ron::Error> for PresetError {
    fn from(e: ron::Error) -> Self {
        PresetError::Serialize(e)
    }
}

impl From<ParamError> for PresetError {
    fn from(e: ParamError) -> Self {
        PresetError::Params(e)
    }
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Io(e) => write!(f, "IO error: {}", e),
            PresetError::Parse(e) => write!(f, "Parse error: {}", e),
            PresetError::Serialize(e) => write!(f, "Serialize error: {}", e),
            PresetError::Params(e) => write!(f, "Invalid data in the file: {}", e),
        }
    }
}

impl std::error::Error for PresetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_error_display() {
        let msg = format!("{}", ParamError::StepSize(0.9));
        assert!(msg.contains("step size"));
        assert!(msg.contains("0.9"));
        assert!(format!("{}", ParamError::UnknownPreset("x".into())).contains("x"));
    }

    #[test]
    fn test_build_error_from_param() {
        let err: BuildError = ParamError::ZeroIterations.into();
        assert!(matches!(err, BuildError::Params(ParamError::ZeroIterations)));
        assert!(format!("{}", err).contains("Invalid parameters"));
    }

    #[test]
    fn test_build_error_source() {
        use std::error::Error;

        let err = BuildError::Params(ParamError::ZeroIterations);
        assert!(err.source().is_some());

        let err = BuildError::Allocation { what: "grid", requested: 7 };
        assert!(err.source().is_none());
        assert!(format!("{}", err).contains("grid"));
    }

    #[test]
    fn test_build_error_keeps_alloc_source() {
        use morphosis_mesh::TriangleBuffer;
        use std::error::Error;

        let alloc = TriangleBuffer::new().reserve(usize::MAX).unwrap_err();
        let err: BuildError = alloc.into();
        assert!(matches!(err, BuildError::TriangleStorage(ref e) if e.requested == usize::MAX));
        assert!(format!("{}", err).contains("Could not allocate memory"));

        let source = err.source().unwrap();
        assert!(source.downcast_ref::<AllocError>().is_some());
        assert!(source.source().is_some());
    }

    #[test]
    fn test_preset_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: PresetError = io_err.into();
        match err {
            PresetError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected Io variant"),
        }
    }
}
