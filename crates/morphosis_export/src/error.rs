//! Export error type

use std::fmt;
use std::io;

/// Error writing an exported mesh
#[derive(Debug)]
pub enum ExportError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// Vertex count does not fit a `u32` index
    TooManyVertices(usize),
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json(e)
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Json(e) => write!(f, "JSON error: {}", e),
            ExportError::TooManyVertices(n) => {
                write!(f, "{} vertices exceed the 32-bit index range", n)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Json(e) => Some(e),
            ExportError::TooManyVertices(_) => None,
        }
    }
}
