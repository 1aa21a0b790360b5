//! Mesh storage errors

use std::collections::TryReserveError;
use std::fmt;

/// Failure to grow triangle storage
#[derive(Debug, Clone)]
pub struct AllocError {
    /// Number of additional triangles that were requested
    pub requested: usize,
    /// Number of triangles already stored when the request failed
    pub existing: usize,
    source: TryReserveError,
}

impl AllocError {
    pub(crate) fn new(requested: usize, existing: usize, source: TryReserveError) -> Self {
        Self { requested, existing, source }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not allocate memory for {} more triangles (holding {})",
            self.requested, self.existing
        )
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_source() {
        use std::error::Error;

        let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = AllocError::new(usize::MAX, 3, source);
        let msg = format!("{}", err);
        assert!(msg.contains("allocate"));
        assert!(msg.contains("holding 3"));
        assert!(err.source().is_some());
    }
}
