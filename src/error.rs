//! Error types for dxf-features

use std::io;
use thiserror::Error;

/// Main error type for dxf-features operations.
///
/// Parsing itself is tolerant and never fails; these errors are only raised
/// at the input boundary (files, readers) and for caller misuse of the
/// configuration.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Requested output shape is not one of the supported table shapes
    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Failure serializing a feature table
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for dxf-features operations
pub type Result<T> = std::result::Result<T, DxfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnsupportedShape("arrow-table".to_string());
        assert_eq!(err.to_string(), "Unsupported shape: arrow-table");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
