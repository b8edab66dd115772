//! Error types for the sheet generator.
//!
//! The rendering engine itself never fails on well-formed input: unsupported
//! characters degrade to `?` and malformed accent colors are ignored. The
//! variants below cover the outer surfaces (configuration, strict color
//! parsing, saving to disk and the CLI input format).

/// Result type alias for pdf_sheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or emitting a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Color string is not `RRGGBB` / `#RRGGBB`
    #[error("Invalid color '{0}': expected 6 hex digits with optional leading '#'")]
    InvalidColor(String),

    /// Page geometry or margins that leave no drawable area
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sheet description could not be parsed
    #[error("Invalid sheet description: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_error() {
        let err = Error::InvalidColor("not-a-color".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid color"));
        assert!(msg.contains("not-a-color"));
    }

    #[test]
    fn test_invalid_config_error() {
        let err = Error::InvalidConfig("margin 400 leaves no content width".to_string());
        assert!(format!("{}", err).contains("margin 400"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(format!("{}", err).contains("missing"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
