//! Error handling for the ECG Lead Trainer
//!
//! The exercise itself has no failure modes: drops are accepted or discarded
//! and validation passes or fails. The errors here cover the ambient parts
//! of the application: preferences on disk and waveform export.

use thiserror::Error;

/// Main error type for ECG Lead Trainer operations
#[derive(Error, Debug)]
pub enum TrainerError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to waveform export
    #[error("Export error: {0}")]
    Export(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<TrainerError>,
    },
}

impl TrainerError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        TrainerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for TrainerError {
    fn from(err: serde_json::Error) -> Self {
        TrainerError::Serialization(err.to_string())
    }
}

/// Result type alias for ECG Lead Trainer operations
pub type Result<T> = std::result::Result<T, TrainerError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TrainerError::from(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TrainerError::from(e).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrainerError::Config("Missing data directory".to_string());
        assert_eq!(err.to_string(), "Configuration error: Missing data directory");
    }

    #[test]
    fn test_error_with_context() {
        let err = TrainerError::Export("disk full".to_string());
        let with_ctx = err.with_context("Failed to write waveform");
        assert!(with_ctx.to_string().contains("Failed to write waveform"));
        assert!(with_ctx.to_string().contains("disk full"));
    }

    #[test]
    fn test_io_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("Saving preferences").unwrap_err();
        assert!(err.to_string().starts_with("Saving preferences"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse: std::result::Result<u32, _> = serde_json::from_str::<u32>("not json");
        let err: TrainerError = parse.unwrap_err().into();
        assert!(matches!(err, TrainerError::Serialization(_)));
    }
}
