//! Error types for the Smart Agri application
//!
//! Form validation failures live in [`crate::auth::ValidationError`]; this
//! module covers configuration, storage and voice backend failures.

use thiserror::Error;

/// Smart Agri application errors
#[derive(Error, Debug, Clone)]
pub enum AgriError {
    /// Reading or writing the session store failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Persisted data could not be (de)serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Speech recognition backend failure
    #[error("Speech recognition error: {0}")]
    RecognitionError(String),

    /// Speech synthesis backend failure
    #[error("Speech synthesis error: {0}")]
    SynthesisError(String),

    /// Simulated backend could not accept a request
    #[error("Backend error: {0}")]
    BackendError(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    IOError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for AgriError {
    fn from(e: std::io::Error) -> Self {
        AgriError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for AgriError {
    fn from(e: serde_json::Error) -> Self {
        AgriError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for AgriError {
    fn from(e: toml::de::Error) -> Self {
        AgriError::ConfigError(e.to_string())
    }
}

impl AgriError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the app fully usable; the failed action can
    /// simply be retried.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The in-memory session still works without the file
            AgriError::StorageError(_) => true,
            AgriError::SerializationError(_) => true,
            // Voice is best-effort everywhere
            AgriError::RecognitionError(_) => true,
            AgriError::SynthesisError(_) => true,
            // Runtime gone means no more simulated replies
            AgriError::BackendError(_) => false,
            AgriError::IOError(_) => false,
            AgriError::ConfigError(_) => false,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            AgriError::StorageError(_) => {
                "Could not save your settings. They will be kept until you close the app.".to_string()
            }
            AgriError::SerializationError(_) => {
                "Saved data was unreadable and has been ignored.".to_string()
            }
            AgriError::RecognitionError(_) => {
                "Voice input failed. Please try again.".to_string()
            }
            AgriError::SynthesisError(_) => {
                "Speech output failed. Please read the text on screen.".to_string()
            }
            AgriError::BackendError(_) => {
                "Service unavailable. Please restart the application.".to_string()
            }
            AgriError::IOError(_) => "File system error occurred.".to_string(),
            AgriError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

/// Result type alias for Smart Agri operations
pub type Result<T> = std::result::Result<T, AgriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AgriError = io.into();
        assert!(matches!(err, AgriError::IOError(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: AgriError = json_err.into();
        assert!(matches!(err, AgriError::SerializationError(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_voice_errors_are_recoverable() {
        assert!(AgriError::RecognitionError("no-speech".into()).is_recoverable());
        assert!(AgriError::SynthesisError("busy".into()).is_recoverable());
        assert_eq!(
            AgriError::RecognitionError("x".into()).user_message(),
            "Voice input failed. Please try again."
        );
    }
}
