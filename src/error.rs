//! Unified error types for the interface server.

use thiserror::Error;

/// Unified error type for the interface server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bootstrap pipeline error.
    #[error("bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    /// IO error (bind failures, file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bootstrap pipeline errors.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// A fatal pipeline step failed; nothing further runs.
    #[error("step {step} failed: {reason}")]
    StepFailed {
        /// Name of the step that failed.
        step: &'static str,
        /// Reason for failure.
        reason: String,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_failed_display_names_the_step() {
        let err = BootstrapError::StepFailed {
            step: "sync-dependencies",
            reason: "exit status 1".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "step sync-dependencies failed: exit status 1"
        );
    }

    #[test]
    fn bootstrap_errors_convert_to_server_errors() {
        let err = ServerError::from(BootstrapError::StepFailed {
            step: "install-frontend-deps",
            reason: "npm exited with exit status 1".to_string(),
        });

        assert!(matches!(err, ServerError::Bootstrap(_)));
    }
}
