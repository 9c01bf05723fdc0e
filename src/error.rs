//! Error handling for Umber
//!
//! Every failure carries a stable error code and a recovery hint.

use thiserror::Error;

/// Result type alias for Umber operations
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Main error type for Umber operations
#[derive(Error, Debug)]
pub enum NoiseError {
    // Validation errors
    #[error("Invalid argument: {param} = {value} (expected {expected})")]
    InvalidArgument {
        param: String,
        value: String,
        expected: String,
    },

    #[error("Degenerate signal at {stage}: peak amplitude is zero or not finite")]
    DegenerateSignal { stage: String },

    // Output errors
    #[error("Unsupported output format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Encoder failed while writing {path}")]
    Encoder {
        path: String,
        #[source]
        source: hound::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NoiseError {
    /// Shorthand for building an `InvalidArgument` error
    pub fn invalid(param: &str, value: impl ToString, expected: &str) -> Self {
        NoiseError::InvalidArgument {
            param: param.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Shorthand for building a `DegenerateSignal` error
    pub fn degenerate(stage: &str) -> Self {
        NoiseError::DegenerateSignal {
            stage: stage.to_string(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            NoiseError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            NoiseError::DegenerateSignal { .. } => "DEGENERATE_SIGNAL",
            NoiseError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            NoiseError::Encoder { .. } => "ENCODER_ERROR",
            NoiseError::Io(_) => "IO_ERROR",
            NoiseError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            NoiseError::InvalidArgument { .. } => {
                "Use a positive duration and sample rate, and a cutoff below half the sample rate"
            }
            NoiseError::DegenerateSignal { .. } => {
                "The signal was empty, silent, or non-finite; increase the duration or check the input samples"
            }
            NoiseError::UnsupportedFormat { .. } => "Write to a .wav output path",
            NoiseError::Encoder { .. } => "Check that the output location is writable",
            NoiseError::Io(_) => "Check the file path and permissions",
            NoiseError::Serialization(_) => "Check the configuration file is valid JSON",
        }
    }
}
