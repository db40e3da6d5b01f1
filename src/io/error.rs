//! Error types for sampling, validation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sampler operations
#[derive(Debug)]
pub enum SamplerError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Parameter name as shown to the user
        parameter: &'static str,
        /// Rejected value, formatted for display
        value: String,
        /// Accepted range or rule the value broke
        reason: String,
    },

    /// Height array does not describe a tiling
    InvalidState {
        /// First invariant found to be violated
        reason: String,
    },

    /// Coupling did not occur within the configured step budget
    ///
    /// Not a correctness failure; the caller may retry with fresh randomness
    /// or a larger budget.
    StepBudgetExceeded {
        /// Maximum number of updates allowed
        budget: u64,
        /// Round during which the budget ran out
        rounds: usize,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Destination of the image
        path: PathBuf,
        /// Encoder or writer failure
        source: image::ImageError,
    },

    /// Directory creation or another file system call failed
    FileSystem {
        /// Path the call was made on
        path: PathBuf,
        /// Short name of the failed call
        operation: &'static str,
        /// Error reported by the operating system
        source: std::io::Error,
    },
}

impl SamplerError {
    /// Whether retrying the same request may succeed
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::StepBudgetExceeded { .. })
    }
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidState { reason } => {
                write!(f, "Invalid path system: {reason}")
            }
            Self::StepBudgetExceeded { budget, rounds } => {
                write!(
                    f,
                    "No coalescence within {budget} steps (gave up in round {rounds})"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SamplerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sampler results
pub type Result<T> = std::result::Result<T, SamplerError>;

impl From<std::io::Error> for SamplerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Shorthand for `SamplerError::InvalidParameter`
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SamplerError {
    SamplerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
