//! Error types for the uploader.
//!
//! - [`IntakeError`] - a candidate file was refused at selection time
//! - [`SubmitError`] - a submission attempt failed
//!
//! Both are terminal for the current action only. The state machine turns
//! them into a [`crate::Status`] and never propagates them further.

use thiserror::Error;

// =============================================================================
// Intake Errors
// =============================================================================

/// Errors when a file is offered to the uploader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The declared MIME type is not in the `image` family.
    #[error("Please select an image file")]
    NotAnImage { mime: String },

    /// A submission is in flight; new files are refused until it settles.
    #[error("An analysis is already running")]
    Busy,
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors during a prediction round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request could not be sent or the response could not be read.
    ///
    /// Displays the underlying message unchanged.
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status. The body is ignored.
    #[error("Server error while analysing media")]
    Server { status: u16 },

    /// A success response whose body is not a prediction.
    #[error("{0}")]
    Decode(String),
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Decode(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;
