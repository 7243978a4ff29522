//! User-facing status and its presentation category.

use crate::error::SubmitResult;
use crate::prediction::Prediction;

/// Shown while a prediction request is outstanding.
pub const LOADING_MESSAGE: &str = "Analysing…";

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unexpected error";

/// Current status of the uploader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    /// Nothing to show.
    #[default]
    Idle,
    /// A request is in flight.
    Loading(String),
    /// The image looks authentic.
    Success(String),
    /// Validation failure, request failure, or a detected deepfake.
    Error(String),
}

impl Status {
    /// Status for a finished prediction round trip.
    ///
    /// A detected deepfake is reported in the error category on purpose.
    pub fn from_outcome(outcome: &SubmitResult<Prediction>) -> Self {
        match outcome {
            Ok(prediction) if prediction.is_deepfake => Status::Error(format!(
                "⚠️ Deepfake detected – {} %",
                prediction.confidence_percent()
            )),
            Ok(prediction) => Status::Success(format!(
                "✅ Looks real – {} % confidence",
                prediction.confidence_percent()
            )),
            Err(err) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    Status::Error(FALLBACK_ERROR_MESSAGE.to_string())
                } else {
                    Status::Error(message)
                }
            }
        }
    }

    pub fn loading() -> Self {
        Status::Loading(LOADING_MESSAGE.to_string())
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Status::Idle)
    }

    /// Presentation category, `None` when idle.
    pub fn kind(&self) -> Option<StatusKind> {
        match self {
            Status::Idle => None,
            Status::Loading(_) => Some(StatusKind::Info),
            Status::Success(_) => Some(StatusKind::Success),
            Status::Error(_) => Some(StatusKind::Error),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Idle => None,
            Status::Loading(m) | Status::Success(m) | Status::Error(m) => Some(m),
        }
    }
}

/// Visual category of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Informational, shown with a spinner
    Info,
    /// Success, shown with a check mark
    Success,
    /// Error, shown with a warning sign
    Error,
}

impl StatusKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Info => "status-info",
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
        }
    }

    /// Get icon for display.
    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Info => "⏳",
            StatusKind::Success => "✔",
            StatusKind::Error => "⚠",
        }
    }
}
