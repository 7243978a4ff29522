//! The uploader state machine.
//!
//! One [`Uploader`] value is owned by the component instance. Event handlers
//! call its methods in short synchronous steps; anything asynchronous (preview
//! decode, prediction request) is started from a value the method returns and
//! reports back through another method call.
//!
//! ```text
//!  accept ──▶ preview_ready
//!     │
//!     └────▶ begin_submission ──▶ (transport) ──▶ finish_submission
//! ```

use crate::config::{Endpoint, UPLOAD_FIELD};
use crate::error::{IntakeError, IntakeResult, SubmitResult};
use crate::media::{is_image, MediaFile};
use crate::model::ModelVersion;
use crate::prediction::Prediction;
use crate::preview::PreviewTicket;
use crate::status::Status;

/// Drag-and-drop event kinds seen by the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    /// Parse a DOM event type (`"dragenter"`, `"dragover"`, ...).
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragPhase::Enter),
            "dragover" => Some(DragPhase::Over),
            "dragleave" => Some(DragPhase::Leave),
            "drop" => Some(DragPhase::Drop),
            _ => None,
        }
    }

    /// Whether the drop target should be highlighted after this event.
    pub fn is_active(&self) -> bool {
        matches!(self, DragPhase::Enter | DragPhase::Over)
    }
}

/// Everything a transport needs to send one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictRequest<F> {
    /// Full URL including the `model` query parameter.
    pub url: String,
    /// Multipart field name for the file.
    pub field: &'static str,
    /// The file to upload.
    pub file: F,
    /// Model the request was made with.
    pub model: ModelVersion,
}

/// Upload, preview and status state for one widget.
#[derive(Debug, Clone)]
pub struct Uploader<F> {
    endpoint: Endpoint,
    file: Option<F>,
    preview: Option<String>,
    generation: u64,
    model: ModelVersion,
    status: Status,
    uploading: bool,
    drag_active: bool,
}

impl<F: MediaFile> Default for Uploader<F> {
    fn default() -> Self {
        Self::new(Endpoint::default())
    }
}

impl<F: MediaFile> Uploader<F> {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            file: None,
            preview: None,
            generation: 0,
            model: ModelVersion::default(),
            status: Status::Idle,
            uploading: false,
            drag_active: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn model(&self) -> ModelVersion {
        self.model
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    // =========================================================================
    // File intake
    // =========================================================================

    /// Offer a picked or dropped file.
    ///
    /// A non-image leaves the selected file and preview untouched and only
    /// sets the error status. An image replaces the selection, clears the
    /// status and the stale preview, and returns the ticket the preview
    /// decode must present on completion.
    pub fn accept(&mut self, candidate: F) -> IntakeResult<PreviewTicket> {
        if self.uploading {
            log::debug!("Ignoring {} while an analysis is running", candidate.name());
            return Err(IntakeError::Busy);
        }

        let mime = candidate.mime_type();
        if !is_image(&mime) {
            let err = IntakeError::NotAnImage { mime };
            log::warn!("Rejected {}: {:?}", candidate.name(), err);
            self.status = Status::Error(err.to_string());
            return Err(err);
        }

        log::info!("🖼️ Selected {} ({} bytes)", candidate.name(), candidate.size());
        self.generation += 1;
        self.file = Some(candidate);
        self.preview = None;
        self.status = Status::Idle;
        Ok(PreviewTicket {
            generation: self.generation,
        })
    }

    /// Store a finished preview. Returns `false` when the ticket is stale.
    pub fn preview_ready(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale preview (generation {} != {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// Update the drop-zone highlight.
    pub fn drag(&mut self, phase: DragPhase) {
        self.drag_active = phase.is_active();
    }

    pub fn set_model(&mut self, model: ModelVersion) {
        self.model = model;
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Start a submission.
    ///
    /// Returns `None`, changing nothing, when no file is selected or a
    /// request is already in flight.
    pub fn begin_submission(&mut self) -> Option<PredictRequest<F>> {
        if self.uploading {
            return None;
        }
        let file = self.file.clone()?;

        self.uploading = true;
        self.status = Status::loading();
        log::info!("📤 Submitting {} with model {}", file.name(), self.model);

        Some(PredictRequest {
            url: self.endpoint.predict_url(self.model),
            field: UPLOAD_FIELD,
            file,
            model: self.model,
        })
    }

    /// Record the outcome of the request started by [`Self::begin_submission`].
    pub fn finish_submission(&mut self, outcome: SubmitResult<Prediction>) {
        match &outcome {
            Ok(prediction) => log::info!(
                "✅ Prediction: deepfake={} confidence={}",
                prediction.is_deepfake,
                prediction.confidence
            ),
            Err(err) => log::error!("❌ Prediction failed: {:?}", err),
        }
        self.status = Status::from_outcome(&outcome);
        self.uploading = false;
    }
}
