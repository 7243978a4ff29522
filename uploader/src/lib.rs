//! # Uploader - image intake, preview and prediction status
//!
//! The state machine behind the deepfake detector's upload widget. It knows
//! nothing about the DOM: the browser frontend and native hosts plug in their
//! own file type and HTTP transport.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Intake    │────▶│   Preview   │     │  Controller │────▶│   Status    │
//! │ (MIME check)│     │ (data URL)  │     │ (multipart) │     │ (banner)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        └──────────────── Uploader<F> state ─────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::{cell::RefCell, rc::Rc};
//! use uploader::{submit, LocalFile, ReqwestTransport, Uploader};
//!
//! let cell = Rc::new(RefCell::new(Uploader::default()));
//! cell.borrow_mut().accept(LocalFile::new("face.png", "image/png", bytes))?;
//! submit(&cell, &ReqwestTransport::default()).await;
//! println!("{:?}", cell.borrow().status());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Intake and submission errors
//! - [`config`] - Endpoint and wire constants
//! - [`model`] - Model version choice
//! - [`media`] - File abstraction and MIME checks
//! - [`preview`] - Data URL encoding and preview tickets
//! - [`prediction`] - Response types and interpretation
//! - [`status`] - User-facing status
//! - [`state`] - The [`Uploader`] state machine
//! - [`controller`] - Async submission driver
//! - `client` - `reqwest` transport (feature `native-client`)

pub mod error;
pub mod config;
pub mod model;
pub mod media;
pub mod preview;
pub mod prediction;
pub mod status;
pub mod state;
pub mod controller;

#[cfg(feature = "native-client")]
pub mod client;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{IntakeError, IntakeResult, SubmitError, SubmitResult};
pub use config::{Endpoint, DEFAULT_API_BASE, PREDICT_PATH, UPLOAD_FIELD};
pub use model::{ModelVersion, UnknownModel};
pub use media::{format_size, is_image, top_level_type, LocalFile, MediaFile};
pub use preview::{encode_data_url, PreviewTicket};
pub use prediction::{interpret, HttpReply, Prediction};
pub use status::{Status, StatusKind, FALLBACK_ERROR_MESSAGE, LOADING_MESSAGE};
pub use state::{DragPhase, PredictRequest, Uploader};
pub use controller::{submit, PredictTransport, UploaderCell};

#[cfg(feature = "native-client")]
pub use client::ReqwestTransport;
