//! Submission controller.
//!
//! [`submit`] drives one prediction round trip against an [`UploaderCell`].
//! State is only touched inside short synchronous closures, never across the
//! network await, so the same code runs on a single-threaded UI loop and in
//! tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SubmitResult;
use crate::media::MediaFile;
use crate::prediction::{interpret, HttpReply};
use crate::state::{PredictRequest, Uploader};

/// Sends a prepared prediction request.
///
/// Implementations return the raw status and body; interpreting them is the
/// controller's job. Failing to send or to read the body is a
/// [`crate::SubmitError::Transport`].
#[allow(async_fn_in_trait)]
pub trait PredictTransport<F: MediaFile> {
    async fn send(&self, request: PredictRequest<F>) -> SubmitResult<HttpReply>;
}

/// Scoped mutable access to an [`Uploader`] shared with event handlers.
pub trait UploaderCell<F: MediaFile> {
    /// Run `f` against the uploader. `None` if the owner is gone.
    fn update<R>(&self, f: impl FnOnce(&mut Uploader<F>) -> R) -> Option<R>;
}

impl<F: MediaFile> UploaderCell<F> for Rc<RefCell<Uploader<F>>> {
    fn update<R>(&self, f: impl FnOnce(&mut Uploader<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Submit the currently selected file.
///
/// Does nothing when no file is selected or a request is already running.
/// Otherwise the uploader is marked uploading for exactly the duration of the
/// transport call and the outcome is written back as a status.
pub async fn submit<F, C, T>(cell: &C, transport: &T)
where
    F: MediaFile,
    C: UploaderCell<F>,
    T: PredictTransport<F>,
{
    let Some(Some(request)) = cell.update(|u| u.begin_submission()) else {
        return;
    };

    let outcome = transport.send(request).await.and_then(interpret);

    if cell.update(|u| u.finish_submission(outcome)).is_none() {
        log::debug!("Uploader dropped before the prediction settled");
    }
}
