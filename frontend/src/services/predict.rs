//! HTTP service posting the selected image to the prediction API.

use gloo_net::http::Request;
use uploader::{HttpReply, PredictRequest, PredictTransport, SubmitError, SubmitResult};
use web_sys::FormData;

use crate::types::{js_error, BrowserFile};

/// `fetch`-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl PredictTransport<BrowserFile> for FetchTransport {
    async fn send(&self, request: PredictRequest<BrowserFile>) -> SubmitResult<HttpReply> {
        let form_data = FormData::new()
            .map_err(|e| SubmitError::Transport(format!("Failed to create FormData: {}", js_error(&e))))?;

        form_data
            .append_with_blob_and_filename(request.field, request.file.inner(), &request.file.inner().name())
            .map_err(|e| SubmitError::Transport(format!("Failed to append file: {}", js_error(&e))))?;

        let response = Request::post(&request.url)
            .body(form_data)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            // Non-2xx is a server error whatever the body holds; don't read it.
            return Ok(HttpReply::new(status, String::new()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}
