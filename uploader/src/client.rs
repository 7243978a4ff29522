//! Native HTTP transport built on `reqwest`.

use reqwest::multipart::{Form, Part};

use crate::controller::PredictTransport;
use crate::error::{SubmitError, SubmitResult};
use crate::media::{LocalFile, MediaFile};
use crate::prediction::HttpReply;
use crate::state::PredictRequest;

/// Posts [`LocalFile`]s to the prediction endpoint.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_form(request: &PredictRequest<LocalFile>) -> SubmitResult<Form> {
        let file = &request.file;
        let mut part = Part::bytes(file.bytes().to_vec()).file_name(file.name());
        let mime = file.mime_type();
        if !mime.is_empty() {
            part = part
                .mime_str(&mime)
                .map_err(|e| SubmitError::Transport(format!("Invalid content type: {}", e)))?;
        }
        Ok(Form::new().part(request.field, part))
    }
}

impl PredictTransport<LocalFile> for ReqwestTransport {
    async fn send(&self, request: PredictRequest<LocalFile>) -> SubmitResult<HttpReply> {
        let form = Self::build_form(&request)?;

        let response = self
            .client
            .post(&request.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
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
