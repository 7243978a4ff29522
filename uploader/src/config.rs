//! Endpoint configuration.
//!
//! The prediction service lives at a fixed host. [`Endpoint`] is still a value
//! rather than a bare constant so that tests can point the controller at a
//! local server.

use crate::model::ModelVersion;

/// Base URL of the hosted prediction API.
pub const DEFAULT_API_BASE: &str = "https://deepfake-detector-api-l4ru.onrender.com";

/// Path of the prediction route.
pub const PREDICT_PATH: &str = "/api/predict";

/// Multipart field name carrying the image.
pub const UPLOAD_FIELD: &str = "file";

/// Query parameter carrying the model version.
pub const MODEL_QUERY_PARAM: &str = "model";

/// Where prediction requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// Endpoint rooted at `base_url` (scheme + host, optional port).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full prediction URL for the given model.
    pub fn predict_url(&self, model: ModelVersion) -> String {
        format!(
            "{}{}?{}={}",
            self.base_url,
            PREDICT_PATH,
            MODEL_QUERY_PARAM,
            model.as_str()
        )
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
