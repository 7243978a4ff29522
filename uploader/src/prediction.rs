//! Prediction API types and response interpretation.

use serde::{Deserialize, Serialize};

use crate::error::{SubmitError, SubmitResult};

/// Body of a successful `/api/predict` response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Whether the classifier considers the image manipulated.
    pub is_deepfake: bool,
    /// Classifier confidence as a fraction in `[0, 1]`.
    pub confidence: f64,
}

impl Prediction {
    /// Confidence as a percentage with one decimal, e.g. `"93.2"`.
    ///
    /// Exact ties round away from zero (`0.25` becomes `"0.3"`), not to even.
    pub fn confidence_percent(&self) -> String {
        let tenths = (self.confidence * 1000.0).round();
        format!("{:.1}", tenths / 10.0)
    }
}

/// Raw HTTP outcome handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Map a raw reply to a prediction.
///
/// Any non-2xx status is a [`SubmitError::Server`] regardless of the body.
pub fn interpret(reply: HttpReply) -> SubmitResult<Prediction> {
    if !reply.is_success() {
        log::warn!("Prediction endpoint answered {}", reply.status);
        return Err(SubmitError::Server {
            status: reply.status,
        });
    }
    Ok(serde_json::from_str(&reply.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_success_body() {
        let reply = HttpReply::new(200, r#"{"is_deepfake": true, "confidence": 0.932}"#);
        let prediction = interpret(reply).unwrap();
        assert!(prediction.is_deepfake);
        assert_eq!(prediction.confidence_percent(), "93.2");
    }

    #[test]
    fn test_confidence_percent_ties_round_up() {
        let percent = |confidence| Prediction { is_deepfake: false, confidence }.confidence_percent();
        assert_eq!(percent(0.0025), "0.3");
        assert_eq!(percent(0.0125), "1.3");
        assert_eq!(percent(0.932), "93.2");
        assert_eq!(percent(0.5), "50.0");
        assert_eq!(percent(1.0), "100.0");
        assert_eq!(percent(0.0), "0.0");
    }

    #[test]
    fn test_interpret_ignores_extra_fields() {
        let reply = HttpReply::new(
            201,
            r#"{"is_deepfake": false, "confidence": 0.5, "model": "v2"}"#,
        );
        let prediction = interpret(reply).unwrap();
        assert!(!prediction.is_deepfake);
        assert_eq!(prediction.confidence_percent(), "50.0");
    }

    #[test]
    fn test_interpret_server_error_ignores_body() {
        let reply = HttpReply::new(500, r#"{"is_deepfake": false, "confidence": 1.0}"#);
        assert_eq!(interpret(reply), Err(SubmitError::Server { status: 500 }));
    }

    #[test]
    fn test_interpret_redirect_is_server_error() {
        let reply = HttpReply::new(302, "");
        assert!(matches!(interpret(reply), Err(SubmitError::Server { .. })));
    }

    #[test]
    fn test_interpret_malformed_body() {
        let reply = HttpReply::new(200, "<html>oops</html>");
        assert!(matches!(interpret(reply), Err(SubmitError::Decode(_))));

        let reply = HttpReply::new(200, r#"{"is_deepfake": "yes"}"#);
        assert!(matches!(interpret(reply), Err(SubmitError::Decode(_))));
    }
}
