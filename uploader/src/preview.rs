//! Local preview rendering.
//!
//! Previews are produced asynchronously after a file is accepted. Every
//! accepted file gets a fresh [`PreviewTicket`]; the state machine only keeps
//! a completion whose ticket is still current, so a slow decode of an older
//! file can never overwrite the preview of a newer one.

use base64::Engine;

/// Identifies the file a preview decode was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    pub(crate) generation: u64,
}

impl PreviewTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Encode bytes as a `data:` URL with a base64 payload.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_encode_empty_payload() {
        assert_eq!(encode_data_url("image/gif", &[]), "data:image/gif;base64,");
    }
}
