//! Selected files and MIME inspection.

use crate::preview::encode_data_url;

/// Bytes per megabyte as shown under the preview.
const BYTES_PER_MB: f64 = 1_048_576.0;

/// A file the user picked or dropped.
///
/// Implemented by [`LocalFile`] on native hosts and by a `web_sys::File`
/// wrapper in the browser.
pub trait MediaFile: Clone {
    /// Display name, also sent as the multipart filename.
    fn name(&self) -> String;

    /// Declared MIME type, possibly empty.
    fn mime_type(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;
}

/// Category prefix of a MIME type ("image" in "image/png").
pub fn top_level_type(mime: &str) -> &str {
    mime.split('/').next().unwrap_or_default()
}

/// Whether the MIME type belongs to the `image` family.
pub fn is_image(mime: &str) -> bool {
    top_level_type(mime) == "image"
}

/// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// In-memory file with owned content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Data URL of the content, as the preview renderer produces it.
    pub fn data_url(&self) -> String {
        encode_data_url(&self.mime_type, &self.bytes)
    }
}

impl MediaFile for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
