//! Application configuration.
//!
//! Compile-time constants for the frontend. The prediction endpoint itself
//! lives in [`uploader::config`].

/// Title shown in the hero.
pub const APP_NAME: &str = "Deepfake Detector";

/// `accept` filter of the hidden file input.
pub const ACCEPTED_MEDIA: &str = "image/*";

/// Format hint under the drop zone.
pub const FORMAT_HINT: &str = "JPEG / PNG";

/// Element id linking the picker label to the hidden input.
pub const FILE_INPUT_ID: &str = "file";
