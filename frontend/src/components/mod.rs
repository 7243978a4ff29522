//! UI Components for the deepfake detector.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//!
//! # Feature Components
//! - [`ModelSelect`] - Model version choice
//! - [`UploadSection`] - Image picker and drop zone with submit button
//! - [`PreviewPane`] - Local preview of the selected image
//! - [`StatusBanner`] - Loading / result / error banner

mod hero;
mod model_select;
mod upload;
mod preview;
mod status;

pub use hero::*;
pub use model_select::*;
pub use upload::*;
pub use preview::*;
pub use status::*;
