//! Browser services.
//!
//! # Services
//!
//! - [`predict`] - multipart POST to the prediction API via `fetch`
//! - [`preview`] - background file read into a data URL

pub mod predict;
pub mod preview;

pub use predict::*;
pub use preview::*;
