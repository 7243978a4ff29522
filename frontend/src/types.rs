//! Browser-side types shared by components and services.
//!
//! # Categories
//!
//! - **File Types** - `web_sys::File` adapted to the uploader
//! - **State Types** - the reactive handle on the uploader state

use leptos::*;
use uploader::{MediaFile, Uploader, UploaderCell};
use wasm_bindgen::JsValue;

// =============================================================================
// File Types
// =============================================================================

/// A file picked from the input or dropped on the zone.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(pub web_sys::File);

impl BrowserFile {
    pub fn inner(&self) -> &web_sys::File {
        &self.0
    }
}

impl From<web_sys::File> for BrowserFile {
    fn from(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl MediaFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

// =============================================================================
// State Types
// =============================================================================

/// Uploader state as owned by the widget.
pub type UploaderState = Uploader<BrowserFile>;

/// Copyable handle on the widget's uploader signal.
#[derive(Clone, Copy)]
pub struct UploaderHandle(pub RwSignal<UploaderState>);

impl UploaderHandle {
    pub fn new(state: UploaderState) -> Self {
        Self(create_rw_signal(state))
    }

    /// Read through the signal, tracking it.
    pub fn with<R>(&self, f: impl FnOnce(&UploaderState) -> R) -> R {
        self.0.with(f)
    }
}

impl UploaderCell<BrowserFile> for UploaderHandle {
    fn update<R>(&self, f: impl FnOnce(&mut UploaderState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Render a JS exception for logs and messages.
pub fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
