//! Deepfake Detector - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for checking an image against a remote deepfake
//! classifier.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! │  ModelSelect (v1 / v2)                                       │
//! │  UploadSection                                               │
//! │  ├── drop zone + hidden file input                          │
//! │  ├── PreviewPane (when a preview is ready)                  │
//! │  └── submit button                                           │
//! │  StatusBanner                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All components share one [`UploaderHandle`] created by [`App`].
//!
//! # Modules
//!
//! - [`types`] - Browser file wrapper and state handle
//! - [`components`] - UI components
//! - [`services`] - Prediction request and preview decoding

use leptos::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::{BrowserFile, UploaderHandle, UploaderState};
pub use components::*;
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    let handle = UploaderHandle::new(UploaderState::default());

    view! {
        <main>
            <section class="container">
                <Hero/>
                <ModelSelect handle=handle/>
                <UploadSection handle=handle/>
                <StatusBanner handle=handle/>
            </section>
        </main>
    }
}
