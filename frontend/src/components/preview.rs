//! Local preview of the selected image.

use leptos::*;
use uploader::{format_size, MediaFile};

use crate::types::UploaderHandle;

/// Image preview with file name and size.
#[component]
pub fn PreviewPane(handle: UploaderHandle) -> impl IntoView {
    let src = move || handle.with(|u| u.preview().map(str::to_string).unwrap_or_default());
    let caption = move || handle.with(|u| u.file().map(|f| (f.name(), format_size(f.size()))));

    view! {
        <img class="preview-image" src=src alt="preview"/>
        <p class="preview-caption">
            {move || caption().map(|(name, size)| view! {
                {name} " " <span class="preview-size">"(" {size} ")"</span>
            })}
        </p>
    }
}
