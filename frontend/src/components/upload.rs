//! Image upload form with drag & drop support.
//!
//! Handles file selection, drop-zone feedback and submission. Validation and
//! state transitions live in the shared [`uploader::Uploader`].

use leptos::*;
use uploader::{submit, DragPhase, UploaderCell};
use web_sys::{FileList, HtmlInputElement};

use crate::components::PreviewPane;
use crate::config::{ACCEPTED_MEDIA, FILE_INPUT_ID, FORMAT_HINT};
use crate::services::{render_preview, FetchTransport};
use crate::types::{BrowserFile, UploaderHandle};

#[component]
pub fn UploadSection(handle: UploaderHandle) -> impl IntoView {
    // Only the first file of a selection or drop is considered
    let take_first = move |files: Option<FileList>| {
        let Some(file) = files.and_then(|list| list.get(0)) else {
            return;
        };
        let file = BrowserFile::from(file);
        match handle.update(|u| u.accept(file.clone())) {
            Some(Ok(ticket)) => render_preview(handle, file, ticket),
            Some(Err(e)) => log::warn!("⚠️ {}", e),
            None => {}
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        take_first(input.files());
    };

    let on_drag = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(phase) = DragPhase::from_event_type(&ev.type_()) {
            handle.update(|u| u.drag(phase));
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        handle.update(|u| u.drag(DragPhase::Drop));
        take_first(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            submit(&handle, &FetchTransport).await;
        });
    };

    let uploading = move || handle.with(|u| u.is_uploading());
    let has_preview = move || handle.with(|u| u.preview().is_some());
    let zone_class = move || {
        if handle.with(|u| u.drag_active()) {
            "upload-section drag-active"
        } else {
            "upload-section"
        }
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div
                class=zone_class
                on:dragenter=on_drag
                on:dragover=on_drag
                on:dragleave=on_drag
                on:drop=on_drop
            >
                <Show
                    when=move || !has_preview()
                    fallback=move || view! { <PreviewPane handle=handle/> }
                >
                    <div class="upload-icon">"📤"</div>
                    <div class="upload-text">
                        "Drag & drop image here" <br/> "or click to browse"
                    </div>
                    <div class="upload-hint">{FORMAT_HINT}</div>
                </Show>

                <input
                    type="file"
                    id=FILE_INPUT_ID
                    accept=ACCEPTED_MEDIA
                    style="display:none"
                    prop:disabled=uploading
                    on:change=on_file_change
                />
                <label for=FILE_INPUT_ID class="upload-button">
                    {move || if has_preview() { "Choose a different file" } else { "Select file" }}
                </label>
            </div>

            <Show
                when=has_preview
                fallback=|| view! { }
            >
                <button type="submit" class="submit-button" prop:disabled=uploading>
                    "🖼️ Analyse with "
                    {move || handle.with(|u| u.model().as_str().to_uppercase())}
                </button>
            </Show>
        </form>
    }
}
