//! Reads an accepted file in the background and stores its data URL.

use leptos::spawn_local;
use uploader::{encode_data_url, MediaFile, PreviewTicket, UploaderCell};
use wasm_bindgen_futures::JsFuture;

use crate::types::{js_error, BrowserFile, UploaderHandle};

/// Read the whole file into memory.
async fn read_bytes(file: &BrowserFile) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.inner().array_buffer())
        .await
        .map_err(|e| js_error(&e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Start decoding `file` for `ticket`. Returns immediately.
pub fn render_preview(handle: UploaderHandle, file: BrowserFile, ticket: PreviewTicket) {
    spawn_local(async move {
        match read_bytes(&file).await {
            Ok(bytes) => {
                let data_url = encode_data_url(&file.mime_type(), &bytes);
                if handle.update(|u| u.preview_ready(ticket, data_url)) == Some(true) {
                    log::debug!("🖼️ Preview ready for {}", file.name());
                }
            }
            Err(e) => {
                log::warn!("Could not read {} for preview: {}", file.name(), e);
            }
        }
    });
}
