//! Status banner under the upload form.

use leptos::*;
use uploader::StatusKind;

use crate::types::UploaderHandle;

/// CSS classes for a banner of the given kind.
fn banner_class(kind: StatusKind) -> String {
    format!("status-banner {}", kind.css_class())
}

/// Renders nothing while idle, otherwise icon + message.
#[component]
pub fn StatusBanner(handle: UploaderHandle) -> impl IntoView {
    move || {
        let status = handle.with(|u| u.status().clone());
        let kind = status.kind()?;
        let message = status.message().unwrap_or_default().to_string();
        let spinning = kind == StatusKind::Info;

        Some(view! {
            <div class=banner_class(kind)>
                <span class="status-icon" class:spin=spinning>{kind.icon()}</span>
                {message}
            </div>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_class() {
        assert_eq!(banner_class(StatusKind::Info), "status-banner status-info");
        assert_eq!(banner_class(StatusKind::Error), "status-banner status-error");
    }
}
