//! Model version selector.

use leptos::*;
use uploader::{ModelVersion, UploaderCell};

use crate::types::UploaderHandle;

#[component]
pub fn ModelSelect(handle: UploaderHandle) -> impl IntoView {
    let on_change = move |ev: ev::Event| match event_target_value(&ev).parse::<ModelVersion>() {
        Ok(model) => {
            log::info!("🔀 Model set to {}", model);
            handle.update(|u| u.set_model(model));
        }
        Err(e) => log::warn!("{}", e),
    };

    view! {
        <div class="model-select">
            <label for="model" class="model-label">"Model version"</label>
            <select
                id="model"
                prop:value=move || handle.with(|u| u.model().as_str())
                on:change=on_change
            >
                {ModelVersion::ALL
                    .into_iter()
                    .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
