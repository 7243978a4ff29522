//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">"Upload an image and choose a model version"</p>
        </div>
    }
}
