use crate::shared::icons::icon;
use leptos::prelude::*;

/// Snapshot wordmark with the camera glyph
#[component]
pub fn Logo(
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Hide the "Snapshot" text and keep only the glyph
    #[prop(optional)]
    icon_only: bool,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("logo {}", additional_class())>
            <div class="logo__mark">
                {icon("camera")}
                <span class="logo__dot"></span>
            </div>
            {(!icon_only).then(|| view! { <span class="logo__text">"Snapshot"</span> })}
        </div>
    }
}
