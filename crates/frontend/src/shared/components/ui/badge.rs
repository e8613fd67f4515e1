use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pill-shaped label
#[component]
pub fn Badge(
    /// "success", "warning", "danger", "info", "pending" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Optional leading icon name
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,
    /// Pulse animation for work in progress
    #[prop(optional, into)]
    animated: MaybeProp<bool>,
    children: Children,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "success" => "badge--success",
        "warning" => "badge--warning",
        "danger" => "badge--danger",
        "info" => "badge--info",
        "pending" => "badge--pending",
        _ => "badge--neutral",
    };
    let animated_class = move || {
        if animated.get().unwrap_or(false) {
            "badge--animated"
        } else {
            ""
        }
    };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {} {}", variant_class(), animated_class(), additional_class())>
            {move || icon_name.get().map(|name| icon(&name))}
            {children()}
        </span>
    }
}
