use leptos::prelude::*;

/// Button with variants (primary, secondary, ghost, destructive) and sizes (sm, md)
#[component]
pub fn Button(
    /// "primary" (default), "secondary", "ghost" or "destructive"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "destructive" => "button--destructive",
        _ => "button--primary",
    };
    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };
    let width_class = if full_width { "button--block" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!(
                "button {} {} {} {}",
                variant_class(),
                size_class(),
                width_class,
                additional_class()
            )
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
