use leptos::prelude::*;

/// Checkbox with a clickable label
#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    /// Secondary line under the label
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] disabled: bool,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let wrapper_class = move || {
        if disabled {
            format!(
                "form__checkbox-wrapper form__checkbox-wrapper--disabled {}",
                additional_class()
            )
        } else {
            format!("form__checkbox-wrapper {}", additional_class())
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
                {move || hint.get().map(|h| view! { <span class="form__hint">{h}</span> })}
            </label>
            {move || error.get().map(|message| view! {
                <p class="form__error">{message}</p>
            })}
        </div>
    }
}
