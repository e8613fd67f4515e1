use crate::shared::icons::icon;
use leptos::prelude::*;

/// Labelled text input with an inline validation message
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Icon shown before the label
    #[prop(optional, into)]
    label_icon: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "email", "password", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] max_length: MaybeProp<u32>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
    /// Validation message rendered under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let invalid_class = move || {
        if error.get().is_some() {
            "form__input--invalid"
        } else {
            ""
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {label_icon.get().map(|name| icon(&name))}
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {} {}", invalid_class(), additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                maxlength=move || max_length.get().map(|n| n.to_string())
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <p class="form__error">{message}</p>
            })}
        </div>
    }
}
