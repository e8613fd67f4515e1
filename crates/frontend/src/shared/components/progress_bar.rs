use leptos::prelude::*;

#[component]
pub fn ProgressBar(
    /// 0..=100
    #[prop(into)]
    value: Signal<u8>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div
            class=move || format!("progress {}", class.get().unwrap_or_default())
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || value.get().to_string()
        >
            <div
                class="progress__fill"
                style=move || format!("width: {}%;", value.get().min(100))
            ></div>
        </div>
    }
}
