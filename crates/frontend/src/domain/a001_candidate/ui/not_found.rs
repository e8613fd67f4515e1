use crate::shared::components::ui::Button;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Shown when the route id matches no candidate
#[component]
#[allow(non_snake_case)]
pub fn CandidateNotFound(
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] message: MaybeProp<String>,
    /// Offer a way back to the employer dashboard
    #[prop(optional)]
    with_return: bool,
) -> impl IntoView {
    let navigate = use_navigate();
    let on_return = Callback::new(move |_| navigate("/dashboard", Default::default()));

    view! {
        <div class="centered-page">
            <h1>{move || title.get().unwrap_or_else(|| "Candidate Not Found".to_string())}</h1>
            {move || message.get().map(|m| view! { <p class="text-muted">{m}</p> })}
            {with_return.then(|| view! {
                <Button on_click=on_return>"Return to Dashboard"</Button>
            })}
        </div>
    }
}
