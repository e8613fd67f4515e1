use crate::shared::components::logo::Logo;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="centered-page">
            <Logo icon_only=true />
            <h1>"404"</h1>
            <p class="text-muted">"Oops! Page not found"</p>
            <A href="/" attr:class="link">"Return to Home"</A>
        </div>
    }
}
