use crate::layout::global_context::use_global_context;
use crate::shared::components::logo::Logo;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::system::auth::{sign_out, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Employer header: logo, organisation identity and logout
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |_| {
        sign_out(auth);
        navigate("/", Default::default());
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content container">
                <Logo />
                <div class="header__actions">
                    <div class="header__identity">
                        <p class="header__org-name">{move || ctx.organization_name()}</p>
                        <p class="header__org-email">{move || ctx.organization_email()}</p>
                    </div>
                    <Button variant="secondary" size="sm" on_click=on_logout>
                        "Logout"
                    </Button>
                </div>
            </div>
        </header>
    }
}

/// Dark header with a back link, used by report pages
#[component]
pub fn BackHeader(
    /// Route the back button leads to
    #[prop(into)]
    href: String,
    #[prop(into)] label: String,
    /// Extra buttons on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let navigate = use_navigate();
    let on_back = Callback::new(move |_| navigate(&href, Default::default()));

    view! {
        <header data-zone="header" class="header header--dark">
            <div class="header__content container">
                <div class="header__lead">
                    <Button variant="secondary" size="sm" on_click=on_back>
                        {icon("arrow-left")}
                        {label}
                    </Button>
                    <Logo />
                </div>
                <div class="header__actions">
                    {children.map(|c| c())}
                </div>
            </div>
        </header>
    }
}
