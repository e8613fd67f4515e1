use crate::domain::a001_candidate::CandidateStore;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::ModalService;
use crate::layout::toast::{ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::provide_auth;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);

    // Candidate registry, seeded with the demo set
    provide_context(CandidateStore::seeded());

    provide_auth();

    // Provide ModalService for centralized modal management
    provide_context(ModalService::new());

    provide_context(ToastService::new(ctx.toast_duration_ms()));

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
