use leptos::prelude::*;

/// Page title block with an optional subtitle and right-aligned actions
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Leading icon name
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,
    /// Actions or badges
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {move || icon_name.get().map(|name| view! {
                    <div class="page-header__icon">{crate::shared::icons::icon(&name)}</div>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
