use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard counter tile
#[component]
pub fn StatCard(
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)] value: Signal<usize>,
    /// "info", "success", "warning" or "pending"
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{}", tone)>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
