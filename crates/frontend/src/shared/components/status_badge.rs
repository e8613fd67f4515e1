use crate::shared::components::ui::Badge;
use contracts::enums::{CandidateStatus, CategoryValue};
use contracts::shared::status::{classify_category, classify_overall_status};
use leptos::prelude::*;

/// Overall candidate status as a coloured badge
#[component]
pub fn StatusBadge(status: CandidateStatus) -> impl IntoView {
    let spec = classify_overall_status(status);

    view! {
        <Badge
            variant=spec.severity.code()
            icon_name=spec.icon
            animated=spec.animated
        >
            {spec.label}
        </Badge>
    }
}

/// Category value badge with its tier icon
#[component]
pub fn CategoryBadge(value: CategoryValue) -> impl IntoView {
    let class = classify_category(Some(value));

    view! {
        <Badge variant=class.tier.code() icon_name=class.tier.icon()>
            {class.label}
        </Badge>
    }
}
