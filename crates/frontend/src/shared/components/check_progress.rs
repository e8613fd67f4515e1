use contracts::domain::a001_candidate::Candidate;
use contracts::shared::status::section_strip;
use leptos::prelude::*;

/// Six-cell strip summarising a candidate's category results
#[component]
pub fn CheckProgress(
    candidate: Candidate,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let cells = section_strip(&candidate)
        .into_iter()
        .map(|(category, class)| {
            let title = format!("{}: {}", category.short_label(), class.tier.strip_label());
            view! {
                <div class=format!("check-strip__cell check-strip__cell--{}", class.tier.code()) title=title></div>
            }
        })
        .collect_view();

    view! {
        <div class=move || format!("check-strip {}", class.get().unwrap_or_default())>
            {cells}
        </div>
    }
}
