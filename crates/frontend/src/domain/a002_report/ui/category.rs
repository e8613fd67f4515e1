use crate::domain::a001_candidate::ui::not_found::CandidateNotFound;
use crate::domain::a001_candidate::use_candidate_store;
use crate::layout::header::BackHeader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::CategoryBadge;
use crate::shared::icons::icon;
use crate::shared::route_params::use_route_param;
use crate::system::pages::not_found::NotFoundPage;
use contracts::domain::a001_candidate::Candidate;
use contracts::domain::a002_report::{category_detail, get_report_data};
use contracts::enums::Category;
use leptos::prelude::*;
use thaw::Card;

/// Sub-report for one category at `/report/:id/:section`
#[component]
#[allow(non_snake_case)]
pub fn CategoryReportPage() -> impl IntoView {
    let store = use_candidate_store();
    let id = use_route_param("id");
    let section = use_route_param("section");
    let candidate = Memo::new(move |_| store.find(&id.get()));

    move || {
        let Some(category) = Category::from_slug(&section.get()) else {
            return view! { <NotFoundPage /> }.into_any();
        };
        match candidate.get() {
            Some(c) => view! { <CategoryReportView candidate=c category=category /> }.into_any(),
            None => view! { <CandidateNotFound with_return=true /> }.into_any(),
        }
    }
}

#[component]
fn CategoryReportView(candidate: Candidate, category: Category) -> impl IntoView {
    let detail = category_detail(category);
    let value = get_report_data(candidate.id.as_str()).value_of(category);
    let back_href = format!("/report/{}", candidate.id);

    let sections = detail
        .sections
        .iter()
        .map(|section| {
            let rows = section
                .rows
                .iter()
                .map(|row| {
                    view! {
                        <div class="finding-row">
                            <span class="finding-row__label">{row.label}</span>
                            <span class="finding-row__value">{row.value}</span>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <Card>
                    <div class="card-header">
                        <h2 class="card-title">{section.title}</h2>
                        <p class="card-description">{section.description}</p>
                    </div>
                    <div class="finding-rows">{rows}</div>
                </Card>
            }
        })
        .collect_view();

    let methodology = detail
        .methodology
        .iter()
        .map(|step| view! { <li>{*step}</li> })
        .collect_view();

    view! {
        <div class="page">
            <BackHeader href=back_href label="Back to Report" />

            <main class="container">
                <PageHeader
                    title=category.title()
                    subtitle=format!(
                        "Detailed {} results for {}",
                        category.title().to_lowercase(),
                        candidate.name
                    )
                    icon_name=category.icon()
                >
                    <CategoryBadge value=value />
                </PageHeader>

                <p class="text-muted">{detail.description}</p>

                <div class="section-grid">{sections}</div>

                <div class="two-column two-column--even">
                    <Card>
                        <h3 class="card-title">{icon("shield")}"Verification Methodology"</h3>
                        <ul class="bullet-list">{methodology}</ul>
                    </Card>
                    <Card>
                        <h3 class="card-title">{icon("check-circle")}"Summary"</h3>
                        <p class="summary-text">{detail.summary}</p>
                    </Card>
                </div>
            </main>
        </div>
    }
}
