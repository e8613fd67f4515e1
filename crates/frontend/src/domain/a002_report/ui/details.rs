use crate::domain::a001_candidate::ui::not_found::CandidateNotFound;
use crate::domain::a001_candidate::use_candidate_store;
use crate::domain::a002_report::ui::adverse_action::AdverseActionModal;
use crate::layout::header::BackHeader;
use crate::layout::modal_service::use_modal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::{CategoryBadge, StatusBadge};
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_date_numeric;
use crate::shared::icons::icon;
use crate::shared::route_params::use_route_param;
use contracts::domain::a001_candidate::Candidate;
use contracts::domain::a002_report::{category_detail, get_report_data, has_report, ReportData};
use contracts::enums::{CandidateStatus, Category};
use contracts::shared::status::classify_category;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::Card;

/// Employer report overview at `/report/:id`
#[component]
#[allow(non_snake_case)]
pub fn ReportPage() -> impl IntoView {
    let store = use_candidate_store();
    let id = use_route_param("id");
    let candidate = Memo::new(move |_| store.find(&id.get()));

    move || match candidate.get() {
        Some(c) => {
            // report table is keyed independently of the registry
            if !has_report(c.id.as_str()) {
                log::debug!("no report on file for candidate {}, showing pending defaults", c.id);
            }
            let report = get_report_data(c.id.as_str());
            view! { <ReportView candidate=c report=report /> }.into_any()
        }
        None => {
            log::debug!("report requested for unknown candidate '{}'", id.get_untracked());
            view! { <CandidateNotFound with_return=true /> }.into_any()
        }
    }
}

/// Label/value pairs of the "Candidate Information" card
fn info_rows(candidate: &Candidate) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Full Name", candidate.name.clone()),
        ("Email", candidate.email.clone()),
        ("Date Added", format_date_numeric(candidate.date_added)),
    ];
    if let Some(completed) = candidate.date_completed {
        rows.push(("Completed", format_date_numeric(completed)));
    }
    rows
}

#[component]
fn ReportView(candidate: Candidate, report: ReportData) -> impl IntoView {
    let modal = use_modal();
    let navigate = use_navigate();
    let id = candidate.id.to_string();
    on_cleanup(move || modal.hide());

    let categories = Category::all()
        .into_iter()
        .map(|category| {
            let value = report.value_of(category);
            let tier = classify_category(Some(value)).tier;
            let href = format!("/report/{}/{}", id, category.slug());
            let navigate = navigate.clone();
            view! {
                <div
                    class="category-card category-card--link"
                    role="link"
                    on:click=move |_| navigate(&href, Default::default())
                >
                    <h3 class="card-title">{icon(category.icon())}{category.title()}</h3>
                    <div class="category-card__status">
                        <span class="text-muted">"Status"</span>
                        <span class=format!("category-card__value tier--{}", tier.code())>
                            {icon(tier.icon())}
                            <CategoryBadge value=value />
                        </span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let findings = Category::all()
        .into_iter()
        .map(|category| {
            let tier = classify_category(Some(report.value_of(category))).tier;
            view! {
                <div class="finding">
                    <span class=format!("finding__icon tier--{}", tier.code())>{icon(tier.icon())}</span>
                    <div>
                        <div class="finding__title">{category.title()}</div>
                        <p class="finding__text">{category_detail(category).summary}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let portal_href = format!("/candidate-portal/{}", id);
    let on_portal = {
        let navigate = navigate.clone();
        Callback::new(move |_| navigate(&portal_href, Default::default()))
    };
    let contact_href = format!("mailto:{}", candidate.email);
    let status = candidate.status;
    let is_review = status == CandidateStatus::Review;
    let on_reject = Callback::new(move |_| modal.show());
    let subtitle = format!("Candidate: {}", candidate.name);
    let info = info_rows(&candidate)
        .into_iter()
        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
        .collect_view();
    let summary = report.summary.clone();

    view! {
        <div class="page">
            <BackHeader href="/dashboard" label="Back to Dashboard">
                <Button variant="secondary" size="sm">{icon("download")}"Export PDF"</Button>
                <Button variant="secondary" size="sm">{icon("mail")}"Share Report"</Button>
            </BackHeader>

            <main class="container">
                <PageHeader
                    title="Background Check Report"
                    subtitle=subtitle
                >
                    <StatusBadge status=status />
                    {is_review.then(|| view! {
                        <Button variant="destructive" on_click=on_reject>
                            {icon("x-circle")}
                            "Reject Candidate"
                        </Button>
                    })}
                </PageHeader>

                <div class="two-column">
                    <div class="two-column__main">
                        <div class="category-grid">{categories}</div>

                        <Card>
                            <div class="card-header">
                                <h2 class="card-title">{icon("alert-circle")}"AI Summary"</h2>
                                <p class="card-description">"Automated analysis of background check results"</p>
                            </div>
                            <div class="summary-panel">
                                <p class="summary-text">{summary}</p>
                                <div class="finding-list">{findings}</div>
                            </div>
                        </Card>
                    </div>

                    <aside class="two-column__side">
                        <Card>
                            <h3 class="card-title">"Candidate Information"</h3>
                            <dl class="info-list">{info}</dl>
                        </Card>

                        <Card>
                            <h3 class="card-title">"Quick Actions"</h3>
                            <div class="action-list">
                                <a class="button button--secondary button--block" href=contact_href>
                                    {icon("mail")}"Contact Candidate"
                                </a>
                                <Button variant="secondary" full_width=true>
                                    {icon("download")}"Download Report"
                                </Button>
                                <Button variant="secondary" full_width=true on_click=on_portal>
                                    {icon("user")}"View Candidate Portal"
                                </Button>
                            </div>
                        </Card>
                    </aside>
                </div>
            </main>

            {is_review.then(move || view! { <AdverseActionModal candidate=candidate /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_candidate::CandidateRegistry;

    #[test]
    fn test_info_rows_for_completed_candidate() {
        let registry = CandidateRegistry::seeded();
        let candidate = registry.find("1").unwrap();
        let rows = info_rows(candidate);
        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Full Name", "Email", "Date Added", "Completed"]);
        assert_eq!(rows[1].1, candidate.email);
    }

    #[test]
    fn test_info_rows_omit_completion_while_pending() {
        let mut registry = CandidateRegistry::new();
        let added = registry.add_on(
            "Jane Roe",
            "jane@x.com",
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            1,
        );
        let rows = info_rows(&added);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], ("Date Added", "3/1/2024".to_string()));
    }
}
