use crate::domain::a001_candidate::ui::not_found::CandidateNotFound;
use crate::domain::a001_candidate::use_candidate_store;
use crate::layout::global_context::use_global_context;
use crate::shared::components::logo::Logo;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::route_params::use_route_param;
use contracts::domain::a001_candidate::Candidate;
use contracts::domain::a002_report::{get_report_data, ReportData};
use contracts::shared::status::{
    classify_portal_category, portal_progress_percent, portal_steps, shows_results,
    shows_summary, Tier, PORTAL_CATEGORIES,
};
use leptos::prelude::*;
use thaw::Card;

/// Candidate-facing status page at `/candidate-portal/:id`
#[component]
#[allow(non_snake_case)]
pub fn CandidatePortalPage() -> impl IntoView {
    let store = use_candidate_store();
    let id = use_route_param("id");
    let candidate = Memo::new(move |_| store.find(&id.get()));

    move || match candidate.get() {
        Some(c) => {
            let report = get_report_data(c.id.as_str());
            view! { <PortalView candidate=c report=report /> }.into_any()
        }
        None => view! {
            <CandidateNotFound
                title="Access Not Found"
                message="Please check your invitation link."
            />
        }
        .into_any(),
    }
}

#[component]
fn PortalView(candidate: Candidate, report: ReportData) -> impl IntoView {
    let ctx = use_global_context();
    let status = candidate.status;
    let percent = portal_progress_percent(status);

    let steps = portal_steps(status)
        .into_iter()
        .enumerate()
        .map(|(i, step)| {
            let marker = if step.done {
                icon("check-circle")
            } else {
                view! { <span>{i + 1}</span> }.into_any()
            };
            let marker_class = if step.done {
                "portal-step__marker portal-step__marker--done"
            } else {
                "portal-step__marker"
            };
            view! {
                <div class="portal-step">
                    <div class=marker_class>
                        {marker}
                    </div>
                    <p class="portal-step__title">{step.title}</p>
                    <p class="portal-step__caption">{step.caption}</p>
                </div>
            }
        })
        .collect_view();

    let results = PORTAL_CATEGORIES
        .into_iter()
        .map(|category| {
            let class = classify_portal_category(report.value_of(category));
            let status_icon = if class.tier == Tier::Success { "check-circle" } else { "clock" };
            view! {
                <Card class="category-card">
                    <h3 class="card-title">{icon(category.icon())}{category.title()}</h3>
                    <div class="category-card__status">
                        <span class="text-muted">"Status"</span>
                        <span class="category-card__value">
                            {icon(status_icon)}
                            <Badge variant=class.tier.code()>{class.label}</Badge>
                        </span>
                    </div>
                </Card>
            }
        })
        .collect_view();

    let summary = report.summary.clone();

    view! {
        <div class="page">
            <header data-zone="header" class="header">
                <div class="header__content container">
                    <Logo />
                    <div class="header__identity">
                        <p class="header__org-name">"Candidate Portal"</p>
                        <p class="header__org-email">{candidate.name.clone()}</p>
                    </div>
                </div>
            </header>

            <main class="container container--narrow">
                <div class="page-header">
                    <div class="page-header__text">
                        <h1 class="page-header__title">"Your Background Check Status"</h1>
                        <div class="page-header__subtitle">
                            "Hello "{candidate.name.clone()}
                            <StatusBadge status=status />
                        </div>
                    </div>
                </div>

                <Card class="portal-progress">
                    <div class="card-header">
                        <h2 class="card-title">{icon("clock")}"Progress Overview"</h2>
                        <p class="card-description">"Track the status of your background verification"</p>
                    </div>
                    <div class="portal-progress__bar">
                        <div class="portal-progress__label">
                            <span>"Background Check Progress"</span>
                            <span>{format!("{}% Complete", percent)}</span>
                        </div>
                        <ProgressBar value=percent />
                    </div>
                    <div class="portal-steps">{steps}</div>
                </Card>

                {shows_results(status).then(move || view! {
                    <div class="two-column">
                        <div class="two-column__main">
                            <h2>"Verification Results"</h2>
                            <div class="category-grid category-grid--two">{results}</div>
                            {shows_summary(status).then(move || view! {
                                <Card>
                                    <div class="card-header">
                                        <h2 class="card-title">{icon("alert-circle")}"Summary"</h2>
                                        <p class="card-description">"Overview of your background check results"</p>
                                    </div>
                                    <p class="summary-text">{summary}</p>
                                </Card>
                            })}
                        </div>
                        <aside class="two-column__side">
                            <Card>
                                <h3 class="card-title">"Need Help?"</h3>
                                <p class="text-muted">
                                    "If you have questions about your background check or need to dispute any findings, please contact the employer's HR department."
                                </p>
                                <p class="contact-line">{icon("phone")}"(555) 123-4567"</p>
                                <p class="contact-line">{icon("mail")}{move || ctx.organization_email()}</p>
                            </Card>
                            <Card>
                                <h3 class="card-title">"Your Rights"</h3>
                                <p class="text-muted">"You have the right to:"</p>
                                <ul class="bullet-list">
                                    <li>"Request a copy of your report"</li>
                                    <li>"Dispute inaccurate information"</li>
                                    <li>"Know if information was used against you"</li>
                                </ul>
                            </Card>
                        </aside>
                    </div>
                })}
            </main>
        </div>
    }
}
