use crate::domain::a001_candidate::ui::form::CandidateForm;
use crate::domain::a001_candidate::ui::list::CandidateList;
use crate::domain::a001_candidate::use_candidate_store;
use crate::layout::header::Header;
use crate::layout::toast::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::Card;

/// Employer dashboard: counters, candidate list and the quick add form
#[component]
pub fn CandidateDashboard() -> impl IntoView {
    let store = use_candidate_store();
    let toast = use_toast();
    let navigate = use_navigate();
    let (show_form, set_show_form) = signal(false);

    let summary = Memo::new(move |_| store.summary());

    let on_add = Callback::new(move |(name, email): (String, String)| {
        if store.add(&name, &email).is_some() {
            set_show_form.set(false);
            toast.show(
                "Background Check Initiated",
                format!("Candidate invitation sent to {}", email),
            );
        }
    });
    let toggle_form = Callback::new(move |_| set_show_form.update(|v| *v = !*v));
    let open_form = Callback::new(move |_| set_show_form.set(true));
    let on_submit_page = Callback::new(move |_| navigate("/submit-candidate", Default::default()));

    view! {
        <div class="page">
            <Header />

            <main class="container">
                <PageHeader
                    title="Background Check Dashboard"
                    subtitle="Manage candidate screenings and view reports"
                />

                <div class="stat-grid">
                    <StatCard
                        label="Total Candidates"
                        icon_name="users"
                        tone="info"
                        value=Signal::derive(move || summary.get().total)
                    />
                    <StatCard
                        label="Cleared"
                        icon_name="check-circle"
                        tone="success"
                        value=Signal::derive(move || summary.get().cleared)
                    />
                    <StatCard
                        label="Need Review"
                        icon_name="alert-triangle"
                        tone="warning"
                        value=Signal::derive(move || summary.get().need_review)
                    />
                    <StatCard
                        label="In Progress"
                        icon_name="clock"
                        tone="pending"
                        value=Signal::derive(move || summary.get().in_progress)
                    />
                </div>

                <div class="two-column">
                    <div class="two-column__main">
                        <div class="section-heading">
                            <h2>"Recent Candidates"</h2>
                            <Button on_click=toggle_form>
                                {icon("user-plus")}
                                "Run Background Check"
                            </Button>
                        </div>
                        <CandidateList on_start=open_form />
                    </div>

                    <aside class="two-column__side">
                        <Show when=move || show_form.get()>
                            <CandidateForm on_submit=on_add />
                        </Show>

                        <Card>
                            <div class="card-header">
                                <h3 class="card-title">"Quick Actions"</h3>
                                <p class="card-description">"Common tasks and shortcuts"</p>
                            </div>
                            <div class="action-list">
                                <Button variant="secondary" full_width=true on_click=on_submit_page>
                                    {icon("users")}"Submit Candidate Details"
                                </Button>
                                <Button variant="secondary" full_width=true>
                                    {icon("check-circle")}"View All Reports"
                                </Button>
                                <Button variant="secondary" full_width=true>
                                    {icon("alert-triangle")}
                                    {move || format!("Pending Reviews ({})", summary.get().need_review)}
                                </Button>
                            </div>
                        </Card>
                    </aside>
                </div>
            </main>
        </div>
    }
}
