use crate::domain::a001_candidate::use_candidate_store;
use crate::shared::components::check_progress::CheckProgress;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a001_candidate::Candidate;
use contracts::enums::CandidateStatus;
use contracts::shared::status::progress_percent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::Card;

#[derive(Clone, Debug)]
pub struct CandidateRow {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub status: CandidateStatus,
    pub added: String,
    pub completed: Option<String>,
    pub progress: u8,
    pub candidate: Candidate,
}

impl From<Candidate> for CandidateRow {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            initials: c.initials(),
            email: c.email.clone(),
            status: c.status,
            added: format_date(c.date_added),
            completed: c.date_completed.map(format_date),
            progress: progress_percent(c.status),
            candidate: c,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CandidateList(
    /// Invoked by the empty-state button
    #[prop(optional)]
    on_start: Option<Callback<()>>,
) -> impl IntoView {
    let store = use_candidate_store();
    let navigate = use_navigate();

    let rows = move || {
        store
            .list()
            .into_iter()
            .map(CandidateRow::from)
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !store.is_empty()
            fallback=move || view! {
                <Card class="candidate-list__empty">
                    <div class="candidate-list__empty-icon">{icon("eye")}</div>
                    <h3>"No candidates yet"</h3>
                    <p class="text-muted">"Get started by running your first background check"</p>
                    <Button on_click=Callback::new(move |_| {
                        if let Some(handler) = on_start {
                            handler.run(());
                        }
                    })>
                        "Run Background Check"
                    </Button>
                </Card>
            }
        >
            <div class="candidate-list">
                <For
                    each=rows
                    key=|row| row.id.clone()
                    children={
                        let navigate = navigate.clone();
                        move |row: CandidateRow| {
                            let report_href = format!("/report/{}", row.id);
                            let open_card = {
                                let navigate = navigate.clone();
                                let href = report_href.clone();
                                move |_| navigate(&href, Default::default())
                            };
                            let open_button = {
                                let navigate = navigate.clone();
                                let href = report_href;
                                Callback::new(move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    navigate(&href, Default::default());
                                })
                            };
                            let progress = row.progress;

                            view! {
                                <div class="candidate-card" on:click=open_card>
                                    <div class="candidate-card__main">
                                        <div class="avatar">{row.initials}</div>
                                        <div class="candidate-card__body">
                                            <div class="candidate-card__title">
                                                <h3>{row.name}</h3>
                                                <StatusBadge status=row.status />
                                            </div>
                                            <CheckProgress candidate=row.candidate class="candidate-card__strip" />
                                            <div class="candidate-card__meta">
                                                <span>{icon("mail")}{row.email}</span>
                                                <span>{icon("calendar")}"Added "{row.added}</span>
                                                {row.completed.map(|d| view! {
                                                    <span class="text-success">"Completed "{d}</span>
                                                })}
                                            </div>
                                            {(row.status == CandidateStatus::InProgress).then(|| view! {
                                                <div class="candidate-card__progress">
                                                    <div class="candidate-card__progress-label">
                                                        <span>"Progress"</span>
                                                        <span class="text-brand">{format!("{}%", progress)}</span>
                                                    </div>
                                                    <ProgressBar value=progress />
                                                </div>
                                            })}
                                        </div>
                                    </div>
                                    <Button variant="secondary" size="sm" on_click=open_button>
                                        {icon("eye")}
                                        "View Report"
                                    </Button>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </Show>
    }
}
