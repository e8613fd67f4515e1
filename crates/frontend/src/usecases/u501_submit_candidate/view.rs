use crate::layout::toast::use_toast;
use crate::shared::components::logo::Logo;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::date_utils::{parse_input_date, to_input_date, today};
use crate::shared::forms::field_error;
use crate::shared::icons::icon;
use contracts::shared::validation::FieldError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_submit_candidate::{SubmissionForm, SubmitCandidate, CHECK_CATALOG};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

/// Employer-side request form: candidate details plus the checks to order
#[component]
pub fn SubmitCandidatePage() -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(SubmissionForm::default());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());

    let checks_error = field_error(errors, "checks");

    let submit = move || {
        let current = form.get_untracked();
        if let Err(e) = current.validate(today()) {
            log::debug!("submission rejected: {} invalid field(s)", e.len());
            set_errors.set(e);
            return;
        }
        set_errors.set(Vec::new());
        log::info!(
            "background check submitted for {} <{}>: {:?} (total ${})",
            current.full_name(),
            current.email,
            current.checks,
            current.total_price()
        );
        toast.show("Background Check Submitted", current.confirmation_message());
    };

    let offerings = CHECK_CATALOG
        .iter()
        .map(|offering| {
            let kind = offering.kind;
            view! {
                <div class="check-option">
                    <Checkbox
                        id=format!("check-{:?}", kind).to_lowercase()
                        label=offering.label.to_string()
                        hint=offering.description
                        checked=Signal::derive(move || form.with(|f| f.is_selected(kind)))
                        on_change=Callback::new(move |on: bool| {
                            form.update(|f| f.toggle_check(kind, on))
                        })
                    />
                    <span class="check-option__price">{format!("${}", offering.price)}</span>
                </div>
            }
        })
        .collect_view();

    let order_lines = move || {
        form.with(|f| {
            f.checks
                .iter()
                .map(|kind| {
                    let offering = kind.offering();
                    view! {
                        <div class="order-line">
                            <span>{offering.label}</span>
                            <span>{format!("${}", offering.price)}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="page page--tinted">
            <main class="container container--narrow">
                <div class="page-intro">
                    <Logo class="logo--centered" />
                    <h1>"Submit Background Check Request"</h1>
                    <p class="text-muted">{SubmitCandidate::description()}</p>
                </div>

                <div class="two-column">
                    <div class="two-column__main">
                        <Card>
                            <div class="card-header">
                                <h2 class="card-title">{icon("check-circle")}"Candidate Information"</h2>
                                <p class="card-description">
                                    "Enter the candidate's details for background verification"
                                </p>
                            </div>
                            <form
                                class="form"
                                on:submit=move |ev: leptos::ev::SubmitEvent| {
                                    ev.prevent_default();
                                    submit();
                                }
                            >
                                <div class="form__row">
                                    <Input
                                        id="first_name"
                                        label="First Name"
                                        placeholder="John"
                                        value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                                        on_input=Callback::new(move |v| form.update(|f| f.first_name = v))
                                        error=field_error(errors, "first_name")
                                    />
                                    <Input
                                        id="last_name"
                                        label="Last Name"
                                        placeholder="Doe"
                                        value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                                        on_input=Callback::new(move |v| form.update(|f| f.last_name = v))
                                        error=field_error(errors, "last_name")
                                    />
                                </div>
                                <Input
                                    id="email"
                                    label="Email Address"
                                    input_type="email"
                                    placeholder="john.doe@email.com"
                                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                                    error=field_error(errors, "email")
                                />
                                <Input
                                    id="date_of_birth"
                                    label="Date of Birth"
                                    label_icon="calendar"
                                    input_type="date"
                                    value=Signal::derive(move || to_input_date(form.with(|f| f.date_of_birth)))
                                    on_input=Callback::new(move |v: String| {
                                        form.update(|f| f.date_of_birth = parse_input_date(&v))
                                    })
                                    error=field_error(errors, "date_of_birth")
                                />

                                <div class="form__group">
                                    <span class="form__label">"Select Background Checks"</span>
                                    <div class="check-options">{offerings}</div>
                                    {move || checks_error.get().map(|message| view! {
                                        <p class="form__error">{message}</p>
                                    })}
                                </div>

                                <Checkbox
                                    id="consent"
                                    class="consent-box"
                                    label="Consent to Background Check"
                                    hint="I consent to the background checks selected above and understand that this information will be used for employment verification purposes."
                                    checked=Signal::derive(move || form.with(|f| f.consent))
                                    on_change=Callback::new(move |on| form.update(|f| f.consent = on))
                                    error=field_error(errors, "consent")
                                />
                            </form>
                        </Card>
                    </div>

                    <aside class="two-column__side">
                        <Card>
                            <h3 class="card-title">"Order Summary"</h3>
                            <Show
                                when=move || form.with(|f| !f.checks.is_empty())
                                fallback=|| view! { <p class="text-muted">"No checks selected"</p> }
                            >
                                <div class="order-lines">{order_lines}</div>
                                <hr />
                                <div class="order-line order-line--total">
                                    <span>"Total"</span>
                                    <span>{move || format!("${}", form.with(|f| f.total_price()))}</span>
                                </div>
                            </Show>
                        </Card>

                        <div class="action-list">
                            <Button
                                full_width=true
                                disabled=Signal::derive(move || form.with(|f| f.checks.is_empty()))
                                on_click=Callback::new(move |_| submit())
                            >
                                {icon("credit-card")}
                                "Proceed to Payment"
                            </Button>
                            <A href="/dashboard" attr:class="button button--secondary button--block">
                                "Skip to Dashboard"
                            </A>
                        </div>
                    </aside>
                </div>
            </main>
        </div>
    }
}
