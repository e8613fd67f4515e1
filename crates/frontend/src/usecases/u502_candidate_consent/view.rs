use crate::layout::global_context::use_global_context;
use crate::layout::toast::use_toast;
use crate::shared::components::logo::Logo;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::date_utils::{parse_input_date, to_input_date, today};
use crate::shared::deferred::DeferredTask;
use crate::shared::forms::field_error;
use crate::shared::icons::icon;
use crate::shared::route_params::use_route_param;
use contracts::shared::deferred::{DeferredSpec, DeferredState};
use contracts::shared::validation::{message_for, FieldError};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_candidate_consent::{CandidateConsent, ConsentForm, CONSENT_FIELD};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Card, Spinner, SpinnerSize};

const AUTHORIZATION_TEXT: &str = "By checking the box below, I authorize the employer to conduct a \
comprehensive background check, which may include verification of identity, criminal history, \
employment history, and education credentials. I understand this check is for employment purposes \
and conducted in compliance with FCRA regulations.";

/// Candidate-facing consent form at `/candidate/:id`
#[component]
pub fn CandidateConsentPage() -> impl IntoView {
    let ctx = use_global_context();
    let toast = use_toast();
    let id = use_route_param("id");

    let form = RwSignal::new(ConsentForm::default());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (submitted, set_submitted) = signal(false);

    let task = DeferredTask::new(
        "consent",
        DeferredSpec::new(ctx.consent_delay_ms(), ctx.operation_timeout_ms()),
    );
    on_cleanup(move || {
        task.cancel();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if task.is_running() {
            return;
        }
        if let Err(e) = form.with_untracked(|f| f.validate(today())) {
            // consent is reported as a toast, the rest inline
            if let Some(message) = message_for(&e, CONSENT_FIELD) {
                toast.show_destructive("Consent Required", message);
            }
            set_errors.set(e.into_iter().filter(|err| err.field != CONSENT_FIELD).collect());
            return;
        }
        set_errors.set(Vec::new());
        log::info!("consent submitted for candidate '{}'", id.get_untracked());

        task.start(move |state| match state {
            DeferredState::Completed => {
                set_submitted.set(true);
                toast.show(
                    "Consent Received",
                    "Your background check has been initiated successfully.",
                );
            }
            _ => toast.show_destructive("Submission timed out", "Please try again."),
        });
    };

    move || {
        if submitted.get() {
            return view! { <ConsentReceived id=id.get_untracked() /> }.into_any();
        }

        view! {
            <div class="page page--tinted">
                <main class="container container--narrow">
                    <div class="page-intro">
                        <Logo class="logo--centered" />
                        <h1>"Background Check Consent"</h1>
                        <p class="text-muted">{CandidateConsent::description()}</p>
                    </div>

                    <Card class="consent-card">
                        <div class="card-header">
                            <h2 class="card-title">{icon("shield")}"Candidate Information & Consent"</h2>
                            <p class="card-description">
                                "All information is encrypted and handled in compliance with FCRA regulations"
                            </p>
                        </div>
                        <form class="form" on:submit=on_submit>
                            <div class="form__row">
                                <Input
                                    id="full_name"
                                    label="Full Legal Name"
                                    label_icon="user"
                                    placeholder="Enter your full legal name"
                                    required=true
                                    value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                                    on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
                                    error=field_error(errors, "full_name")
                                />
                                <Input
                                    id="date_of_birth"
                                    label="Date of Birth"
                                    label_icon="calendar"
                                    input_type="date"
                                    required=true
                                    value=Signal::derive(move || to_input_date(form.with(|f| f.date_of_birth)))
                                    on_input=Callback::new(move |v: String| {
                                        form.update(|f| f.date_of_birth = parse_input_date(&v))
                                    })
                                    error=field_error(errors, "date_of_birth")
                                />
                            </div>
                            <Input
                                id="ssn_last4"
                                label="Social Security Number (Last 4 digits)"
                                label_icon="credit-card"
                                placeholder="XXXX"
                                max_length=4u32
                                required=true
                                value=Signal::derive(move || form.with(|f| f.ssn_last4.clone()))
                                on_input=Callback::new(move |v| form.update(|f| f.ssn_last4 = v))
                                error=field_error(errors, "ssn_last4")
                            />

                            <div class="consent-box">
                                <h3>"Background Check Authorization"</h3>
                                <p class="text-muted">{AUTHORIZATION_TEXT}</p>
                                <Checkbox
                                    id="consent"
                                    label="I hereby authorize and consent to the background check described above."
                                    required=true
                                    checked=Signal::derive(move || form.with(|f| f.consent))
                                    on_change=Callback::new(move |on| form.update(|f| f.consent = on))
                                />
                            </div>

                            <Button
                                button_type="submit"
                                full_width=true
                                disabled=Signal::derive(move || task.is_running())
                            >
                                {move || if task.is_running() {
                                    view! { <Spinner size=SpinnerSize::Tiny /> "Processing..." }.into_any()
                                } else {
                                    view! { "Submit Consent & Start Background Check" }.into_any()
                                }}
                            </Button>
                        </form>
                    </Card>

                    <p class="page-footnote">
                        "Questions? Contact your employer's HR department for assistance."
                    </p>
                </main>
            </div>
        }
        .into_any()
    }
}

#[component]
fn ConsentReceived(id: String) -> impl IntoView {
    let navigate = use_navigate();
    let portal_href = format!("/candidate-portal/{}", id);

    view! {
        <div class="page page--tinted page--centered">
            <Card class="confirmation-card">
                <div class="confirmation-card__icon">{icon("check-circle")}</div>
                <h1>"Consent Received!"</h1>
                <p class="text-muted">
                    "Thank you for providing your consent. Your background check is now being processed. \
                     You'll receive an email notification once it's complete."
                </p>
                <div class="next-steps">
                    <p><strong>"What happens next:"</strong></p>
                    <ul class="bullet-list">
                        <li>"Identity verification (1-2 business days)"</li>
                        <li>"Criminal record check (2-3 business days)"</li>
                        <li>"Employment & education verification (3-5 business days)"</li>
                    </ul>
                </div>
                <Button
                    full_width=true
                    on_click=Callback::new(move |_| navigate(&portal_href, Default::default()))
                >
                    "View Your Portal"
                </Button>
            </Card>
        </div>
    }
}
