use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

/// Quick "run background check" form: name and email only.
///
/// Emits trimmed values and clears itself; submit stays disabled while
/// either field is blank.
#[component]
#[allow(non_snake_case)]
pub fn CandidateForm(on_submit: Callback<(String, String)>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let is_blank = move || name.with(|n| n.trim().is_empty()) || email.with(|e| e.trim().is_empty());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_blank() {
            return;
        }
        let name_val = name.get_untracked().trim().to_string();
        let email_val = email.get_untracked().trim().to_string();
        set_name.set(String::new());
        set_email.set(String::new());
        on_submit.run((name_val, email_val));
    };

    view! {
        <Card class="candidate-form">
            <div class="card-header">
                <h2 class="card-title">{icon("user-plus")}"Run Background Check"</h2>
                <p class="card-description">
                    "Add a new candidate to start their background verification process."
                </p>
            </div>
            <form class="form" on:submit=submit>
                <Input
                    id="candidate-name"
                    label="Candidate Name"
                    label_icon="user"
                    placeholder="Enter full name"
                    required=true
                    value=name
                    on_input=Callback::new(move |v| set_name.set(v))
                />
                <Input
                    id="candidate-email"
                    label="Email Address"
                    label_icon="mail"
                    input_type="email"
                    placeholder="Enter email address"
                    required=true
                    value=email
                    on_input=Callback::new(move |v| set_email.set(v))
                />
                <Button
                    button_type="submit"
                    full_width=true
                    disabled=Signal::derive(is_blank)
                >
                    "Start Background Check"
                </Button>
            </form>
        </Card>
    }
}
