use crate::layout::global_context::use_global_context;
use crate::layout::toast::use_toast;
use crate::shared::components::logo::Logo;
use crate::shared::components::ui::{Button, Input};
use crate::shared::deferred::DeferredTask;
use crate::shared::forms::field_error;
use crate::shared::icons::icon;
use crate::system::auth::{sign_in, use_auth};
use contracts::shared::deferred::{DeferredSpec, DeferredState};
use contracts::shared::validation::FieldError;
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Card, Spinner, SpinnerSize};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());

    let task = DeferredTask::new(
        "login",
        DeferredSpec::new(ctx.login_delay_ms(), ctx.operation_timeout_ms()),
    );
    on_cleanup(move || {
        task.cancel();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = request.validate() {
            set_errors.set(e);
            return;
        }
        set_errors.set(Vec::new());

        let navigate = navigate.clone();
        task.start(move |state| match state {
            DeferredState::Completed => {
                sign_in(auth, &request.email);
                navigate("/dashboard", Default::default());
            }
            _ => toast.show_destructive("Sign-in timed out", "Please try again."),
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__column">
                <div class="auth-page__intro">
                    <Logo class="logo--centered" />
                    <h1>"Welcome back"</h1>
                    <p class="text-muted">"Sign in to your employer dashboard"</p>
                </div>

                <Card class="auth-card">
                    <div class="card-header">
                        <h2 class="card-title">{icon("shield")}"Employer Login"</h2>
                        <p class="card-description">"Access your background check dashboard"</p>
                    </div>
                    <form class="form" on:submit=on_submit>
                        <Input
                            id="email"
                            label="Email Address"
                            label_icon="mail"
                            input_type="email"
                            placeholder="employer@company.com"
                            autocomplete="username"
                            value=email
                            on_input=Callback::new(move |v| set_email.set(v))
                            error=field_error(errors, "email")
                        />
                        <Input
                            id="password"
                            label="Password"
                            label_icon="lock"
                            input_type="password"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            value=password
                            on_input=Callback::new(move |v| set_password.set(v))
                            error=field_error(errors, "password")
                        />
                        <Button
                            button_type="submit"
                            full_width=true
                            disabled=Signal::derive(move || task.is_running())
                        >
                            {move || if task.is_running() {
                                view! { <Spinner size=SpinnerSize::Tiny /> "Signing in..." }.into_any()
                            } else {
                                view! { "Sign In" }.into_any()
                            }}
                        </Button>
                    </form>
                    <p class="auth-card__hint">"Demo: Use any email and password to continue"</p>
                </Card>

                <p class="auth-page__footer">"Secure • Compliant • Fast background checks"</p>
            </div>
        </div>
    }
}
