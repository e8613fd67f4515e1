use leptos::prelude::*;

/// Demo session. Sign-in only records who signed in; nothing is verified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub email: Option<String>,
}

/// Provide an empty session to the component tree
pub fn provide_auth() {
    provide_context(RwSignal::new(AuthState::default()));
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthState not found in component tree")
}

pub fn sign_in(auth: RwSignal<AuthState>, email: &str) {
    log::info!("signed in as {}", email);
    auth.set(AuthState {
        email: Some(email.trim().to_string()),
    });
}

pub fn sign_out(auth: RwSignal<AuthState>) {
    if let Some(email) = auth.get_untracked().email {
        log::info!("signed out {}", email);
    }
    auth.set(AuthState::default());
}
