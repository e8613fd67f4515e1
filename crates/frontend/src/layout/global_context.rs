use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Application-wide settings, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: RwSignal<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: RwSignal::new(config),
        }
    }

    pub fn organization_name(&self) -> String {
        self.config.with(|c| c.organization_name.clone())
    }

    pub fn organization_email(&self) -> String {
        self.config.with(|c| c.organization_email.clone())
    }

    pub fn login_delay_ms(&self) -> u32 {
        self.config.with_untracked(|c| c.login_delay_ms)
    }

    pub fn consent_delay_ms(&self) -> u32 {
        self.config.with_untracked(|c| c.consent_delay_ms)
    }

    pub fn operation_timeout_ms(&self) -> u32 {
        self.config.with_untracked(|c| c.operation_timeout_ms)
    }

    pub fn toast_duration_ms(&self) -> u32 {
        self.config.with_untracked(|c| c.toast_duration_ms)
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
