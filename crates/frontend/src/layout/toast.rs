use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Transient notifications, dismissed automatically after the configured
/// duration or manually by the user.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            duration_ms,
        }
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Default);
    }

    pub fn show_destructive(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Destructive);
    }

    fn push(&self, title: String, description: String, variant: ToastVariant) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        log::info!("toast: {} ({})", title, description);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title,
                description,
                variant,
            })
        });

        let toasts = self.toasts;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            let _ = toasts.try_update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found")
}

/// Renders the active toasts in the corner of the viewport
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    view! {
        <div class="toast-viewport" aria-live="polite">
            <For
                each=move || toast.toasts()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast__body">
                                <div class="toast__title">{t.title}</div>
                                <div class="toast__description">{t.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toast.dismiss(id)
                            >
                                {icon("close")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
