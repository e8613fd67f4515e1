use leptos::prelude::*;

/// Single-slot modal visibility shared through context
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    /// Reactive
    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Overlay dialog driven by [`ModalService`].
///
/// ```rust,ignore
/// let modal = use_modal();
/// modal.show();
///
/// view! {
///     <Modal>
///         <AdverseActionNotice />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_modal();

    view! {
        <Show when=move || modal.is_open()>
            <div class="modal-overlay" on:click=move |_| modal.hide()>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=|e| e.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
