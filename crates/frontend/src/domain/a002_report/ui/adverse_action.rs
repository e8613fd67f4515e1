use crate::layout::modal_service::{use_modal, Modal};
use crate::layout::toast::use_toast;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::a001_candidate::Candidate;
use leptos::prelude::*;

/// Email body of the pre-adverse action notice
pub fn notice_text(candidate_name: &str) -> String {
    format!(
        "Dear {}, we have completed your background check and identified some concerns. \
         You have 3 business days to review and dispute any findings. \
         Please contact us if you have questions.",
        candidate_name
    )
}

/// Confirmation dialog for sending a pre-adverse action notice
#[component]
#[allow(non_snake_case)]
pub fn AdverseActionModal(candidate: Candidate) -> impl IntoView {
    let modal = use_modal();
    let toast = use_toast();
    let preview = notice_text(&candidate.name);
    let email = candidate.email.clone();
    let id = candidate.id.clone();

    let on_cancel = Callback::new(move |_| modal.hide());
    let on_send = Callback::new(move |_| {
        log::info!("pre-adverse notice sent for candidate {}", id);
        toast.show(
            "Pre-Adverse Notice Sent",
            format!("Email sent to {}. Candidate has 3 days to respond.", email),
        );
        modal.hide();
    });

    view! {
        <Modal>
            <div class="card-header">
                <h2 class="card-title">{icon("alert-triangle")}"Adverse Action Notice"</h2>
                <p class="card-description">
                    "This will send a pre-adverse action notice to the candidate"
                </p>
            </div>
            <div class="notice-preview">
                <p class="notice-preview__label">"Email Preview:"</p>
                <p class="text-muted">{format!("\"{}\"", preview)}</p>
            </div>
            <div class="modal-actions">
                <Button variant="secondary" on_click=on_cancel>"Cancel"</Button>
                <Button variant="destructive" on_click=on_send>"Send Notice"</Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_addresses_candidate() {
        let text = notice_text("Jane Smith");
        assert!(text.starts_with("Dear Jane Smith,"));
        assert!(text.contains("3 business days"));
    }
}
