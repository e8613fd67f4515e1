pub mod request;

pub use request::{CheckKind, CheckOffering, SubmissionForm, CHECK_CATALOG};

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitCandidate;

impl UseCaseMetadata for SubmitCandidate {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "submit_candidate"
    }

    fn display_name() -> &'static str {
        "Submit Candidate"
    }

    fn description() -> &'static str {
        "Provide candidate information and select the checks you'd like to perform"
    }
}
