pub mod request;

pub use request::{ConsentForm, CONSENT_FIELD};

use crate::usecases::common::UseCaseMetadata;

pub struct CandidateConsent;

impl UseCaseMetadata for CandidateConsent {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "candidate_consent"
    }

    fn display_name() -> &'static str {
        "Background Check Authorization"
    }

    fn description() -> &'static str {
        "Please provide your information and consent to begin the verification process"
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::validation::message_for;
    use crate::usecases::common::UseCaseMetadata;
    use crate::usecases::u502_candidate_consent::{CandidateConsent, ConsentForm, CONSENT_FIELD};
    use chrono::NaiveDate;

    #[test]
    fn test_missing_consent_is_reported_under_public_field_key() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let errors = ConsentForm::default().validate(today).unwrap_err();
        assert_eq!(
            message_for(&errors, CONSENT_FIELD),
            Some("You must provide consent to proceed with the background check.")
        );
    }

    #[test]
    fn test_metadata_full_name() {
        assert_eq!(CandidateConsent::full_name(), "u502_candidate_consent");
    }
}
