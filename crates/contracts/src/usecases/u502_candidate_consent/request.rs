use crate::shared::validation::{ValidationResult, Validator};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field key of the consent checkbox; the UI raises a toast instead of an inline message
pub const CONSENT_FIELD: &str = "consent";

/// Information and authorization the candidate provides before checks start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentForm {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Last four digits only
    pub ssn_last4: String,
    pub consent: bool,
}

impl ConsentForm {
    pub fn validate(&self, today: NaiveDate) -> ValidationResult {
        let ssn = self.ssn_last4.trim();
        let mut v = Validator::new();
        v.check(
            CONSENT_FIELD,
            self.consent,
            "You must provide consent to proceed with the background check.",
        )
        .required("full_name", &self.full_name, "Full legal name is required")
        .check(
            "date_of_birth",
            self.date_of_birth.is_some(),
            "Date of birth is required",
        )
        .check(
            "date_of_birth",
            self.date_of_birth.map_or(true, |d| d <= today),
            "Date of birth cannot be in the future",
        )
        .check(
            "ssn_last4",
            ssn.len() == 4 && ssn.chars().all(|c| c.is_ascii_digit()),
            "Enter the last 4 digits of your Social Security Number",
        );
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::message_for;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn filled() -> ConsentForm {
        ConsentForm {
            full_name: "Alex Johnson".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 8, 14),
            ssn_last4: "1234".into(),
            consent: true,
        }
    }

    #[test]
    fn test_valid_consent() {
        assert!(filled().validate(today()).is_ok());
    }

    #[test]
    fn test_missing_consent_is_reported() {
        let mut form = filled();
        form.consent = false;
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(message_for(&errors, CONSENT_FIELD).is_some());
    }

    #[test]
    fn test_ssn_must_be_four_digits() {
        for bad in ["", "123", "12345", "12a4"] {
            let mut form = filled();
            form.ssn_last4 = bad.into();
            let errors = form.validate(today()).unwrap_err();
            assert!(message_for(&errors, "ssn_last4").is_some(), "{:?}", bad);
        }
    }
}
