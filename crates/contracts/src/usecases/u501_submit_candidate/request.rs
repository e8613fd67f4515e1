use crate::shared::validation::{is_valid_email, ValidationResult, Validator};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchasable background check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    SocialMedia,
    Sanctions,
    SexOffender,
    Education,
    Employment,
    Criminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOffering {
    pub kind: CheckKind,
    pub label: &'static str,
    pub description: &'static str,
    /// Whole US dollars
    pub price: u32,
}

pub const CHECK_CATALOG: [CheckOffering; 6] = [
    CheckOffering {
        kind: CheckKind::SocialMedia,
        label: "Social Media Check",
        description: "Search across major social platforms",
        price: 25,
    },
    CheckOffering {
        kind: CheckKind::Sanctions,
        label: "Sanctions & Watchlists",
        description: "OFAC, Interpol, and other government lists",
        price: 15,
    },
    CheckOffering {
        kind: CheckKind::SexOffender,
        label: "Sex Offender Registry",
        description: "National and state registry search",
        price: 10,
    },
    CheckOffering {
        kind: CheckKind::Education,
        label: "Education Verification",
        description: "Verify degrees and certifications",
        price: 30,
    },
    CheckOffering {
        kind: CheckKind::Employment,
        label: "Employment History",
        description: "Verify previous employment",
        price: 35,
    },
    CheckOffering {
        kind: CheckKind::Criminal,
        label: "Criminal Background Check",
        description: "County and federal criminal records",
        price: 20,
    },
];

impl CheckKind {
    pub fn offering(&self) -> &'static CheckOffering {
        // catalogue is ordered like the enum
        &CHECK_CATALOG[*self as usize]
    }
}

/// Employer-side candidate submission form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub consent: bool,
    /// Selection order is kept
    pub checks: Vec<CheckKind>,
}

impl SubmissionForm {
    pub fn toggle_check(&mut self, kind: CheckKind, selected: bool) {
        let present = self.checks.contains(&kind);
        if selected && !present {
            self.checks.push(kind);
        } else if !selected && present {
            self.checks.retain(|k| *k != kind);
        }
    }

    pub fn is_selected(&self, kind: CheckKind) -> bool {
        self.checks.contains(&kind)
    }

    pub fn total_price(&self) -> u32 {
        self.checks.iter().map(|k| k.offering().price).sum()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    pub fn validate(&self, today: NaiveDate) -> ValidationResult {
        let mut v = Validator::new();
        v.required("first_name", &self.first_name, "First name is required")
            .required("last_name", &self.last_name, "Last name is required")
            .check(
                "email",
                is_valid_email(&self.email),
                "Please enter a valid email address",
            )
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
                "consent",
                self.consent,
                "You must give consent to proceed with background checks",
            )
            .check(
                "checks",
                !self.checks.is_empty(),
                "Please select at least one background check",
            );
        v.finish()
    }

    /// Toast text shown after a successful submission
    pub fn confirmation_message(&self) -> String {
        format!(
            "Processing {} checks for {}",
            self.checks.len(),
            self.full_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::message_for;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn filled() -> SubmissionForm {
        SubmissionForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 4),
            consent: true,
            checks: vec![CheckKind::Criminal],
        }
    }

    #[test]
    fn test_catalogue_matches_enum_order() {
        for offering in CHECK_CATALOG.iter() {
            assert_eq!(offering.kind.offering(), offering);
        }
    }

    #[test]
    fn test_total_price() {
        let mut form = SubmissionForm::default();
        assert_eq!(form.total_price(), 0);
        form.toggle_check(CheckKind::Employment, true);
        form.toggle_check(CheckKind::Criminal, true);
        form.toggle_check(CheckKind::Criminal, true);
        assert_eq!(form.total_price(), 55);
        form.toggle_check(CheckKind::Employment, false);
        assert_eq!(form.total_price(), 20);
        assert_eq!(form.checks, vec![CheckKind::Criminal]);
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(filled().validate(today()).is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = SubmissionForm::default().validate(today()).unwrap_err();
        for field in ["first_name", "last_name", "email", "date_of_birth", "consent", "checks"] {
            assert!(message_for(&errors, field).is_some(), "{}", field);
        }
        assert_eq!(
            message_for(&errors, "checks"),
            Some("Please select at least one background check")
        );
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let mut form = filled();
        form.date_of_birth = NaiveDate::from_ymd_opt(2030, 1, 1);
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(
            message_for(&errors, "date_of_birth"),
            Some("Date of birth cannot be in the future")
        );
    }

    #[test]
    fn test_confirmation_message() {
        let mut form = filled();
        form.toggle_check(CheckKind::SocialMedia, true);
        assert_eq!(form.confirmation_message(), "Processing 2 checks for John Doe");
    }
}
