use crate::enums::{CandidateStatus, CategoryValue};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category values
// ---------------------------------------------------------------------------

/// Three-level severity used to colour any category value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Success,
    Warning,
    Pending,
}

impl Tier {
    pub fn code(&self) -> &'static str {
        match self {
            Tier::Success => "success",
            Tier::Warning => "warning",
            Tier::Pending => "pending",
        }
    }

    /// Label used by the compact progress strip
    pub fn strip_label(&self) -> &'static str {
        match self {
            Tier::Success => "Clear",
            Tier::Warning => "Review",
            Tier::Pending => "Pending",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tier::Success => "check-circle",
            Tier::Warning => "alert-triangle",
            Tier::Pending => "clock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryClass {
    pub tier: Tier,
    pub label: &'static str,
}

/// Classify a category value; a missing value is pending.
pub fn classify_category(value: Option<CategoryValue>) -> CategoryClass {
    let Some(value) = value else {
        return CategoryClass {
            tier: Tier::Pending,
            label: CategoryValue::Pending.label(),
        };
    };
    let tier = match value {
        CategoryValue::Verified | CategoryValue::Clear => Tier::Success,
        CategoryValue::Review
        | CategoryValue::Unverified
        | CategoryValue::Partial
        | CategoryValue::Failed => Tier::Warning,
        CategoryValue::Pending => Tier::Pending,
    };
    CategoryClass {
        tier,
        label: value.label(),
    }
}

/// Classify a raw category code; unrecognized codes degrade to pending.
pub fn classify_category_code(code: &str) -> CategoryClass {
    classify_category(CategoryValue::from_code(code))
}

// ---------------------------------------------------------------------------
// Overall candidate status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn code(&self) -> &'static str {
        match self {
            Severity::Neutral => "neutral",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadgeSpec {
    pub label: &'static str,
    pub severity: Severity,
    pub icon: &'static str,
    /// In-progress checks are rendered with a pulsing badge
    pub animated: bool,
}

pub fn classify_overall_status(status: CandidateStatus) -> StatusBadgeSpec {
    let (severity, icon, animated) = match status {
        CandidateStatus::Pending => (Severity::Neutral, "clock", false),
        CandidateStatus::InProgress => (Severity::Info, "eye", true),
        CandidateStatus::Clear => (Severity::Success, "check-circle", false),
        CandidateStatus::Review => (Severity::Warning, "alert-triangle", false),
        CandidateStatus::Rejected => (Severity::Danger, "x-circle", false),
    };
    StatusBadgeSpec {
        label: status.display_name(),
        severity,
        icon,
        animated,
    }
}

/// Classify a raw overall status code; unrecognized codes degrade to pending.
pub fn classify_overall_code(code: &str) -> StatusBadgeSpec {
    classify_overall_status(CandidateStatus::from_code(code).unwrap_or(CandidateStatus::Pending))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_values() {
        assert_eq!(classify_category(Some(CategoryValue::Verified)).tier, Tier::Success);
        assert_eq!(classify_category(Some(CategoryValue::Clear)).tier, Tier::Success);
    }

    #[test]
    fn test_warning_values() {
        for value in [
            CategoryValue::Review,
            CategoryValue::Unverified,
            CategoryValue::Partial,
            CategoryValue::Failed,
        ] {
            assert_eq!(classify_category(Some(value)).tier, Tier::Warning, "{:?}", value);
        }
    }

    #[test]
    fn test_missing_and_pending_are_pending() {
        let missing = classify_category(None);
        assert_eq!(missing.tier, Tier::Pending);
        assert_eq!(missing.label, "Pending");
        assert_eq!(classify_category(Some(CategoryValue::Pending)).tier, Tier::Pending);
    }

    #[test]
    fn test_labels_are_capitalized_values() {
        assert_eq!(classify_category(Some(CategoryValue::Unverified)).label, "Unverified");
        assert_eq!(classify_category_code("partial").label, "Partial");
    }

    #[test]
    fn test_unknown_codes_degrade_to_pending() {
        assert_eq!(classify_category_code("").tier, Tier::Pending);
        assert_eq!(classify_category_code("Verified").tier, Tier::Pending);
        assert_eq!(classify_category_code("exploded").label, "Pending");
        assert_eq!(classify_overall_code("archived").severity, Severity::Neutral);
    }

    #[test]
    fn test_overall_status_badges() {
        let expected = [
            (CandidateStatus::Pending, "Pending", Severity::Neutral, false),
            (CandidateStatus::InProgress, "In Progress", Severity::Info, true),
            (CandidateStatus::Clear, "Clear", Severity::Success, false),
            (CandidateStatus::Review, "Review", Severity::Warning, false),
            (CandidateStatus::Rejected, "Rejected", Severity::Danger, false),
        ];
        for (status, label, severity, animated) in expected {
            let spec = classify_overall_status(status);
            assert_eq!(spec.label, label);
            assert_eq!(spec.severity, severity);
            assert_eq!(spec.animated, animated);
        }
    }
}
