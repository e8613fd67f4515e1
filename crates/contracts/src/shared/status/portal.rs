//! What the candidate sees about their own check. Findings that still need
//! employer review keep the warning colour but read as pending.

use super::classify::{CategoryClass, Tier};
use crate::enums::{CandidateStatus, Category, CategoryValue};

/// Categories listed in the candidate portal, in display order
pub const PORTAL_CATEGORIES: [Category; 4] = [
    Category::Identity,
    Category::Criminal,
    Category::Education,
    Category::Employment,
];

pub fn classify_portal_category(value: CategoryValue) -> CategoryClass {
    let (tier, label) = match value {
        CategoryValue::Verified => (Tier::Success, "Verified"),
        CategoryValue::Clear => (Tier::Success, "Clear"),
        CategoryValue::Unverified => (Tier::Warning, "In Review"),
        CategoryValue::Partial => (Tier::Warning, "Partial"),
        CategoryValue::Review => (Tier::Warning, "Pending"),
        CategoryValue::Failed | CategoryValue::Pending => (Tier::Pending, "Pending"),
    };
    CategoryClass { tier, label }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalStep {
    pub title: &'static str,
    pub caption: &'static str,
    pub done: bool,
}

/// The four milestones of the portal timeline
pub fn portal_steps(status: CandidateStatus) -> [PortalStep; 4] {
    use CandidateStatus::*;
    [
        PortalStep {
            title: "Consent",
            caption: "Received",
            done: status != Pending,
        },
        PortalStep {
            title: "Processing",
            caption: "In Progress",
            done: matches!(status, InProgress | Clear | Review),
        },
        PortalStep {
            title: "Review",
            caption: "Complete",
            done: matches!(status, Clear | Review),
        },
        PortalStep {
            title: "Final",
            caption: if status == Clear { "Clear" } else { "Pending" },
            done: status == Clear,
        },
    ]
}

/// Results are only shown once consent has been given
pub fn shows_results(status: CandidateStatus) -> bool {
    status != CandidateStatus::Pending
}

/// The narrative summary is only shared once review is finished
pub fn shows_summary(status: CandidateStatus) -> bool {
    matches!(status, CandidateStatus::Clear | CandidateStatus::Review)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_findings_are_masked() {
        let class = classify_portal_category(CategoryValue::Review);
        assert_eq!(class.tier, Tier::Warning);
        assert_eq!(class.label, "Pending");
        assert_eq!(classify_portal_category(CategoryValue::Pending).tier, Tier::Pending);
        assert_eq!(classify_portal_category(CategoryValue::Unverified).label, "In Review");
        assert_eq!(classify_portal_category(CategoryValue::Verified).tier, Tier::Success);
    }

    #[test]
    fn test_steps_for_pending() {
        let steps = portal_steps(CandidateStatus::Pending);
        assert!(steps.iter().all(|s| !s.done));
        assert_eq!(steps[3].caption, "Pending");
    }

    #[test]
    fn test_steps_for_clear() {
        let steps = portal_steps(CandidateStatus::Clear);
        assert!(steps.iter().all(|s| s.done));
        assert_eq!(steps[3].caption, "Clear");
    }

    #[test]
    fn test_steps_for_review_and_rejected() {
        let done: Vec<bool> = portal_steps(CandidateStatus::Review).iter().map(|s| s.done).collect();
        assert_eq!(done, vec![true, true, true, false]);
        let done: Vec<bool> = portal_steps(CandidateStatus::Rejected).iter().map(|s| s.done).collect();
        assert_eq!(done, vec![true, false, false, false]);
    }

    #[test]
    fn test_visibility_rules() {
        assert!(!shows_results(CandidateStatus::Pending));
        assert!(shows_results(CandidateStatus::InProgress));
        assert!(!shows_summary(CandidateStatus::InProgress));
        assert!(shows_summary(CandidateStatus::Review));
    }
}
