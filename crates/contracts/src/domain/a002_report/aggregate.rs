use crate::enums::{Category, CategoryValue};
use serde::{Deserialize, Serialize};

// ============================================================================
// Category outcomes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityStatus {
    Verified,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriminalStatus {
    Clear,
    Review,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationStatus {
    Verified,
    Unverified,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    Verified,
    Partial,
    Pending,
}

/// Outcome of a screening-style check (social media, online presence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreeningStatus {
    Clear,
    Review,
    Pending,
}

impl From<IdentityStatus> for CategoryValue {
    fn from(s: IdentityStatus) -> Self {
        match s {
            IdentityStatus::Verified => CategoryValue::Verified,
            IdentityStatus::Pending => CategoryValue::Pending,
            IdentityStatus::Failed => CategoryValue::Failed,
        }
    }
}

impl From<CriminalStatus> for CategoryValue {
    fn from(s: CriminalStatus) -> Self {
        match s {
            CriminalStatus::Clear => CategoryValue::Clear,
            CriminalStatus::Review => CategoryValue::Review,
            CriminalStatus::Pending => CategoryValue::Pending,
        }
    }
}

impl From<EducationStatus> for CategoryValue {
    fn from(s: EducationStatus) -> Self {
        match s {
            EducationStatus::Verified => CategoryValue::Verified,
            EducationStatus::Unverified => CategoryValue::Unverified,
            EducationStatus::Pending => CategoryValue::Pending,
        }
    }
}

impl From<EmploymentStatus> for CategoryValue {
    fn from(s: EmploymentStatus) -> Self {
        match s {
            EmploymentStatus::Verified => CategoryValue::Verified,
            EmploymentStatus::Partial => CategoryValue::Partial,
            EmploymentStatus::Pending => CategoryValue::Pending,
        }
    }
}

impl From<ScreeningStatus> for CategoryValue {
    fn from(s: ScreeningStatus) -> Self {
        match s {
            ScreeningStatus::Clear => CategoryValue::Clear,
            ScreeningStatus::Review => CategoryValue::Review,
            ScreeningStatus::Pending => CategoryValue::Pending,
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Per-category verification outcomes plus a narrative summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub identity: IdentityStatus,
    pub criminal: CriminalStatus,
    pub education: EducationStatus,
    pub employment: EmploymentStatus,
    pub social_media: ScreeningStatus,
    pub online_presence: ScreeningStatus,
    pub summary: String,
}

impl ReportData {
    /// Report with every category still pending
    pub fn all_pending(summary: impl Into<String>) -> Self {
        Self {
            identity: IdentityStatus::Pending,
            criminal: CriminalStatus::Pending,
            education: EducationStatus::Pending,
            employment: EmploymentStatus::Pending,
            social_media: ScreeningStatus::Pending,
            online_presence: ScreeningStatus::Pending,
            summary: summary.into(),
        }
    }

    pub fn value_of(&self, category: Category) -> CategoryValue {
        match category {
            Category::Identity => self.identity.into(),
            Category::Employment => self.employment.into(),
            Category::Criminal => self.criminal.into(),
            Category::Education => self.education.into(),
            Category::SocialMedia => self.social_media.into(),
            Category::OnlinePresence => self.online_presence.into(),
        }
    }

    pub fn is_all_pending(&self) -> bool {
        Category::all()
            .into_iter()
            .all(|c| self.value_of(c) == CategoryValue::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_maps_each_field() {
        let report = ReportData {
            identity: IdentityStatus::Failed,
            criminal: CriminalStatus::Review,
            education: EducationStatus::Unverified,
            employment: EmploymentStatus::Partial,
            social_media: ScreeningStatus::Clear,
            online_presence: ScreeningStatus::Pending,
            summary: String::new(),
        };
        assert_eq!(report.value_of(Category::Identity), CategoryValue::Failed);
        assert_eq!(report.value_of(Category::Criminal), CategoryValue::Review);
        assert_eq!(report.value_of(Category::Education), CategoryValue::Unverified);
        assert_eq!(report.value_of(Category::Employment), CategoryValue::Partial);
        assert_eq!(report.value_of(Category::SocialMedia), CategoryValue::Clear);
        assert_eq!(report.value_of(Category::OnlinePresence), CategoryValue::Pending);
        assert!(!report.is_all_pending());
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{
            "identity": "verified",
            "criminal": "clear",
            "education": "pending",
            "employment": "partial",
            "socialMedia": "review",
            "onlinePresence": "clear",
            "summary": "ok"
        }"#;
        let report: ReportData = serde_json::from_str(json).unwrap();
        assert_eq!(report.social_media, ScreeningStatus::Review);
        assert_eq!(report.employment, EmploymentStatus::Partial);
    }

    #[test]
    fn test_unknown_category_value_is_rejected() {
        let json = r#"{
            "identity": "maybe",
            "criminal": "clear",
            "education": "pending",
            "employment": "partial",
            "socialMedia": "review",
            "onlinePresence": "clear",
            "summary": ""
        }"#;
        assert!(serde_json::from_str::<ReportData>(json).is_err());
    }
}
