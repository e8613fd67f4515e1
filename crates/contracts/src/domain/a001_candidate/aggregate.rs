use crate::domain::a002_report::ReportData;
use crate::domain::common::AggregateId;
use crate::enums::CandidateStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Candidate identifier: a fixed seed value or a millisecond timestamp
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for CandidateId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Candidate id cannot be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A person undergoing a background check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub status: CandidateStatus,
    pub date_added: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_data: Option<ReportData>,
}

impl Candidate {
    /// Freshly submitted candidate: pending, no completion date, no report
    pub fn new_pending(id: CandidateId, name: String, email: String, date_added: NaiveDate) -> Self {
        Self {
            id,
            name,
            email,
            status: CandidateStatus::Pending,
            date_added,
            date_completed: None,
            report_data: None,
        }
    }

    /// Uppercase first letter of every word of the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Candidate name cannot be empty".into());
        }
        if self.email.trim().is_empty() {
            return Err("Candidate email cannot be empty".into());
        }
        if let Some(completed) = self.date_completed {
            if completed < self.date_added {
                return Err(format!(
                    "Completion date {} is earlier than date added {}",
                    completed, self.date_added
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Candidate {
        Candidate::new_pending(
            CandidateId::new("7"),
            "Mary Ann Lee".into(),
            "mary@example.com".into(),
            date(2024, 2, 1),
        )
    }

    #[test]
    fn test_initials() {
        assert_eq!(sample().initials(), "MAL");
        let mut c = sample();
        c.name = "  jane   roe ".into();
        assert_eq!(c.initials(), "JR");
    }

    #[test]
    fn test_validate_rejects_completion_before_added() {
        let mut c = sample();
        assert!(c.validate().is_ok());
        c.date_completed = Some(date(2024, 1, 31));
        assert!(c.validate().is_err());
        c.date_completed = Some(date(2024, 2, 1));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_name_and_email() {
        let mut c = sample();
        c.name = "   ".into();
        assert!(c.validate().is_err());
        let mut c = sample();
        c.email = String::new();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_candidate_id_from_string() {
        assert_eq!(CandidateId::from_string(" 12 ").unwrap().as_str(), "12");
        assert!(CandidateId::from_string("  ").is_err());
    }

    #[test]
    fn test_serializes_with_camel_case_and_optional_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["dateAdded"], "2024-02-01");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["id"], "7");
        assert!(json.get("dateCompleted").is_none());
        assert!(json.get("reportData").is_none());
    }
}
