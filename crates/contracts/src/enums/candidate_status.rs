use serde::{Deserialize, Serialize};

/// Overall screening status of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStatus {
    Pending,
    InProgress,
    Clear,
    Review,
    Rejected,
}

impl CandidateStatus {
    /// Wire code, as used in the JSON data and CSS modifiers
    pub fn code(&self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::InProgress => "in-progress",
            CandidateStatus::Clear => "clear",
            CandidateStatus::Review => "review",
            CandidateStatus::Rejected => "rejected",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            CandidateStatus::Pending => "Pending",
            CandidateStatus::InProgress => "In Progress",
            CandidateStatus::Clear => "Clear",
            CandidateStatus::Review => "Review",
            CandidateStatus::Rejected => "Rejected",
        }
    }

    /// A terminal status is one after which the check is complete
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CandidateStatus::Clear | CandidateStatus::Review | CandidateStatus::Rejected
        )
    }

    pub fn all() -> [CandidateStatus; 5] {
        [
            CandidateStatus::Pending,
            CandidateStatus::InProgress,
            CandidateStatus::Clear,
            CandidateStatus::Review,
            CandidateStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(CandidateStatus::Pending),
            "in-progress" => Some(CandidateStatus::InProgress),
            "clear" => Some(CandidateStatus::Clear),
            "review" => Some(CandidateStatus::Review),
            "rejected" => Some(CandidateStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip_through_from_code() {
        for status in CandidateStatus::all() {
            assert_eq!(CandidateStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(CandidateStatus::from_code("In Progress"), None);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&CandidateStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!CandidateStatus::Pending.is_terminal());
        assert!(!CandidateStatus::InProgress.is_terminal());
        assert!(CandidateStatus::Clear.is_terminal());
        assert!(CandidateStatus::Rejected.is_terminal());
    }
}
