use crate::enums::CandidateStatus;

/// Progress-bar percentage shown on the employer dashboard
pub fn progress_percent(status: CandidateStatus) -> u8 {
    match status {
        CandidateStatus::Pending => 25,
        CandidateStatus::InProgress => 60,
        CandidateStatus::Review => 85,
        CandidateStatus::Clear | CandidateStatus::Rejected => 100,
    }
}

/// Same as [`progress_percent`] for a raw code; unknown codes map to 0
pub fn progress_percent_code(code: &str) -> u8 {
    CandidateStatus::from_code(code).map_or(0, progress_percent)
}

/// Coarser scale shown to the candidate in their own portal
pub fn portal_progress_percent(status: CandidateStatus) -> u8 {
    match status {
        CandidateStatus::Pending => 25,
        CandidateStatus::InProgress => 75,
        CandidateStatus::Clear | CandidateStatus::Review | CandidateStatus::Rejected => 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_scale() {
        assert_eq!(progress_percent(CandidateStatus::Pending), 25);
        assert_eq!(progress_percent(CandidateStatus::InProgress), 60);
        assert_eq!(progress_percent(CandidateStatus::Review), 85);
        assert_eq!(progress_percent(CandidateStatus::Clear), 100);
        assert_eq!(progress_percent(CandidateStatus::Rejected), 100);
    }

    #[test]
    fn test_unknown_code_is_zero() {
        assert_eq!(progress_percent_code("clear"), 100);
        assert_eq!(progress_percent_code("unknown-value"), 0);
        assert_eq!(progress_percent_code(""), 0);
    }

    #[test]
    fn test_portal_scale() {
        assert_eq!(portal_progress_percent(CandidateStatus::InProgress), 75);
        assert_eq!(portal_progress_percent(CandidateStatus::Review), 100);
    }

    #[test]
    fn test_always_within_bounds() {
        for status in CandidateStatus::all() {
            assert!(progress_percent(status) <= 100);
            assert!(portal_progress_percent(status) <= 100);
        }
    }
}
