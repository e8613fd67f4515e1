use super::aggregate::{Candidate, CandidateId};
use crate::domain::a002_report::{
    CriminalStatus, EducationStatus, EmploymentStatus, IdentityStatus, ReportData, ScreeningStatus,
};
use crate::enums::CandidateStatus;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Sample candidates every session starts with
pub fn initial_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: CandidateId::new("1"),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            status: CandidateStatus::Clear,
            date_added: date(2024, 1, 15),
            date_completed: Some(date(2024, 1, 18)),
            report_data: Some(ReportData {
                identity: IdentityStatus::Verified,
                criminal: CriminalStatus::Clear,
                education: EducationStatus::Verified,
                employment: EmploymentStatus::Verified,
                social_media: ScreeningStatus::Clear,
                online_presence: ScreeningStatus::Clear,
                summary: "Candidate has a clean record with all verifications complete. \
                          Highly recommended for hiring."
                    .into(),
            }),
        },
        Candidate {
            id: CandidateId::new("2"),
            name: "Jane Smith".into(),
            email: "jane.smith@example.com".into(),
            status: CandidateStatus::Review,
            date_added: date(2024, 1, 20),
            date_completed: Some(date(2024, 1, 23)),
            report_data: Some(ReportData {
                identity: IdentityStatus::Verified,
                criminal: CriminalStatus::Clear,
                education: EducationStatus::Unverified,
                employment: EmploymentStatus::Partial,
                social_media: ScreeningStatus::Review,
                online_presence: ScreeningStatus::Clear,
                summary: "Candidate has a clean criminal record and verified employment \
                          history. One education record pending verification from university \
                          registrar."
                    .into(),
            }),
        },
        Candidate::new_pending(
            CandidateId::new("3"),
            "Alex Johnson".into(),
            "alex.johnson@example.com".into(),
            date(2024, 1, 25),
        ),
        Candidate {
            status: CandidateStatus::InProgress,
            ..Candidate::new_pending(
                CandidateId::new("4"),
                "Maria Garcia".into(),
                "maria.garcia@example.com".into(),
                date(2024, 1, 24),
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_candidates_are_valid() {
        for candidate in initial_candidates() {
            assert!(candidate.validate().is_ok(), "{:?}", candidate.id);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let seeds = initial_candidates();
        let ids: HashSet<_> = seeds.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), seeds.len());
    }

    #[test]
    fn test_only_completed_candidates_carry_reports() {
        for candidate in initial_candidates() {
            assert_eq!(candidate.report_data.is_some(), candidate.status.is_terminal());
            assert_eq!(candidate.date_completed.is_some(), candidate.status.is_terminal());
        }
    }
}
