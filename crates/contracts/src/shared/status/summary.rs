use super::classify::{classify_category, CategoryClass};
use crate::domain::a001_candidate::Candidate;
use crate::enums::{CandidateStatus, Category};

/// Counters shown in the dashboard stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub cleared: usize,
    pub need_review: usize,
    /// Pending and in-progress together
    pub in_progress: usize,
}

impl StatusSummary {
    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        candidates.iter().fold(
            Self {
                total: candidates.len(),
                ..Self::default()
            },
            |mut acc, c| {
                match c.status {
                    CandidateStatus::Clear => acc.cleared += 1,
                    CandidateStatus::Review => acc.need_review += 1,
                    CandidateStatus::Pending | CandidateStatus::InProgress => acc.in_progress += 1,
                    CandidateStatus::Rejected => {}
                }
                acc
            },
        )
    }
}

/// One cell per category, from the report attached to the candidate itself
pub fn section_strip(candidate: &Candidate) -> Vec<(Category, CategoryClass)> {
    Category::all()
        .into_iter()
        .map(|category| {
            let value = candidate.report_data.as_ref().map(|r| r.value_of(category));
            (category, classify_category(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_candidate::seed::initial_candidates;
    use crate::shared::status::Tier;

    #[test]
    fn test_summary_of_seed() {
        let summary = StatusSummary::from_candidates(&initial_candidates());
        assert_eq!(
            summary,
            StatusSummary {
                total: 4,
                cleared: 1,
                need_review: 1,
                in_progress: 2,
            }
        );
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(StatusSummary::from_candidates(&[]), StatusSummary::default());
    }

    #[test]
    fn test_strip_without_report_is_all_pending() {
        let seeds = initial_candidates();
        let pending = seeds.iter().find(|c| c.id.as_str() == "3").unwrap();
        let strip = section_strip(pending);
        assert_eq!(strip.len(), 6);
        assert!(strip.iter().all(|(_, class)| class.tier == Tier::Pending));
    }

    #[test]
    fn test_strip_follows_attached_report() {
        let seeds = initial_candidates();
        let review = seeds.iter().find(|c| c.id.as_str() == "2").unwrap();
        let tiers: Vec<Tier> = section_strip(review).iter().map(|(_, c)| c.tier).collect();
        // ID, EMP, CRIM, EDU, SOC, WEB
        assert_eq!(
            tiers,
            vec![
                Tier::Success,
                Tier::Warning,
                Tier::Success,
                Tier::Warning,
                Tier::Warning,
                Tier::Success,
            ]
        );
    }
}
