use super::aggregate::{Candidate, CandidateId};
use super::seed::initial_candidates;
use crate::domain::common::AggregateId;
use crate::shared::status::StatusSummary;
use chrono::NaiveDate;

/// In-memory, session-scoped candidate collection.
///
/// Newest candidates come first. Records are never updated or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRegistry {
    items: Vec<Candidate>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the sample candidates
    pub fn seeded() -> Self {
        Self {
            items: initial_candidates(),
        }
    }

    pub fn list(&self) -> &[Candidate] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Candidate> {
        self.items.iter().find(|c| c.id.as_str() == id)
    }

    /// Find by an id taken from a route; surrounding whitespace is ignored
    /// and a blank id matches nothing.
    pub fn lookup(&self, raw_id: &str) -> Option<&Candidate> {
        let id = CandidateId::from_string(raw_id).ok()?;
        self.find(id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Add a pending candidate dated today with a timestamp-derived id
    pub fn add(&mut self, name: &str, email: &str) -> Candidate {
        let today = chrono::Local::now().date_naive();
        let now_millis = chrono::Utc::now().timestamp_millis();
        self.add_on(name, email, today, now_millis)
    }

    /// Deterministic variant of [`add`](Self::add).
    ///
    /// `now_millis` seeds the id; it is bumped until it does not collide with
    /// an existing candidate.
    pub fn add_on(&mut self, name: &str, email: &str, today: NaiveDate, now_millis: i64) -> Candidate {
        let id = self.next_id(now_millis);
        let candidate = Candidate::new_pending(id, name.to_string(), email.to_string(), today);
        self.items.insert(0, candidate.clone());
        candidate
    }

    pub fn status_summary(&self) -> StatusSummary {
        StatusSummary::from_candidates(&self.items)
    }

    fn next_id(&self, seed: i64) -> CandidateId {
        let mut value = seed;
        loop {
            let candidate = value.to_string();
            if !self.contains(&candidate) {
                return CandidateId::new(candidate);
            }
            value += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CandidateStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_find_returns_seed_by_id() {
        let registry = CandidateRegistry::seeded();
        for id in ["1", "2", "3", "4"] {
            let found = registry.find(id).expect("seed candidate");
            assert_eq!(found.id.as_str(), id);
        }
    }

    #[test]
    fn test_find_unknown_is_none() {
        let registry = CandidateRegistry::seeded();
        assert!(registry.find("5").is_none());
        assert!(registry.find("").is_none());
        assert!(registry.find("1 ").is_none());
    }

    #[test]
    fn test_lookup_trims_route_ids() {
        let registry = CandidateRegistry::seeded();
        assert_eq!(registry.lookup(" 2 ").map(|c| c.id.as_str()), Some("2"));
        assert!(registry.lookup("   ").is_none());
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn test_add_prepends_pending_candidate() {
        let mut registry = CandidateRegistry::seeded();
        let before = registry.len();

        let added = registry.add_on("Jane Roe", "jane@x.com", today(), 1_709_251_200_000);

        assert_eq!(registry.len(), before + 1);
        assert_eq!(added.status, CandidateStatus::Pending);
        assert_eq!(added.date_added, today());
        assert!(added.date_completed.is_none());
        assert!(added.report_data.is_none());
        assert_eq!(added.id.as_str(), "1709251200000");
        assert_eq!(registry.list()[0], added);
        assert_eq!(registry.find("1709251200000"), Some(&added));
    }

    #[test]
    fn test_add_uses_current_date() {
        let mut registry = CandidateRegistry::new();
        let added = registry.add("Jane Roe", "jane@x.com");
        assert_eq!(added.date_added, chrono::Local::now().date_naive());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let mut registry = CandidateRegistry::new();
        let a = registry.add_on("A", "a@x.com", today(), 100);
        let b = registry.add_on("B", "b@x.com", today(), 100);
        let c = registry.add_on("C", "c@x.com", today(), 100);
        assert_eq!(a.id.as_str(), "100");
        assert_eq!(b.id.as_str(), "101");
        assert_eq!(c.id.as_str(), "102");
        let names: Vec<&str> = registry.list().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_generated_id_skips_seed_ids() {
        let mut registry = CandidateRegistry::seeded();
        let added = registry.add_on("Z", "z@x.com", today(), 1);
        assert_eq!(added.id.as_str(), "5");
    }

    #[test]
    fn test_status_summary_follows_additions() {
        let mut registry = CandidateRegistry::seeded();
        assert_eq!(registry.status_summary().in_progress, 2);
        registry.add_on("New", "new@x.com", today(), 10);
        let summary = registry.status_summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.in_progress, 3);
    }
}
