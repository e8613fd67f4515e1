use contracts::domain::a001_candidate::{Candidate, CandidateRegistry};
use contracts::shared::status::StatusSummary;
use leptos::prelude::*;

/// Session-scoped candidate registry shared through context.
///
/// Created once in `App` from the seed set; pages read and extend it
/// through this handle instead of owning their own copy.
#[derive(Clone, Copy)]
pub struct CandidateStore {
    registry: RwSignal<CandidateRegistry>,
}

impl CandidateStore {
    pub fn new(registry: CandidateRegistry) -> Self {
        Self {
            registry: RwSignal::new(registry),
        }
    }

    pub fn seeded() -> Self {
        Self::new(CandidateRegistry::seeded())
    }

    /// Reactive snapshot, newest first
    pub fn list(&self) -> Vec<Candidate> {
        self.registry.with(|r| r.list().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.registry.with(|r| r.is_empty())
    }

    /// Candidate for a route id, if any
    pub fn find(&self, id: &str) -> Option<Candidate> {
        self.registry.with(|r| r.lookup(id).cloned())
    }

    pub fn summary(&self) -> StatusSummary {
        self.registry.with(|r| r.status_summary())
    }

    /// Prepend a pending candidate. Inputs are expected to be trimmed.
    ///
    /// `None` only if the store has already been disposed.
    pub fn add(&self, name: &str, email: &str) -> Option<Candidate> {
        let candidate = self.registry.try_update(|r| r.add(name, email))?;
        log::info!(
            "candidate {} added: {} <{}>",
            candidate.id,
            candidate.name,
            candidate.email
        );
        Some(candidate)
    }
}

pub fn use_candidate_store() -> CandidateStore {
    use_context::<CandidateStore>().expect("CandidateStore not found")
}
