pub mod store;
pub mod ui;

pub use store::{use_candidate_store, CandidateStore};
