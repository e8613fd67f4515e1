pub mod aggregate;
pub mod registry;
pub mod seed;

pub use aggregate::{Candidate, CandidateId};
pub use registry::CandidateRegistry;
