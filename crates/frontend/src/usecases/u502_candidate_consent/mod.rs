pub mod view;

pub use view::CandidateConsentPage;
