pub mod view;

pub use view::SubmitCandidatePage;
