pub mod d400_candidate_dashboard;

pub use d400_candidate_dashboard::ui::CandidateDashboard;
