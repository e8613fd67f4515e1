pub mod candidate_status;
pub mod category;
pub mod category_value;

pub use candidate_status::CandidateStatus;
pub use category::Category;
pub use category_value::CategoryValue;
