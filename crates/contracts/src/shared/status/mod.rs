//! Status derivation: badge classes, progress percentages and dashboard counters.

pub mod classify;
pub mod portal;
pub mod progress;
pub mod summary;

pub use classify::{
    classify_category, classify_category_code, classify_overall_code, classify_overall_status,
    CategoryClass, Severity, StatusBadgeSpec, Tier,
};
pub use portal::{
    classify_portal_category, portal_steps, shows_results, shows_summary, PortalStep,
    PORTAL_CATEGORIES,
};
pub use progress::{portal_progress_percent, progress_percent, progress_percent_code};
pub use summary::{section_strip, StatusSummary};
