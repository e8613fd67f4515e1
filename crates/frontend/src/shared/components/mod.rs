pub mod check_progress;
pub mod logo;
pub mod page_header;
pub mod progress_bar;
pub mod stat_card;
pub mod status_badge;
pub mod ui;
