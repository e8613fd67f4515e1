pub mod adverse_action;
pub mod category;
pub mod details;
