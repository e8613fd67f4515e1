pub mod global_context;
pub mod header;
pub mod modal_service;
pub mod toast;
