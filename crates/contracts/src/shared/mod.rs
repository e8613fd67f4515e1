pub mod config;
pub mod deferred;
pub mod status;
pub mod validation;
