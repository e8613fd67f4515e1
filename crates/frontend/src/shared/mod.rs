pub mod components;
pub mod config;
pub mod date_utils;
pub mod deferred;
pub mod forms;
pub mod icons;
pub mod route_params;
