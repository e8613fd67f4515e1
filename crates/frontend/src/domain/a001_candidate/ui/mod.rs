pub mod form;
pub mod list;
pub mod not_found;
pub mod portal;
