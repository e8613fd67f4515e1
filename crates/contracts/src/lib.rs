//! Domain model of the Snapshot background-check demo.
//!
//! Pure data and derivation logic shared by the UI: candidates and their
//! registry, the mock report table, status classification, progress
//! estimation, form validation and simulated-operation state.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
pub mod usecases;
