pub mod a001_candidate;
pub mod a002_report;
pub mod common;
