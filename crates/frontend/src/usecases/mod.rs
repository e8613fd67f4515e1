pub mod u501_submit_candidate;
pub mod u502_candidate_consent;
