pub mod header;

pub use header::{BackHeader, Header};
