pub mod context;

pub use context::{provide_auth, sign_in, sign_out, use_auth, AuthState};
