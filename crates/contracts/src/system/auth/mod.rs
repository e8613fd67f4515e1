use crate::shared::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};

/// Employer sign-in. Any non-blank credentials are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> ValidationResult {
        let mut v = Validator::new();
        v.required("email", &self.email, "Email is required")
            .required("password", &self.password, "Password is required");
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_credentials_are_accepted() {
        let request = LoginRequest {
            email: "anyone".into(),
            password: "x".into(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_credentials_are_rejected() {
        let errors = LoginRequest {
            email: "  ".into(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
