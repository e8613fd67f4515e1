//! Field-level validation helpers shared by all forms

/// A validation message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult = Result<(), Vec<FieldError>>;

/// Message for `field`, if any
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Collects errors while a form is being checked
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        self.check(field, !value.trim().is_empty(), message)
    }

    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) -> &mut Self {
        if !ok && !self.has(field) {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn finish(self) -> ValidationResult {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email(" john.doe@example.co.uk "));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("jane@x."));
        assert!(!is_valid_email("jane@@x.com"));
        assert!(!is_valid_email("ja ne@x.com"));
    }

    #[test]
    fn test_validator_keeps_first_message_per_field() {
        let mut v = Validator::new();
        v.required("email", "", "Email is required")
            .check("email", false, "Please enter a valid email address")
            .required("name", "Jane", "Name is required");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(message_for(&errors, "email"), Some("Email is required"));
        assert_eq!(message_for(&errors, "name"), None);
    }

    #[test]
    fn test_validator_ok_when_clean() {
        let mut v = Validator::new();
        v.required("name", "x", "Name is required");
        assert!(v.finish().is_ok());
    }
}
