use serde::{Deserialize, Serialize};

/// Every value a report category can take, across all categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryValue {
    Verified,
    Unverified,
    Partial,
    Failed,
    Clear,
    Review,
    Pending,
}

impl CategoryValue {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryValue::Verified => "verified",
            CategoryValue::Unverified => "unverified",
            CategoryValue::Partial => "partial",
            CategoryValue::Failed => "failed",
            CategoryValue::Clear => "clear",
            CategoryValue::Review => "review",
            CategoryValue::Pending => "pending",
        }
    }

    /// Capitalized code
    pub fn label(&self) -> &'static str {
        match self {
            CategoryValue::Verified => "Verified",
            CategoryValue::Unverified => "Unverified",
            CategoryValue::Partial => "Partial",
            CategoryValue::Failed => "Failed",
            CategoryValue::Clear => "Clear",
            CategoryValue::Review => "Review",
            CategoryValue::Pending => "Pending",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "verified" => Some(CategoryValue::Verified),
            "unverified" => Some(CategoryValue::Unverified),
            "partial" => Some(CategoryValue::Partial),
            "failed" => Some(CategoryValue::Failed),
            "clear" => Some(CategoryValue::Clear),
            "review" => Some(CategoryValue::Review),
            "pending" => Some(CategoryValue::Pending),
            _ => None,
        }
    }
}
