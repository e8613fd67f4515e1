use serde::{Deserialize, Serialize};

/// One verification dimension of a background check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Identity,
    Employment,
    Criminal,
    Education,
    SocialMedia,
    OnlinePresence,
}

impl Category {
    /// Display order used by the progress strip and the report grid
    pub fn all() -> [Category; 6] {
        [
            Category::Identity,
            Category::Employment,
            Category::Criminal,
            Category::Education,
            Category::SocialMedia,
            Category::OnlinePresence,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Identity => "Identity Verification",
            Category::Employment => "Employment History",
            Category::Criminal => "Criminal Record",
            Category::Education => "Education",
            Category::SocialMedia => "Social Media",
            Category::OnlinePresence => "Online Presence",
        }
    }

    /// Abbreviation shown in the dashboard progress strip
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::Identity => "ID",
            Category::Employment => "EMP",
            Category::Criminal => "CRIM",
            Category::Education => "EDU",
            Category::SocialMedia => "SOC",
            Category::OnlinePresence => "WEB",
        }
    }

    /// Last path segment of the sub-report route
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Identity => "identity",
            Category::Employment => "employment",
            Category::Criminal => "criminal",
            Category::Education => "education",
            Category::SocialMedia => "social-media",
            Category::OnlinePresence => "online-presence",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Identity => "user",
            Category::Employment => "briefcase",
            Category::Criminal => "shield",
            Category::Education => "graduation-cap",
            Category::SocialMedia => "users",
            Category::OnlinePresence => "globe",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Category::all().into_iter().find(|c| c.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_order() {
        let labels: Vec<&str> = Category::all().iter().map(|c| c.short_label()).collect();
        assert_eq!(labels, vec!["ID", "EMP", "CRIM", "EDU", "SOC", "WEB"]);
    }

    #[test]
    fn test_slugs_resolve() {
        for category in Category::all() {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("credit"), None);
    }
}
