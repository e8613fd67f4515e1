use serde::{Deserialize, Serialize};

/// Runtime settings of the demo application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Employer shown in the dashboard header
    pub organization_name: String,
    pub organization_email: String,
    /// Simulated sign-in delay
    pub login_delay_ms: u32,
    /// Simulated consent processing delay
    pub consent_delay_ms: u32,
    /// Upper bound for any simulated operation
    pub operation_timeout_ms: u32,
    pub toast_duration_ms: u32,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization_name: "Acme Corp HR".into(),
            organization_email: "hr@acmecorp.com".into(),
            login_delay_ms: 1000,
            consent_delay_ms: 2000,
            operation_timeout_ms: 10_000,
            toast_duration_ms: 4000,
            log_level: "debug".into(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Built-in defaults, optionally overlaid with a JSON override
    pub fn load(override_json: Option<&str>) -> anyhow::Result<Self> {
        match override_json {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.operation_timeout_ms == 0 {
            anyhow::bail!("operation_timeout_ms must be positive");
        }
        if !matches!(
            self.log_level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            anyhow::bail!("unknown log_level '{}'", self.log_level);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_empty_override_matches_defaults() {
        let config = AppConfig::load(Some("{}")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::load(Some(r#"{ "login_delay_ms": 10 }"#)).unwrap();
        assert_eq!(config.login_delay_ms, 10);
        assert_eq!(config.consent_delay_ms, 2000);
        assert_eq!(config.organization_name, "Acme Corp HR");
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(AppConfig::load(Some("not json")).is_err());
        assert!(AppConfig::load(Some(r#"{ "log_level": "loud" }"#)).is_err());
        assert!(AppConfig::load(Some(r#"{ "operation_timeout_ms": 0 }"#)).is_err());
    }
}
