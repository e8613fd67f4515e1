use contracts::shared::config::AppConfig;
use web_sys::window;

/// localStorage key holding an optional JSON override of the embedded config
pub const CONFIG_OVERRIDE_KEY: &str = "snapshot_config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Raw override document, if one is stored
pub fn get_config_override() -> Option<String> {
    get_local_storage()?.get_item(CONFIG_OVERRIDE_KEY).ok()?
}

/// Load the application config.
///
/// A broken override falls back to the embedded defaults; the parse error is
/// returned alongside so it can be logged once logging is up.
pub fn load_app_config() -> (AppConfig, Option<anyhow::Error>) {
    let override_json = get_config_override();
    match AppConfig::load(override_json.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

pub fn log_level(config: &AppConfig) -> log::Level {
    match config.log_level.as_str() {
        "error" => log::Level::Error,
        "warn" => log::Level::Warn,
        "info" => log::Level::Info,
        "trace" => log::Level::Trace,
        _ => log::Level::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        let mut config = AppConfig::default();
        assert_eq!(log_level(&config), log::Level::Debug);
        config.log_level = "warn".into();
        assert_eq!(log_level(&config), log::Level::Warn);
        config.log_level = "trace".into();
        assert_eq!(log_level(&config), log::Level::Trace);
    }
}
