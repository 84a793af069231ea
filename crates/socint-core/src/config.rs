use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_LOG_LEVEL, DEFAULT_TREND_WINDOW};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var has an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("SOCINT_LOG_LEVEL", DEFAULT_LOG_LEVEL);
    let seed_path = lookup("SOCINT_SEED_PATH").ok().map(PathBuf::from);

    let trend_window = match lookup("SOCINT_TREND_WINDOW") {
        Ok(raw) => {
            let parsed =
                raw.parse::<usize>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        var: "SOCINT_TREND_WINDOW".to_string(),
                        reason: e.to_string(),
                    })?;
            if parsed == 0 {
                return Err(ConfigError::InvalidEnvVar {
                    var: "SOCINT_TREND_WINDOW".to_string(),
                    reason: "window must be at least 1".to_string(),
                });
            }
            parsed
        }
        Err(_) => DEFAULT_TREND_WINDOW,
    };

    Ok(AppConfig {
        log_level,
        seed_path,
        trend_window,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.seed_path.is_none());
        assert_eq!(cfg.trend_window, 7);
    }

    #[test]
    fn log_level_override() {
        let mut map = HashMap::new();
        map.insert("SOCINT_LOG_LEVEL", "socint_store=debug,info");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "socint_store=debug,info");
    }

    #[test]
    fn seed_path_override() {
        let mut map = HashMap::new();
        map.insert("SOCINT_SEED_PATH", "./config/seed.yaml");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.seed_path.as_deref(),
            Some(std::path::Path::new("./config/seed.yaml"))
        );
    }

    #[test]
    fn trend_window_override() {
        let mut map = HashMap::new();
        map.insert("SOCINT_TREND_WINDOW", "14");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.trend_window, 14);
    }

    #[test]
    fn trend_window_rejects_non_numeric() {
        let mut map = HashMap::new();
        map.insert("SOCINT_TREND_WINDOW", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOCINT_TREND_WINDOW"),
            "expected InvalidEnvVar(SOCINT_TREND_WINDOW), got: {result:?}"
        );
    }

    #[test]
    fn trend_window_rejects_zero() {
        let mut map = HashMap::new();
        map.insert("SOCINT_TREND_WINDOW", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref reason, .. }) if reason.contains("at least 1")),
            "expected zero-window rejection, got: {result:?}"
        );
    }
}
