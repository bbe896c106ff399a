use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("OUTLET_MOCK_ENV", "development"))?;

    let bind_addr = or_default("OUTLET_MOCK_BIND_ADDR", "0.0.0.0:8080")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("OUTLET_MOCK_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("OUTLET_MOCK_LOG_LEVEL", "info");
    let secret_key = lookup("OUTLET_MOCK_SECRET_KEY")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let sizing_path = lookup("OUTLET_MOCK_SIZING_PATH").ok().map(PathBuf::from);

    let default_outlet_id = or_default("OUTLET_MOCK_DEFAULT_OUTLET_ID", "outlet-001");
    if default_outlet_id.trim().is_empty() {
        return Err(ConfigError::Validation(
            "OUTLET_MOCK_DEFAULT_OUTLET_ID must be non-empty".to_string(),
        ));
    }

    let default_outlet_count = or_default("OUTLET_MOCK_DEFAULT_OUTLET_COUNT", "100")
        .parse::<usize>()
        .map_err(|e| invalid("OUTLET_MOCK_DEFAULT_OUTLET_COUNT", e.to_string()))?;

    let seed = lookup("OUTLET_MOCK_SEED")
        .ok()
        .map(|raw| {
            raw.parse::<u64>()
                .map_err(|e| invalid("OUTLET_MOCK_SEED", e.to_string()))
        })
        .transpose()?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        secret_key,
        sizing_path,
        default_outlet_id,
        default_outlet_count,
        seed,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OUTLET_MOCK_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
