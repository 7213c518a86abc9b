use reqwest::Url;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default provider endpoint root. Every operation path is joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// A continuation token is not accepted by the provider until this many
/// seconds after the page that issued it.
pub const MIN_PAGE_DELAY_SECS: u64 = 5;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
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
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The API key is optional here; the CLI may supply it as a flag, and the
/// `pick` command rejects a run without one.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("LUNCHROLL_ENV", "development"))?;
    let log_level = or_default("LUNCHROLL_LOG_LEVEL", "info");
    let api_key = non_empty("LUNCHROLL_API_KEY");
    let base_url = parse_base_url(&or_default("LUNCHROLL_BASE_URL", DEFAULT_BASE_URL))?;
    let request_timeout_secs = parse_u64("LUNCHROLL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LUNCHROLL_USER_AGENT", "lunchroll/0.1 (restaurant-picker)");
    let language = non_empty("LUNCHROLL_LANGUAGE");

    let page_delay_secs = parse_u64("LUNCHROLL_PAGE_DELAY_SECS", "5")?;
    if page_delay_secs < MIN_PAGE_DELAY_SECS {
        return Err(ConfigError::InvalidEnvVar {
            var: "LUNCHROLL_PAGE_DELAY_SECS".to_string(),
            reason: format!(
                "must be at least {MIN_PAGE_DELAY_SECS} seconds, got {page_delay_secs}"
            ),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        api_key,
        base_url,
        request_timeout_secs,
        user_agent,
        page_delay_secs,
        language,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LUNCHROLL_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse the provider root URL, normalising it to end with exactly one slash
/// so that relative operation paths join beneath it.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalised = format!("{}/", raw.trim().trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| ConfigError::InvalidEnvVar {
        var: "LUNCHROLL_BASE_URL".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
