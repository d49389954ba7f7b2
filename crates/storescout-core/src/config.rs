use crate::app_config::AppConfig;
use crate::ConfigError;

/// Browser identity presented to target storefronts. Several platforms
/// serve stripped-down (or no) markup to obvious bot user agents.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// All credentials are optional: a missing key only disables the feature that
/// needs it (name resolution), it does not fail configuration loading.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let google_api_key = lookup("GOOGLE_API_KEY").ok();
    let google_cx = lookup("GOOGLE_CX").ok();
    let gemini_api_key = lookup("GEMINI_API_KEY").ok();

    let gemini_model = or_default("STORESCOUT_GEMINI_MODEL", "gemini-1.5-flash");
    let fetch_timeout_secs = parse_u64("STORESCOUT_FETCH_TIMEOUT_SECS", "15")?;
    let fetch_user_agent = or_default("STORESCOUT_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        google_api_key,
        google_cx,
        gemini_api_key,
        gemini_model,
        fetch_timeout_secs,
        fetch_user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
