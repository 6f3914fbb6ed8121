//! Default OpenAI config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`      = bearer token (mandatory)
//! - `OPENAI_BASE_URL`     = API base URL (optional, default `https://api.openai.com`)
//! - `OPENAI_TIMEOUT_SECS` = per-request timeout in seconds (optional, no timeout if unset)

use crate::{
    config::openai_config::OpenAiConfig,
    error_handler::{Result, must_var, validate_http_endpoint, var_opt_u64},
};

/// Public OpenAI endpoint used when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";

/// Constructs an [`OpenAiConfig`] from the process environment.
///
/// # Errors
///
/// - [`crate::ConfigError::MissingVar`] if `OPENAI_API_KEY` is unset or empty
/// - [`crate::ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` has no http(s) scheme
/// - [`crate::ConfigError::InvalidNumber`] if `OPENAI_TIMEOUT_SECS` is not a `u64`
pub fn config_openai() -> Result<OpenAiConfig> {
    config_openai_from(|k| std::env::var(k).ok())
}

/// Same as [`config_openai`], reading variables through `lookup`.
pub fn config_openai_from<F>(lookup: F) -> Result<OpenAiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = must_var(&lookup, "OPENAI_API_KEY")?;

    let endpoint = lookup("OPENAI_BASE_URL")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.to_string());
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    let timeout_secs = var_opt_u64(&lookup, "OPENAI_TIMEOUT_SECS")?;

    Ok(OpenAiConfig {
        endpoint,
        api_key: Some(api_key),
        timeout_secs,
    })
}
