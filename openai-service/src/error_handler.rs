//! Unified error handling for `openai-service`.
//!
//! This module exposes a single top-level error type [`OpenAiError`] for the whole
//! library, and groups domain-specific errors in nested types ([`ConfigError`],
//! [`ProviderError`]). Small helpers for reading/validating environment variables
//! are provided and return the unified [`Result<T>`] alias.
//!
//! All messages include the suffix `[OpenAI Service]` to simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, OpenAiError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `openai-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Errors reported by (or while talking to) the provider API.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("[OpenAI Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Local file could not be read before upload.
    #[error("[OpenAI Service] io error: {0}")]
    Io(#[from] std::io::Error),
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[OpenAI Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (timeouts, sizes).
    #[error("[OpenAI Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `OPENAI_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[OpenAI Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OPENAI_BASE_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* Provider errors                                                           */
/* ------------------------------------------------------------------------- */

/// Upstream provider the error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
}

/// Non-success HTTP response details.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// HTTP status returned by the provider.
    pub status: StatusCode,
    /// Request URL.
    pub url: String,
    /// Short snippet of the response body (trimmed).
    pub snippet: String,
}

/// What went wrong while talking to a provider.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderErrorKind {
    /// No API key was configured.
    #[error("missing API key")]
    MissingApiKey,

    /// The endpoint is empty or does not start with http/https.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error("HTTP {} from {}: {}", .0.status, .0.url, .0.snippet)]
    HttpStatus(HttpError),

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Provider-tagged error.
#[derive(Debug, Error)]
#[error("[OpenAI Service] {provider:?}: {kind}")]
pub struct ProviderError {
    pub provider: Provider,
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(provider: Provider, kind: ProviderErrorKind) -> Self {
        Self { provider, kind }
    }

    /// Returns the HTTP status if this error came from a non-2xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match &self.kind {
            ProviderErrorKind::HttpStatus(h) => Some(h.status),
            _ => None,
        }
    }
}

/// Max characters of a response body kept in [`HttpError::snippet`].
const SNIPPET_MAX_CHARS: usize = 300;

/// Collapses whitespace and truncates a response body for logs/errors.
pub fn make_snippet(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= SNIPPET_MAX_CHARS {
        return collapsed;
    }
    let mut out: String = collapsed.chars().take(SNIPPET_MAX_CHARS).collect();
    out.push('…');
    out
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty variable through `lookup`.
///
/// # Errors
/// Returns [`OpenAiError::Config`] with [`ConfigError::MissingVar`] if the
/// variable is absent or empty.
pub fn must_var<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u64` through `lookup` (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a valid `u64`.
pub fn var_opt_u64<F>(lookup: &F, name: &'static str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(v) if !v.trim().is_empty() => v.trim().parse::<u64>().map(Some).map_err(|_| {
            OpenAiError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers                                                        */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start with
/// a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_collapses_and_truncates() {
        assert_eq!(make_snippet("  a \n\n b\tc "), "a b c");

        let long = "x".repeat(SNIPPET_MAX_CHARS + 50);
        let s = make_snippet(&long);
        assert_eq!(s.chars().count(), SNIPPET_MAX_CHARS + 1);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn must_var_rejects_blank() {
        let lookup = |_: &str| Some("   ".to_string());
        let err = must_var(&lookup, "OPENAI_API_KEY").unwrap_err();
        assert!(matches!(
            err,
            OpenAiError::Config(ConfigError::MissingVar("OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn opt_u64_parses_or_fails() {
        let ok = |_: &str| Some("42".to_string());
        assert_eq!(var_opt_u64(&ok, "N").unwrap(), Some(42));

        let unset = |_: &str| None;
        assert_eq!(var_opt_u64(&unset, "N").unwrap(), None);

        let bad = |_: &str| Some("forty".to_string());
        assert!(matches!(
            var_opt_u64(&bad, "N").unwrap_err(),
            OpenAiError::Config(ConfigError::InvalidNumber { var: "N", .. })
        ));
    }

    #[test]
    fn endpoint_scheme_is_checked() {
        assert!(validate_http_endpoint("OPENAI_BASE_URL", "https://api.openai.com").is_ok());
        assert!(validate_http_endpoint("OPENAI_BASE_URL", "api.openai.com").is_err());
    }
}
