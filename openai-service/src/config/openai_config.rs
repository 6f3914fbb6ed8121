/// Connection settings for the OpenAI REST API.
///
/// # Fields
///
/// - `endpoint`: API base URL without the `/v1` suffix (e.g. `https://api.openai.com`).
/// - `api_key`: Bearer token. `None` is rejected by [`crate::OpenAiService::new`].
/// - `timeout_secs`: Optional per-request timeout. `None` waits for the provider.
///
/// # Examples
///
/// ```
/// use openai_service::OpenAiConfig;
///
/// let cfg = OpenAiConfig {
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: Some("sk-...".to_string()),
///     timeout_secs: None,
/// };
/// assert!(cfg.api_key.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    /// API base URL (local mock or remote API).
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: Option<String>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
