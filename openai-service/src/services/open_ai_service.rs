//! OpenAI service for file uploads and vector store attachment.
//!
//! Minimal client around the OpenAI REST API.
//! Endpoints are derived from `OpenAiConfig::endpoint`:
//! - POST {endpoint}/v1/files                              — create file (multipart)
//! - POST {endpoint}/v1/vector_stores/{id}/files           — attach file to a vector store
//!
//! Constructor validation:
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use reqwest::{
    Response, header,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error, info};

use crate::{
    config::openai_config::OpenAiConfig,
    error_handler::{
        HttpError, OpenAiError, Provider, ProviderError, ProviderErrorKind, make_snippet,
    },
};

/// Thin client for the OpenAI Files and Vector Stores APIs.
///
/// Constructed from a complete [`OpenAiConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (default headers, optional timeout).
///
/// High-level operations:
/// - [`OpenAiService::create_file`] — upload a local file with a purpose tag
/// - [`OpenAiService::attach_file`] — attach an uploaded file to a vector store
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: OpenAiConfig,
    base: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// # Errors
    /// - [`OpenAiError::Provider`] with `MissingApiKey` if `cfg.api_key` is `None`
    /// - [`OpenAiError::Provider`] with `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`OpenAiError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: OpenAiConfig) -> Result<Self, OpenAiError> {
        // 1) API key must be present.
        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::new(Provider::OpenAI, ProviderErrorKind::MissingApiKey))?;

        // 2) Endpoint must use http/https.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProviderError::new(
                Provider::OpenAI,
                ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone()),
            )
            .into());
        }

        // 3) HTTP client: default headers + optional timeout.
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                ProviderError::new(
                    Provider::OpenAI,
                    ProviderErrorKind::Decode(format!("invalid API key header: {e}")),
                )
            })?,
        );
        headers.insert(
            header::HeaderName::from_static("openai-beta"),
            header::HeaderValue::from_static("assistants=v2"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base = endpoint.trim_end_matches('/').to_string();

        info!(
            endpoint = %cfg.endpoint,
            timeout_secs = ?cfg.timeout_secs,
            "OpenAiService initialized"
        );

        Ok(Self { client, cfg, base })
    }

    /// Uploads the file at `path` via `/v1/files` with the given `purpose`.
    ///
    /// The multipart filename is the file name component of `path`.
    ///
    /// # Errors
    /// - [`OpenAiError::Io`] if the file cannot be read
    /// - [`OpenAiError::Provider`] with `HttpStatus` for non-2xx responses
    /// - [`OpenAiError::HttpTransport`] for client/network failures
    /// - [`OpenAiError::Provider`] with `Decode` if the JSON cannot be parsed
    pub async fn create_file(&self, path: &Path, purpose: &str) -> Result<FileObject, OpenAiError> {
        let started = Instant::now();
        let url = format!("{}/v1/files", self.base);

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.txt".to_string());

        debug!(
            endpoint = %self.cfg.endpoint,
            file = %file_name,
            size = bytes.len(),
            purpose,
            "POST {}", url
        );

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/plain")?;
        let form = Form::new().text("purpose", purpose.to_string()).part("file", part);

        let resp = self.client.post(&url).multipart(form).send().await?;
        let out: FileObject = self
            .decode(resp, &url, started, "`id` of the created file")
            .await?;

        info!(
            file_id = %out.id,
            purpose,
            latency_ms = started.elapsed().as_millis(),
            "file created"
        );

        Ok(out)
    }

    /// Attaches a previously uploaded file to a vector store
    /// (`/v1/vector_stores/{vector_store_id}/files`).
    ///
    /// # Errors
    /// - [`OpenAiError::Provider`] with `HttpStatus` for non-2xx responses
    /// - [`OpenAiError::HttpTransport`] for client/network failures
    /// - [`OpenAiError::Provider`] with `Decode` if the JSON cannot be parsed
    pub async fn attach_file(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> Result<VectorStoreFile, OpenAiError> {
        let started = Instant::now();
        let url = format!("{}/v1/vector_stores/{}/files", self.base, vector_store_id);
        let body = AttachFileRequest { file_id };

        debug!(vector_store_id, file_id, "POST {}", url);

        let resp = self.client.post(&url).json(&body).send().await?;
        let out: VectorStoreFile = self
            .decode(resp, &url, started, "vector store file object")
            .await?;

        info!(
            vector_store_id,
            file_id,
            status = out.status.as_deref().unwrap_or("unknown"),
            latency_ms = started.elapsed().as_millis(),
            "file attached to vector store"
        );

        Ok(out)
    }

    /// Maps a non-2xx response to `HttpStatus`, otherwise decodes the JSON body.
    async fn decode<T: DeserializeOwned>(
        &self,
        resp: Response,
        url: &str,
        started: Instant,
        expected: &str,
    ) -> Result<T, OpenAiError> {
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                endpoint = %self.cfg.endpoint,
                latency_ms = started.elapsed().as_millis(),
                "OpenAI returned non-success status"
            );

            return Err(ProviderError::new(
                Provider::OpenAI,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url: url.to_string(),
                    snippet,
                }),
            )
            .into());
        }

        match resp.json::<T>().await {
            Ok(v) => Ok(v),
            Err(e) => {
                error!(
                    error = %e,
                    %url,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode OpenAI response"
                );
                Err(ProviderError::new(
                    Provider::OpenAI,
                    ProviderErrorKind::Decode(format!("serde error: {e}; expected {expected}")),
                )
                .into())
            }
        }
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/vector_stores/{id}/files`.
#[derive(Debug, Serialize)]
struct AttachFileRequest<'a> {
    file_id: &'a str,
}

/// File object returned by `/v1/files`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileObject {
    pub id: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
}

/// Vector store file object returned by `/v1/vector_stores/{id}/files`.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorStoreFile {
    pub id: String,
    #[serde(default)]
    pub vector_store_id: Option<String>,
    /// `in_progress` | `completed` | `cancelled` | `failed`
    #[serde(default)]
    pub status: Option<String>,
}
