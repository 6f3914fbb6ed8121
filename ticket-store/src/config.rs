//! Upload run configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::UploadError;

/// Input dump read when `UPLOAD_INPUT_FILE` is not set.
pub const DEFAULT_INPUT_FILE: &str = "vector-store-data-2025-10-10.jsonl";
/// Records per batch (keeps request bursts under provider rate limits).
pub const DEFAULT_BATCH_SIZE: usize = 5;
/// Pause between two consecutive batches.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_secs(3);
/// Purpose tag sent with every file upload.
pub const FILE_PURPOSE: &str = "assistants";

/// Configuration for one upload run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadConfig {
    /// JSONL dump with one ticket per line.
    pub input_path: PathBuf,
    /// Target vector store (e.g. `vs_abc123`).
    pub vector_store_id: String,
    /// Purpose tag for `/v1/files`.
    pub purpose: String,
    /// Records per batch.
    pub batch_size: usize,
    /// Sleep between batches (not after the last one).
    pub batch_delay: Duration,
    /// Directory for transient per-record files.
    pub temp_dir: PathBuf,
}

impl UploadConfig {
    /// Config with the stock input file, batch size and delay for `vector_store_id`.
    pub fn new_default(vector_store_id: impl Into<String>) -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            vector_store_id: vector_store_id.into(),
            purpose: FILE_PURPOSE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: DEFAULT_BATCH_DELAY,
            temp_dir: PathBuf::from("."),
        }
    }

    /// Build from environment variables.
    ///
    /// - `OPENAI_VECTOR_STORE_ID` (required)
    /// - `UPLOAD_INPUT_FILE`, `UPLOAD_BATCH_SIZE`, `UPLOAD_BATCH_DELAY_SECS`,
    ///   `UPLOAD_TEMP_DIR` (optional)
    ///
    /// # Errors
    /// [`UploadError::MissingVar`] or [`UploadError::Config`]; the input file is
    /// not touched here.
    pub fn from_env() -> Result<Self, UploadError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`UploadConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UploadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let vector_store_id =
            get("OPENAI_VECTOR_STORE_ID").ok_or(UploadError::MissingVar("OPENAI_VECTOR_STORE_ID"))?;

        let mut cfg = Self::new_default(vector_store_id);

        if let Some(p) = get("UPLOAD_INPUT_FILE") {
            cfg.input_path = PathBuf::from(p);
        }
        if let Some(v) = get("UPLOAD_BATCH_SIZE") {
            cfg.batch_size = parse("UPLOAD_BATCH_SIZE", &v)?;
        }
        if let Some(v) = get("UPLOAD_BATCH_DELAY_SECS") {
            cfg.batch_delay = Duration::from_secs(parse("UPLOAD_BATCH_DELAY_SECS", &v)?);
        }
        if let Some(p) = get("UPLOAD_TEMP_DIR") {
            cfg.temp_dir = PathBuf::from(p);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), UploadError> {
        if self.vector_store_id.trim().is_empty() {
            return Err(UploadError::MissingVar("OPENAI_VECTOR_STORE_ID"));
        }
        if self.purpose.trim().is_empty() {
            return Err(UploadError::Config("purpose is empty".into()));
        }
        if self.batch_size == 0 {
            return Err(UploadError::Config("batch_size must be > 0".into()));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T, UploadError> {
    raw.parse()
        .map_err(|_| UploadError::Config(format!("invalid number in {var}: {raw:?}")))
}
