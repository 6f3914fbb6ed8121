//! Support-ticket ingestion into a hosted vector store.
//!
//! This crate provides a small API to:
//! - Read a JSONL dump of support tickets
//! - Render each ticket into a plain-text document
//! - Upload and attach every document to a vector store, batch by batch
//! - Summarize the run (successes, errors, success rate)
//!
//! The design is flat and splits responsibilities into focused modules.

mod config;
mod errors;
mod io_jsonl;
mod progress;
mod record;
mod render;
mod report;
mod store;
mod upload;

pub use config::{
    DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE, DEFAULT_INPUT_FILE, FILE_PURPOSE, UploadConfig,
};
pub use errors::UploadError;
pub use io_jsonl::read_all_records;
pub use progress::{ConsoleProgress, NoopProgress, UploadProgress};
pub use record::{TicketRecord, UploadOutcome, display_value, is_truthy};
pub use render::{render_document, temp_file_name};
pub use report::UploadReport;
pub use store::openai::OpenAiVectorStore;
pub use store::{StoreFuture, VectorStoreClient};
pub use upload::upload_records;

use tracing::{debug, trace};

/// High-level facade that wires configuration and the vector store client.
///
/// This is the single entry point recommended for application code.
pub struct TicketUploader<C: VectorStoreClient> {
    cfg: UploadConfig,
    client: C,
}

impl<C: VectorStoreClient> TicketUploader<C> {
    /// Constructs a new uploader from the given configuration.
    ///
    /// # Errors
    /// Returns `UploadError::Config`/`MissingVar` if the config is invalid.
    pub fn new(cfg: UploadConfig, client: C) -> Result<Self, UploadError> {
        trace!("TicketUploader::new vector_store_id={}", cfg.vector_store_id);
        cfg.validate()?;
        Ok(Self { cfg, client })
    }

    pub fn config(&self) -> &UploadConfig {
        &self.cfg
    }

    /// Reads the configured JSONL dump and uploads every record.
    ///
    /// # Errors
    /// Returns `UploadError::InputNotFound`, `Io` or `Parse` when the dump
    /// cannot be loaded; nothing is uploaded in that case. Per-record upload
    /// failures are reported in the returned [`UploadReport`], not as errors.
    pub async fn run(&self, progress: &dyn UploadProgress) -> Result<UploadReport, UploadError> {
        debug!("TicketUploader::run input={:?}", self.cfg.input_path);
        let records = read_all_records(&self.cfg.input_path)?;
        Ok(upload_records(&self.cfg, &records, &self.client, progress).await)
    }
}
