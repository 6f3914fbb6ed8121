//! Upload pipeline: render → transient file → create file → attach → cleanup.
//!
//! Records are processed strictly one after another in fixed-size batches
//! with a fixed pause between batches. A failing record is counted and the
//! run moves on; nothing is retried.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::UploadConfig;
use crate::errors::UploadError;
use crate::progress::UploadProgress;
use crate::record::{TicketRecord, UploadOutcome};
use crate::render::{render_document, temp_file_name};
use crate::report::UploadReport;
use crate::store::VectorStoreClient;

/// Uploads every record and returns the aggregated report.
///
/// Never fails as a whole: per-record errors end up as
/// [`UploadOutcome::Failed`] entries in the report.
pub async fn upload_records(
    cfg: &UploadConfig,
    records: &[TicketRecord],
    client: &dyn VectorStoreClient,
    progress: &dyn UploadProgress,
) -> UploadReport {
    let total = records.len();
    let batch_size = cfg.batch_size.max(1);
    let total_batches = total.div_ceil(batch_size);

    info!(
        total,
        batch_size,
        total_batches,
        vector_store_id = %cfg.vector_store_id,
        "upload started"
    );
    progress.started(total);

    let mut report = UploadReport::new(total, &cfg.vector_store_id, &cfg.purpose);

    for (b, batch) in records.chunks(batch_size).enumerate() {
        let batch_num = b + 1;
        debug!(batch_num, size = batch.len(), "processing batch");
        progress.batch(batch_num, total_batches, batch.len());

        for (j, record) in batch.iter().enumerate() {
            let global_index = b * batch_size + j + 1;
            let ticket = record.ticket_label();

            match upload_one(cfg, client, record, global_index).await {
                Ok(file_id) => {
                    info!(index = global_index, %ticket, %file_id, "ticket uploaded");
                    progress.uploaded(global_index, total, &ticket, &file_id);
                    report.record(UploadOutcome::Uploaded { ticket, file_id });
                }
                Err(e) => {
                    let msg = e.to_string();
                    error!(index = global_index, %ticket, error = %msg, "ticket upload failed");
                    progress.failed(global_index, total, &ticket, &msg);
                    report.record(UploadOutcome::Failed { ticket, error: msg });
                }
            }
        }

        if batch_num < total_batches {
            progress.waiting(cfg.batch_delay);
            tokio::time::sleep(cfg.batch_delay).await;
        }
    }

    info!(
        succeeded = report.succeeded,
        failed = report.failed,
        "upload finished"
    );
    progress.finished(&report);
    report
}

/// Processes one record; the transient file is gone when this returns.
async fn upload_one(
    cfg: &UploadConfig,
    client: &dyn VectorStoreClient,
    record: &TicketRecord,
    global_index: usize,
) -> Result<String, UploadError> {
    let contents = render_document(record)?;
    let doc = TempDocument::new(cfg.temp_dir.join(temp_file_name(record, global_index)));

    match push_document(cfg, client, &doc, contents).await {
        Ok(file_id) => {
            doc.remove().await?;
            Ok(file_id)
        }
        Err(e) => {
            doc.discard().await;
            Err(e)
        }
    }
}

/// Writes the document, creates the remote file and attaches it.
async fn push_document(
    cfg: &UploadConfig,
    client: &dyn VectorStoreClient,
    doc: &TempDocument,
    contents: String,
) -> Result<String, UploadError> {
    tokio::fs::write(doc.path(), contents).await?;

    let file_id = client.create_file(doc.path(), &cfg.purpose).await?;
    client.attach_file(&cfg.vector_store_id, &file_id).await?;
    Ok(file_id)
}

/// Transient document on disk.
///
/// Callers remove it explicitly with [`TempDocument::remove`] or
/// [`TempDocument::discard`]; drop is only a fallback.
struct TempDocument {
    path: PathBuf,
    removed: bool,
}

impl TempDocument {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            removed: false,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file, surfacing the error (drop retries on failure).
    async fn remove(mut self) -> std::io::Result<()> {
        tokio::fs::remove_file(&self.path).await?;
        self.removed = true;
        Ok(())
    }

    /// Deletes the file if it was written; failures are only logged.
    async fn discard(mut self) {
        self.removed = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = ?self.path, error = %e, "failed to remove transient document");
            }
        }
    }
}

impl Drop for TempDocument {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = ?self.path, error = %e, "failed to remove transient document");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_document_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp_cancellation_T-1.txt");
        {
            let doc = TempDocument::new(path.clone());
            tokio::fs::write(doc.path(), "x").await.unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn explicit_remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let doc = TempDocument::new(path.clone());
        tokio::fs::write(doc.path(), "x").await.unwrap();
        doc.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn drop_without_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        drop(TempDocument::new(dir.path().join("never-written.txt")));
    }

    #[tokio::test]
    async fn discard_removes_written_file_and_tolerates_missing_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let doc = TempDocument::new(path.clone());
        tokio::fs::write(doc.path(), "x").await.unwrap();
        doc.discard().await;
        assert!(!path.exists());

        TempDocument::new(dir.path().join("never-written.txt"))
            .discard()
            .await;
    }
}
