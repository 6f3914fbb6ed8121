//! Progress reporting for upload runs.
//!
//! Use `NoopProgress` for headless runs and tests, `ConsoleProgress` for the CLI.

use std::time::Duration;

use colored::Colorize;

use crate::report::UploadReport;

/// Hooks called by the upload pipeline. All methods default to no-ops.
pub trait UploadProgress: Send + Sync {
    /// Records were loaded; `total` will be processed.
    fn started(&self, _total: usize) {}
    /// Batch `batch_num` (1-based) of `total_batches` with `size` records begins.
    fn batch(&self, _batch_num: usize, _total_batches: usize, _size: usize) {}
    /// Record `index` (1-based) of `total` was uploaded and attached.
    fn uploaded(&self, _index: usize, _total: usize, _ticket: &str, _file_id: &str) {}
    /// Record `index` (1-based) of `total` failed.
    fn failed(&self, _index: usize, _total: usize, _ticket: &str, _error: &str) {}
    /// The pipeline is about to sleep before the next batch.
    fn waiting(&self, _delay: Duration) {}
    /// Every record was processed.
    fn finished(&self, _report: &UploadReport) {}
}

/// No-op reporter.
#[derive(Default, Clone, Copy)]
pub struct NoopProgress;
impl UploadProgress for NoopProgress {}

/// Prints progress lines and the final summary to stdout.
#[derive(Default, Clone, Copy)]
pub struct ConsoleProgress;

impl UploadProgress for ConsoleProgress {
    fn started(&self, total: usize) {
        println!("Found {total} documents to upload");
    }

    fn batch(&self, batch_num: usize, total_batches: usize, size: usize) {
        println!("\n📦 Processing batch {batch_num}/{total_batches} ({size} documents)");
    }

    fn uploaded(&self, index: usize, total: usize, ticket: &str, file_id: &str) {
        println!(
            "  {} {index}/{total}: {ticket} ({file_id})",
            "✅".green()
        );
    }

    fn failed(&self, index: usize, total: usize, ticket: &str, error: &str) {
        println!(
            "  {} {index}/{total}: Error uploading {ticket}: {}",
            "❌".red(),
            error.red()
        );
    }

    fn waiting(&self, delay: Duration) {
        println!(
            "⏳ Waiting {} seconds before next batch...",
            delay.as_secs_f64()
        );
    }

    fn finished(&self, report: &UploadReport) {
        println!("\n🎉 Upload completed!");
        println!("\n{}", report.summary());
        println!(
            "\n{} Your RAG system is now ready to use the enhanced cancellation data!",
            "✅".green()
        );
    }
}
