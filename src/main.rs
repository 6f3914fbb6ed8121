use std::process::ExitCode;
use std::sync::Arc;

use openai_service::{OpenAiService, config_openai, telemetry};
use ticket_store::{
    ConsoleProgress, OpenAiVectorStore, TicketUploader, UploadConfig, UploadError, UploadReport,
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log targets rendered by the telemetry layer.
const LOG_TARGETS: &[&str] = &["ticket_uploader", "ticket_store", "openai_service"];

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; variables may come from the real environment.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(telemetry::env_filter_or("warn"))
        .with(telemetry::layer(LOG_TARGETS))
        .init();

    println!("🔄 Uploading cancellation tickets to vector store...");

    match run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "upload aborted");
            println!("\n❌ Upload failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Config → client → read dump → upload. Only setup and input errors surface here.
async fn run() -> Result<UploadReport, UploadError> {
    let svc = OpenAiService::new(config_openai()?)?;
    let cfg = UploadConfig::from_env()?;

    let uploader = TicketUploader::new(cfg, OpenAiVectorStore::new(Arc::new(svc)))?;
    uploader.run(&ConsoleProgress).await
}
