//! Thin OpenAI client for document uploads.
//!
//! - [`OpenAiService`] talks to the Files and Vector Stores REST APIs.
//! - [`config::default_config`] builds an [`OpenAiConfig`] from environment variables.
//! - [`error_handler`] holds the unified [`OpenAiError`].
//! - [`telemetry`] provides a `tracing-subscriber` layer for binaries.

pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

pub use config::default_config::{DEFAULT_OPENAI_ENDPOINT, config_openai, config_openai_from};
pub use config::openai_config::OpenAiConfig;
pub use error_handler::{
    ConfigError, HttpError, OpenAiError, Provider, ProviderError, ProviderErrorKind,
};
pub use services::open_ai_service::{FileObject, OpenAiService, VectorStoreFile};
