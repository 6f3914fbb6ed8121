use crate::errors::UploadError;
use std::{future::Future, path::Path, pin::Pin};

/// Boxed future returned by [`VectorStoreClient`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, UploadError>> + Send + 'a>>;

/// Remote vector store the rendered documents are pushed to.
///
/// Implement this trait to plug in another backend (or a fake in tests).
/// Both calls are made once per record, in order, without retries.
pub trait VectorStoreClient: Send + Sync {
    /// Uploads the file at `path` and returns the remote file id.
    fn create_file<'a>(&'a self, path: &'a Path, purpose: &'a str) -> StoreFuture<'a, String>;

    /// Attaches an uploaded file to the vector store.
    fn attach_file<'a>(&'a self, vector_store_id: &'a str, file_id: &'a str)
    -> StoreFuture<'a, ()>;
}

pub mod openai;
