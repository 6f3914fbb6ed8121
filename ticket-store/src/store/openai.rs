//! OpenAI vector store backend.
//!
//! Delegates to [`OpenAiService`] for `/v1/files` and
//! `/v1/vector_stores/{id}/files`.

use std::{path::Path, sync::Arc};

use openai_service::OpenAiService;

use crate::errors::UploadError;
use crate::store::{StoreFuture, VectorStoreClient};

/// OpenAI-backed [`VectorStoreClient`].
#[derive(Clone, Debug)]
pub struct OpenAiVectorStore {
    pub svc: Arc<OpenAiService>,
}

impl OpenAiVectorStore {
    pub fn new(svc: Arc<OpenAiService>) -> Self {
        Self { svc }
    }
}

impl VectorStoreClient for OpenAiVectorStore {
    fn create_file<'a>(&'a self, path: &'a Path, purpose: &'a str) -> StoreFuture<'a, String> {
        Box::pin(async move {
            let file = self.svc.create_file(path, purpose).await?;
            Ok::<_, UploadError>(file.id)
        })
    }

    fn attach_file<'a>(
        &'a self,
        vector_store_id: &'a str,
        file_id: &'a str,
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.svc.attach_file(vector_store_id, file_id).await?;
            Ok::<_, UploadError>(())
        })
    }
}
