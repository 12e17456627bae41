//! Remote document store abstraction
//!
//! The view layer only talks to the backend through [`DocumentStore`], so the
//! controller can be driven by the HTTP client in the app and by an in-memory
//! store in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::document::{Document, DocumentId, NewDocument};

mod http;

pub use http::HttpDocumentStore;

/// Any failure talking to the store.
///
/// Network errors, non-2xx statuses and undecodable bodies all collapse into
/// this one kind; the variants only exist to keep diagnostics readable in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid store url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// CRUD, search and AI regeneration against the document collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents, in server order
    async fn list(&self) -> Result<Vec<Document>, FetchError>;

    /// One document by id
    async fn get(&self, id: DocumentId) -> Result<Document, FetchError>;

    /// Create a document. The server fills in id, summary and tags.
    async fn create(&self, document: &NewDocument) -> Result<Document, FetchError>;

    async fn delete(&self, id: DocumentId) -> Result<(), FetchError>;

    /// Ask the backend to regenerate summary and tags
    async fn regenerate_ai(&self, id: DocumentId) -> Result<Document, FetchError>;

    async fn search(&self, query: &str) -> Result<Vec<Document>, FetchError>;
}
