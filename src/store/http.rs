use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::{DocumentStore, FetchError};
use crate::document::{Document, DocumentId, NewDocument};

/// Store backed by the `/api/documents` REST endpoint.
///
/// No request timeout is configured; calls resolve or fail according to the
/// transport's own defaults.
pub struct HttpDocumentStore {
    endpoint: String,
    client: Client,
}

impl HttpDocumentStore {
    /// Create a client for the backend at `base_url` (e.g. `http://127.0.0.1:5000`)
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Url::parse(base_url)?;
        Ok(Self {
            endpoint: format!("{}/api/documents", base_url.trim_end_matches('/')),
            client: Client::new(),
        })
    }

    /// Collection URL, `{base}/api/documents`
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn document_url(&self, id: DocumentId) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    fn search_url(&self, query: &str) -> Result<Url, FetchError> {
        Ok(Url::parse_with_params(
            &format!("{}/search", self.endpoint),
            &[("q", query)],
        )?)
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, FetchError> {
        log::debug!("store request: {}", url);

        let response = request.send().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, FetchError> {
        let response = self.send(request, url).await?;
        response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn list(&self) -> Result<Vec<Document>, FetchError> {
        self.fetch_json(self.client.get(&self.endpoint), &self.endpoint)
            .await
    }

    async fn get(&self, id: DocumentId) -> Result<Document, FetchError> {
        let url = self.document_url(id);
        self.fetch_json(self.client.get(&url), &url).await
    }

    async fn create(&self, document: &NewDocument) -> Result<Document, FetchError> {
        self.fetch_json(
            self.client.post(&self.endpoint).json(document),
            &self.endpoint,
        )
        .await
    }

    async fn delete(&self, id: DocumentId) -> Result<(), FetchError> {
        let url = self.document_url(id);
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn regenerate_ai(&self, id: DocumentId) -> Result<Document, FetchError> {
        let url = format!("{}/regenerate-ai", self.document_url(id));
        self.fetch_json(self.client.post(&url), &url).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Document>, FetchError> {
        let url = self.search_url(query)?;
        self.fetch_json(self.client.get(url.clone()), url.as_str())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fixtures::doc;
    use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::{get, post},
        Json, Router,
    };
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct Backend {
        docs: Arc<Mutex<Vec<Document>>>,
        created: Arc<Mutex<Vec<NewDocument>>>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    async fn list_docs(State(backend): State<Backend>) -> Json<Vec<Document>> {
        Json(backend.docs.lock().unwrap().clone())
    }

    async fn get_doc(Path(id): Path<i64>, State(backend): State<Backend>) -> Response {
        if id == 99 {
            return "not json".into_response();
        }
        match backend.docs.lock().unwrap().iter().find(|d| d.id == id) {
            Some(d) => Json(d.clone()).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "Document not found"})),
            )
                .into_response(),
        }
    }

    async fn create_doc(
        State(backend): State<Backend>,
        Json(body): Json<NewDocument>,
    ) -> (StatusCode, Json<Document>) {
        backend.created.lock().unwrap().push(body.clone());
        let mut created = doc(42, &body.title);
        created.content = body.content;
        created.source_type = body.source_type;
        (StatusCode::CREATED, Json(created))
    }

    async fn delete_doc(Path(id): Path<i64>, State(backend): State<Backend>) -> StatusCode {
        let mut docs = backend.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() < before {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }

    async fn regenerate(Path(id): Path<i64>) -> Result<Json<Document>, StatusCode> {
        if id == 500 {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        let mut d = doc(id, "Regenerated");
        d.tags = vec!["fresh".to_string()];
        Ok(Json(d))
    }

    async fn search_docs(
        Query(params): Query<HashMap<String, String>>,
        State(backend): State<Backend>,
    ) -> Json<Vec<Document>> {
        let q = params.get("q").cloned().unwrap_or_default();
        backend.queries.lock().unwrap().push(q.clone());
        let hits = backend
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.title.contains(&q))
            .cloned()
            .collect();
        Json(hits)
    }

    async fn spawn_backend(backend: Backend) -> String {
        let app = Router::new()
            .route("/api/documents", get(list_docs).post(create_doc))
            .route("/api/documents/search", get(search_docs))
            .route("/api/documents/:id", get(get_doc).delete(delete_doc))
            .route("/api/documents/:id/regenerate-ai", post(regenerate))
            .with_state(backend);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn seeded() -> Backend {
        let backend = Backend::default();
        *backend.docs.lock().unwrap() = vec![doc(1, "Rust notes"), doc(2, "Flask & friends")];
        backend
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        assert!(matches!(
            HttpDocumentStore::new("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let store = HttpDocumentStore::new("http://localhost:5000/").unwrap();
        assert_eq!(store.endpoint(), "http://localhost:5000/api/documents");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let store = HttpDocumentStore::new("http://localhost:5000").unwrap();
        let url = store.search_url("a&b c").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/documents/search?q=a%26b+c"
        );
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let base = spawn_backend(seeded()).await;
        let store = HttpDocumentStore::new(&base).unwrap();

        let docs = store.list().await.unwrap();
        assert_eq!(docs.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2]);

        let one = store.get(2).await.unwrap();
        assert_eq!(one.title, "Flask & friends");
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        let base = spawn_backend(seeded()).await;
        let store = HttpDocumentStore::new(&base).unwrap();

        match store.get(12).await {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let base = spawn_backend(seeded()).await;
        let store = HttpDocumentStore::new(&base).unwrap();

        assert!(matches!(store.get(99).await, Err(FetchError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_create_posts_manual_payload() {
        let backend = seeded();
        let base = spawn_backend(backend.clone()).await;
        let store = HttpDocumentStore::new(&base).unwrap();

        let created = store.create(&NewDocument::manual("T", "C")).await.unwrap();
        assert_eq!(created.id, 42);
        assert_eq!(
            backend.created.lock().unwrap().as_slice(),
            &[NewDocument::manual("T", "C")]
        );
    }

    #[tokio::test]
    async fn test_delete_checks_status() {
        let backend = seeded();
        let base = spawn_backend(backend.clone()).await;
        let store = HttpDocumentStore::new(&base).unwrap();

        store.delete(1).await.unwrap();
        assert_eq!(backend.docs.lock().unwrap().len(), 1);
        assert!(matches!(
            store.delete(1).await,
            Err(FetchError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_regenerate() {
        let base = spawn_backend(seeded()).await;
        let store = HttpDocumentStore::new(&base).unwrap();

        let updated = store.regenerate_ai(1).await.unwrap();
        assert_eq!(updated.tags, vec!["fresh"]);
        assert!(matches!(
            store.regenerate_ai(500).await,
            Err(FetchError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_search_sends_decoded_term() {
        let backend = seeded();
        let base = spawn_backend(backend.clone()).await;
        let store = HttpDocumentStore::new(&base).unwrap();

        let hits = store.search("Flask & friends").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(
            backend.queries.lock().unwrap().as_slice(),
            &["Flask & friends".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = HttpDocumentStore::new(&format!("http://{}", addr)).unwrap();
        assert!(matches!(store.list().await, Err(FetchError::Network { .. })));
    }
}
