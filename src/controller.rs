//! Document view controller
//!
//! Owns the view state and keeps it in sync with the remote store. Every
//! user action catches its own failure, reports it through a toast and leaves
//! the controller usable for the next action.
//!
//! Responses are applied in the order they arrive. There is no request
//! sequencing, so a slow response can overwrite state rendered from a newer one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use crate::document::{cards, Document, DocumentId, NewDocument};
use crate::state::{ListState, ViewModel};
use crate::store::{DocumentStore, FetchError};

/// Question put to the user before deleting
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this document?";

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

type ChangeHook = Arc<dyn Fn() + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller over a [`DocumentStore`]. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct DocumentViewController {
    store: Arc<dyn DocumentStore>,
    model: Arc<Mutex<ViewModel>>,
    /// Single-slot debounce: at most one pending search at a time
    search_timeout: Arc<Mutex<Option<CancellationToken>>>,
    on_change: Option<ChangeHook>,
    runtime: Handle,
    search_debounce: Duration,
    detail_delay: Duration,
}

impl DocumentViewController {
    pub fn new(store: Arc<dyn DocumentStore>, config: &AppConfig, runtime: Handle) -> Self {
        Self {
            store,
            model: Arc::new(Mutex::new(ViewModel::default())),
            search_timeout: Arc::new(Mutex::new(None)),
            on_change: None,
            runtime,
            search_debounce: config.search_debounce(),
            detail_delay: config.detail_delay(),
        }
    }

    /// Register a callback fired after every view state change
    pub fn with_on_change(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(hook));
        self
    }

    /// Copy of the current view state
    pub fn snapshot(&self) -> ViewModel {
        lock(&self.model).clone()
    }

    pub fn current_document_id(&self) -> Option<DocumentId> {
        lock(&self.model).current_document_id()
    }

    /// Mutate view state from the frontend (form fields, toast expiry)
    pub fn update<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> R {
        let mut model = lock(&self.model);
        let result = f(&mut *model);
        drop(model);
        if let Some(hook) = &self.on_change {
            hook();
        }
        result
    }

    /// Run a controller action on the runtime
    pub fn spawn<F>(&self, action: F) -> JoinHandle<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(action)
    }

    /// Fetch the whole collection and render it as cards
    ///
    /// `loading` is a plain flag, not a counter: with overlapping loads the
    /// first one to finish hides the spinner while the others are still in
    /// flight, and the last response to arrive decides the grid.
    pub async fn load_documents(&self) -> Result<(), FetchError> {
        self.update(|m| m.loading = true);

        match self.store.list().await {
            Ok(documents) => {
                log::info!("Loaded {} documents", documents.len());
                self.update(|m| {
                    m.loading = false;
                    m.list = if documents.is_empty() {
                        ListState::Empty
                    } else {
                        ListState::Loaded(cards(&documents))
                    };
                });
                Ok(())
            }
            Err(e) => {
                log::error!("Error loading documents: {}", e);
                self.update(|m| {
                    m.loading = false;
                    m.error("Error loading documents");
                });
                Err(e)
            }
        }
    }

    /// Fetch one document and open it in the detail modal
    pub async fn show_document_detail(&self, id: DocumentId) -> Result<(), FetchError> {
        match self.store.get(id).await {
            Ok(document) => {
                self.update(|m| m.detail = Some(document));
                Ok(())
            }
            Err(e) => {
                log::error!("Error loading document {}: {}", id, e);
                self.update(|m| m.error("Error loading document"));
                Err(e)
            }
        }
    }

    pub fn close_detail_modal(&self) {
        self.update(|m| m.detail = None);
    }

    pub fn open_create_modal(&self) {
        self.update(|m| m.create.open = true);
    }

    /// Hide the create modal and reset its fields
    pub fn close_create_modal(&self) {
        self.update(|m| m.create.close());
    }

    /// Submit a manual document. On success the list is reloaded and the new
    /// document opens after the detail delay.
    pub async fn handle_create_document(
        &self,
        title: String,
        content: String,
    ) -> Result<Document, FetchError> {
        self.update(|m| m.create.in_progress = true);

        let payload = NewDocument::manual(title, content);
        match self.store.create(&payload).await {
            Ok(document) => {
                log::info!("Created document {} '{}'", document.id, document.title);
                self.update(|m| {
                    m.create.in_progress = false;
                    m.create.close();
                    m.success("Document created with AI!");
                });

                // load_documents reports its own failure
                self.load_documents().await.ok();
                self.schedule_detail(document.id);
                Ok(document)
            }
            Err(e) => {
                log::error!("Error creating document: {}", e);
                self.update(|m| {
                    m.create.in_progress = false;
                    m.error("Error creating document");
                });
                Err(e)
            }
        }
    }

    fn schedule_detail(&self, id: DocumentId) -> JoinHandle<()> {
        let controller = self.clone();
        let delay = self.detail_delay;
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            controller.show_document_detail(id).await.ok();
        })
    }

    /// Regenerate AI summary and tags for the open document
    pub async fn regenerate_ai(&self) -> Result<(), FetchError> {
        let Some(id) = self.current_document_id() else {
            return Ok(());
        };

        let _busy = RegenerateGuard::engage(self);

        match self.store.regenerate_ai(id).await {
            Ok(updated) => {
                log::info!("Regenerated AI content for document {}", id);
                self.update(|m| m.success("AI content regenerated!"));
                self.load_documents().await.ok();
                self.show_document_detail(updated.id).await.ok();
                Ok(())
            }
            Err(e) => {
                log::error!("Error regenerating AI for document {}: {}", id, e);
                self.update(|m| m.error("Error regenerating AI"));
                Err(e)
            }
        }
    }

    /// Delete the open document after asking `confirm`
    pub async fn delete_document<C: Confirm>(&self, confirm: C) -> Result<(), FetchError> {
        let Some(id) = self.current_document_id() else {
            return Ok(());
        };

        if !confirm.confirm(DELETE_CONFIRMATION) {
            log::debug!("Delete of document {} declined", id);
            return Ok(());
        }

        match self.store.delete(id).await {
            Ok(()) => {
                log::info!("Deleted document {}", id);
                self.close_detail_modal();
                self.update(|m| m.success("Document deleted"));
                self.load_documents().await.ok();
                Ok(())
            }
            Err(e) => {
                log::error!("Error deleting document {}: {}", id, e);
                self.update(|m| m.error("Error deleting document"));
                Err(e)
            }
        }
    }

    /// Search-box input handler with a trailing debounce.
    ///
    /// Each call cancels the pending search. A blank query reloads the full list
    /// right away; anything else is searched once the debounce delay passes
    /// without another call.
    pub fn handle_search(&self, query: &str) -> JoinHandle<()> {
        let mut slot = lock(&self.search_timeout);
        if let Some(pending) = slot.take() {
            pending.cancel();
        }

        let query = query.trim().to_string();
        let controller = self.clone();

        if query.is_empty() {
            drop(slot);
            return self.runtime.spawn(async move {
                controller.load_documents().await.ok();
            });
        }

        let token = CancellationToken::new();
        *slot = Some(token.clone());
        drop(slot);

        let delay = self.search_debounce;
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    controller.search(&query).await.ok();
                }
            }
        })
    }

    /// Run a search immediately and render the hits
    pub async fn search(&self, query: &str) -> Result<(), FetchError> {
        match self.store.search(query).await {
            Ok(documents) => {
                log::debug!("Search '{}' returned {} documents", query, documents.len());
                self.update(|m| {
                    m.list = if documents.is_empty() {
                        ListState::NoResults
                    } else {
                        ListState::SearchResults(cards(&documents))
                    };
                });
                Ok(())
            }
            Err(e) => {
                log::error!("Error searching for '{}': {}", query, e);
                self.update(|m| m.error("Error searching"));
                Err(e)
            }
        }
    }
}

/// Keeps the regenerate trigger busy; restores it on every exit path
struct RegenerateGuard<'a> {
    controller: &'a DocumentViewController,
}

impl<'a> RegenerateGuard<'a> {
    fn engage(controller: &'a DocumentViewController) -> Self {
        controller.update(|m| m.regenerating = true);
        Self { controller }
    }
}

impl Drop for RegenerateGuard<'_> {
    fn drop(&mut self) {
        self.controller.update(|m| m.regenerating = false);
    }
}
