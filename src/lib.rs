pub mod config;
pub mod controller;
pub mod document;
pub mod gui;
pub mod state;
pub mod store;

pub use controller::DocumentViewController;
pub use document::{Document, DocumentId};
pub use store::{DocumentStore, FetchError, HttpDocumentStore};
