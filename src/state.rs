//! View state shared between the controller and the egui frontend

use std::time::{Duration, Instant};

use crate::document::{Document, DocumentCard, DocumentId};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// What the document grid is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    /// Nothing fetched yet
    #[default]
    Unloaded,
    /// The collection is empty
    Empty,
    /// Full collection, in server order
    Loaded(Vec<DocumentCard>),
    /// Search hits, rendered like the full list
    SearchResults(Vec<DocumentCard>),
    /// Search returned nothing
    NoResults,
}

impl ListState {
    /// Cards to draw, if the state has any
    pub fn cards(&self) -> &[DocumentCard] {
        match self {
            ListState::Loaded(cards) | ListState::SearchResults(cards) => cards,
            _ => &[],
        }
    }
}

/// Create-document modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub open: bool,
    pub title: String,
    pub content: String,
    /// Creation indicator; creation is slow because the backend runs AI enrichment
    pub in_progress: bool,
}

impl CreateForm {
    /// Hide the modal and clear its fields
    pub fn close(&mut self) {
        self.open = false;
        self.title.clear();
        self.content.clear();
    }
}

/// Toast visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
}

/// Notification message with auto-dismiss
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(id: u64, message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id,
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    /// Check if this toast should be dismissed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Everything the frontend needs to draw one frame
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    /// Loading indicator over the grid; the grid keeps its last content underneath
    pub loading: bool,
    pub list: ListState,
    /// Document shown in the detail modal; `None` when the modal is closed
    pub detail: Option<Document>,
    pub create: CreateForm,
    /// Regenerate trigger is disabled and shows a busy label while set
    pub regenerating: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl ViewModel {
    pub fn current_document_id(&self) -> Option<DocumentId> {
        self.detail.as_ref().map(|d| d.id)
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push_toast(message, ToastType::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push_toast(message, ToastType::Error);
    }

    fn push_toast(&mut self, message: impl Into<String>, toast_type: ToastType) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast::new(id, message, toast_type));
    }

    /// Remove expired toasts
    pub fn cleanup_toasts(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_are_unique() {
        let mut model = ViewModel::default();
        model.success("one");
        model.error("two");

        assert_eq!(model.toasts[0].id, 0);
        assert_eq!(model.toasts[1].id, 1);
        assert_eq!(model.toasts[1].toast_type, ToastType::Error);
    }

    #[test]
    fn test_cleanup_drops_expired_toasts() {
        let mut model = ViewModel::default();
        model.success("stale");
        model.success("fresh");
        model.toasts[0].duration = Duration::ZERO;

        model.cleanup_toasts();
        assert_eq!(model.toasts.len(), 1);
        assert_eq!(model.toasts[0].message, "fresh");
    }

    #[test]
    fn test_close_resets_create_form() {
        let mut form = CreateForm {
            open: true,
            title: "T".to_string(),
            content: "C".to_string(),
            in_progress: false,
        };
        form.close();
        assert_eq!(form, CreateForm::default());
    }
}
