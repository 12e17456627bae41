//! Main application state and eframe App implementation

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::AppConfig;
use crate::controller::{DocumentViewController, DELETE_CONFIRMATION};
use crate::document::DocumentId;
use crate::state::{Toast, ViewModel};
use crate::store::DocumentStore;

use super::views;
use super::widgets;

/// Main application state: the controller plus a few widget-local flags
pub struct DocShelfApp {
    pub controller: DocumentViewController,

    /// Current search input text
    pub search_query: String,

    /// Delete confirmation dialog visibility
    pub confirm_delete_open: bool,

    /// Focus the title field on the next frame the create modal is shown
    pub focus_create_title: bool,
}

impl DocShelfApp {
    /// Create the app and kick off the initial document load
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: Arc<dyn DocumentStore>,
        config: &AppConfig,
        runtime: Handle,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        let controller = DocumentViewController::new(store, config, runtime)
            .with_on_change(move || ctx.request_repaint());

        let app = Self {
            controller,
            search_query: String::new(),
            confirm_delete_open: false,
            focus_create_title: false,
        };
        app.load_documents();
        app
    }

    pub fn load_documents(&self) {
        let controller = self.controller.clone();
        self.controller.spawn(async move {
            controller.load_documents().await.ok();
        });
    }

    /// Open the detail modal for a card
    pub fn open_document(&self, id: DocumentId) {
        log::debug!("Opening document {}", id);
        let controller = self.controller.clone();
        self.controller.spawn(async move {
            controller.show_document_detail(id).await.ok();
        });
    }

    pub fn open_create_modal(&mut self) {
        self.controller.open_create_modal();
        self.focus_create_title = true;
    }

    pub fn submit_create(&self, title: String, content: String) {
        let controller = self.controller.clone();
        self.controller.spawn(async move {
            controller.handle_create_document(title, content).await.ok();
        });
    }

    pub fn regenerate(&self) {
        let controller = self.controller.clone();
        self.controller.spawn(async move {
            controller.regenerate_ai().await.ok();
        });
    }

    /// Forward the answer from the confirmation dialog to the delete action
    pub fn answer_delete(&mut self, confirmed: bool) {
        self.confirm_delete_open = false;
        let controller = self.controller.clone();
        self.controller.spawn(async move {
            controller
                .delete_document(move |_: &str| confirmed)
                .await
                .ok();
        });
    }

    fn on_search_changed(&self) {
        self.controller.handle_search(&self.search_query);
    }

    fn handle_escape(&mut self, model: &ViewModel) {
        if self.confirm_delete_open {
            self.confirm_delete_open = false;
        } else if model.create.open && !model.create.in_progress {
            self.controller.close_create_modal();
        } else if model.detail.is_some() {
            self.controller.close_detail_modal();
        }
    }
}

impl eframe::App for DocShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.snapshot().toasts.iter().any(Toast::is_expired) {
            self.controller.update(|m| m.cleanup_toasts());
        }
        let model = self.controller.snapshot();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.handle_escape(&model);
        }

        // Top panel with search bar and create button
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading("DocShelf");

                ui.add_space(20.0);

                let response = ui.add_sized(
                    [400.0, 32.0],
                    egui::TextEdit::singleline(&mut self.search_query)
                        .hint_text("Search documents..."),
                );
                if response.changed() {
                    self.on_search_changed();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+ New document").clicked() {
                        self.open_create_modal();
                    }
                });
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            views::home::render_home_view(ui, self, &model);
        });

        if let Some(document) = &model.detail {
            views::document::render_document_modal(ctx, self, document, model.regenerating);
        }

        if model.create.open {
            views::create::render_create_modal(ctx, self, &model.create);
        }

        if self.confirm_delete_open {
            if let Some(answer) = widgets::confirm::render_confirm(ctx, DELETE_CONFIRMATION) {
                self.answer_delete(answer);
            }
        }

        // Toast overlay (bottom-right)
        widgets::toast::render_toasts(ctx, &model.toasts);

        // Keep ticking so toasts expire without user input
        if !model.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
