//! Home view: the document grid, also used for search results

use egui::Ui;

use crate::document::{DocumentCard, DocumentId, Preview, NO_TAGS};
use crate::gui::app::DocShelfApp;
use crate::state::{ListState, ViewModel};

/// Render the grid for whatever list state the model holds
pub fn render_home_view(ui: &mut Ui, app: &mut DocShelfApp, model: &ViewModel) {
    ui.add_space(20.0);

    if model.loading {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.label("Loading documents...");
        });
        return;
    }

    match &model.list {
        ListState::Unloaded => {}
        ListState::Empty => {
            placeholder(
                ui,
                "No documents yet",
                "Create your first document to get started.",
            );
        }
        ListState::NoResults => {
            placeholder(ui, "No results found", "Try a different search term");
        }
        ListState::Loaded(cards) | ListState::SearchResults(cards) => {
            ui.horizontal(|ui| {
                let heading = if matches!(model.list, ListState::SearchResults(_)) {
                    "Search Results"
                } else {
                    "Documents"
                };
                ui.heading(heading);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{} documents", cards.len()));
                });
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            if let Some(id) = render_cards(ui, cards) {
                app.open_document(id);
            }
        }
    }
}

fn placeholder(ui: &mut Ui, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(50.0);
        ui.label(title);
        ui.add_space(10.0);
        ui.weak(hint);
    });
}

/// Scrollable card list. Returns the id of a clicked card.
fn render_cards(ui: &mut Ui, cards: &[DocumentCard]) -> Option<DocumentId> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in cards {
                ui.push_id(card.id, |ui| {
                    let response = egui::Frame::none()
                        .fill(if ui.visuals().dark_mode {
                            egui::Color32::from_gray(30)
                        } else {
                            egui::Color32::from_gray(245)
                        })
                        .rounding(4.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            render_card(ui, card);
                        });

                    if response.response.interact(egui::Sense::click()).clicked() {
                        clicked = Some(card.id);
                    }

                    if response.response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                });

                ui.add_space(8.0);
            }
        });

    clicked
}

fn render_card(ui: &mut Ui, card: &DocumentCard) {
    ui.strong(&card.title);
    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui| {
        if card.tags.is_empty() {
            ui.weak(NO_TAGS);
        }
        for tag in &card.tags {
            tag_chip(ui, tag);
        }
    });

    ui.add_space(4.0);

    match &card.preview {
        Preview::Summary(text) => {
            ui.label(text);
        }
        Preview::Excerpt(text) => {
            ui.weak(text);
        }
    }

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.weak(&card.created);
        ui.weak("•");
        ui.weak(&card.source_type);
    });
}

/// Small rounded label for a tag
pub fn tag_chip(ui: &mut Ui, tag: &str) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgb(88, 60, 140))
        .rounding(8.0)
        .inner_margin(egui::vec2(6.0, 2.0))
        .show(ui, |ui| {
            ui.colored_label(egui::Color32::WHITE, egui::RichText::new(tag).small());
        });
}
