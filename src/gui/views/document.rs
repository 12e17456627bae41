//! Document detail modal showing full content

use crate::document::{format_date, Document, NO_TAGS};
use crate::gui::app::DocShelfApp;

use super::home::tag_chip;

/// Render the detail modal for the open document
pub fn render_document_modal(
    ctx: &egui::Context,
    app: &mut DocShelfApp,
    doc: &Document,
    regenerating: bool,
) {
    let mut open = true;

    egui::Window::new(&doc.title)
        .id(egui::Id::new("document_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([700.0, 520.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if doc.tags.is_empty() {
                    ui.weak(NO_TAGS);
                }
                for tag in &doc.tags {
                    tag_chip(ui, tag);
                }
            });

            ui.add_space(6.0);

            // Metadata row
            ui.horizontal(|ui| {
                ui.weak(format_date(&doc.created_at));
                ui.weak("•");
                ui.weak(&doc.source_type);
            });

            if let Some(url) = &doc.source_url {
                ui.horizontal(|ui| {
                    ui.weak("Source: ");
                    ui.hyperlink(url);
                });
            }

            if let Some(summary) = doc.summary_text() {
                ui.add_space(10.0);
                ui.strong("AI Summary");
                ui.label(summary);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(320.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut doc.content.as_str())
                            .desired_width(f32::INFINITY)
                            .font(egui::TextStyle::Body)
                            .interactive(false),
                    );
                });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let label = if regenerating {
                    "Regenerating..."
                } else {
                    "Regenerate AI"
                };
                if ui
                    .add_enabled(!regenerating, egui::Button::new(label))
                    .clicked()
                {
                    app.regenerate();
                }

                if ui.button("Delete").clicked() {
                    app.confirm_delete_open = true;
                }
            });
        });

    if !open {
        app.controller.close_detail_modal();
    }
}
