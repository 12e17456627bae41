//! Create-document modal

use crate::gui::app::DocShelfApp;
use crate::state::CreateForm;

/// Render the create modal. Field edits are written back to the controller.
pub fn render_create_modal(ctx: &egui::Context, app: &mut DocShelfApp, form: &CreateForm) {
    let mut title = form.title.clone();
    let mut content = form.content.clone();
    let mut submit = false;
    let mut cancel = false;

    egui::Window::new("New Document")
        .collapsible(false)
        .resizable(true)
        .default_size([600.0, 420.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_enabled_ui(!form.in_progress, |ui| {
                ui.label("Title");
                let title_field = ui.add(
                    egui::TextEdit::singleline(&mut title)
                        .hint_text("Document title")
                        .desired_width(f32::INFINITY),
                );
                if std::mem::take(&mut app.focus_create_title) {
                    title_field.request_focus();
                }

                ui.add_space(8.0);
                ui.label("Content");
                ui.add(
                    egui::TextEdit::multiline(&mut content)
                        .hint_text("Paste or type the document content")
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.add_space(10.0);

            if form.in_progress {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Creating document with AI...");
                });
                return;
            }

            ui.horizontal(|ui| {
                let ready = !title.trim().is_empty() && !content.trim().is_empty();
                if ui.add_enabled(ready, egui::Button::new("Create")).clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        app.controller.close_create_modal();
        return;
    }

    if title != form.title || content != form.content {
        let (t, c) = (title.clone(), content.clone());
        app.controller.update(|m| {
            m.create.title = t;
            m.create.content = c;
        });
    }

    if submit {
        app.submit_create(title, content);
    }
}
