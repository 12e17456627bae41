//! Yes/no confirmation dialog

use egui::Context;

/// Render a centered confirmation dialog.
///
/// Returns `Some(true)` when confirmed, `Some(false)` when declined and `None`
/// while the user has not answered yet.
pub fn render_confirm(ctx: &Context, message: &str) -> Option<bool> {
    let mut answer = None;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });

    answer
}
