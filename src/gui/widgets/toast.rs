//! Toast notification widget
//!
//! Provides rendering and styling for toast notifications.

use crate::state::{Toast, ToastType};
use egui::{Color32, Context};

/// Render toast notifications in the bottom-right corner
///
/// Displays up to 5 toasts, with the most recent on top.
pub fn render_toasts(ctx: &Context, toasts: &[Toast]) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toast_area"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                for toast in toasts.iter().rev().take(5) {
                    let (icon, color) = toast_style(toast.toast_type);

                    egui::Frame::none()
                        .fill(color)
                        .rounding(4.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.colored_label(
                                Color32::WHITE,
                                format!("{} {}", icon, toast.message),
                            );
                        });
                    ui.add_space(4.0);
                }
            });
        });
}

fn toast_style(toast_type: ToastType) -> (&'static str, Color32) {
    match toast_type {
        ToastType::Success => ("✔", Color32::from_rgb(128, 70, 200)),
        ToastType::Error => ("⚠", Color32::from_rgb(220, 20, 60)),
    }
}
