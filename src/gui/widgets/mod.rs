//! Reusable widget components for the egui frontend

pub mod confirm;
pub mod toast;
