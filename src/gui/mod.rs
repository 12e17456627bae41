//! GUI module for the DocShelf egui frontend
//!
//! Views draw from a [`ViewModel`](crate::state::ViewModel) snapshot taken once
//! per frame and forward user actions to the controller.

pub mod app;
pub mod views;
pub mod widgets;

pub use app::DocShelfApp;
