//! View components for the egui frontend
//!
//! Each view module contains render functions for a specific screen.

pub mod create;
pub mod document;
pub mod home;
