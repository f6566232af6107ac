//! Sodo desktop application: controller, background worker and egui UI.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::SodoApp;

pub mod action;
pub mod app;
pub mod config;
pub mod flow;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
pub mod worker;
