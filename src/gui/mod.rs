// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod panel;

pub use app::run;
