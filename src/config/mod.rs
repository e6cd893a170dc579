// src/config/mod.rs
pub mod consts;
pub mod load;
pub mod options;
pub mod state;

pub use load::load;
pub use options::{AppOptions, Columns, WidgetOptions};
