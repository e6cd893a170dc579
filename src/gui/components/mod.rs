// src/gui/components/mod.rs
pub mod lookup_form;
pub mod result_view;
pub mod tabs;
