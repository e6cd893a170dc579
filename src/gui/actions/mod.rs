// src/gui/actions/mod.rs
//
// Folder module facade: consumers only see actions::{check, clear}.

mod check;
mod clear;

pub use check::check;
pub use clear::clear;
