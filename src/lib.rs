// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod gui;
pub mod index;
pub mod lookup;
pub mod present;
pub mod progress;
pub mod sheet;
pub mod widget;
