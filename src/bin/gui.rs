// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use cert_lookup::{config::{self, consts::LOG_FILE, state::AppState}, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    // Log first so config loading and its failures are recorded.
    log::init(log::Sink::File(LOG_FILE.into()));

    let opts = match config::load(None) {
        Ok(o) => o,
        Err(e) => {
            cert_lookup::loge!("Config failed: {}", e);
            eprintln!("Config failed: {}", e);
            std::process::exit(1);
        }
    };
    if opts.log_file != Path::new(LOG_FILE) {
        if let Err(e) = log::redirect(&opts.log_file) {
            cert_lookup::logw!("Log file {} unavailable ({}); keeping {}", opts.log_file.display(), e, LOG_FILE);
        }
    }

    let state = AppState::new(opts);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Certification Lookup")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(state, options) {
        cert_lookup::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
