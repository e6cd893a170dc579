// src/gui/actions/check.rs
use std::{sync::Arc, thread};

use eframe::egui;

use crate::gui::panel::Panel;

/// Validate the form and, if it passes, run the lookup off the UI thread.
/// Blank input only flips the form to the prompt view.
pub fn check(panel: &mut Panel, ctx: &egui::Context) {
    let Some(sub) = panel.widget.submit() else {
        return;
    };

    logd!("Check [{}]: ticket {}", panel.id(), sub.ticket);

    let lookup = Arc::clone(&panel.lookup);
    let outbox = panel.outbox.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let result = lookup.lookup(&sub.query, None);
        // Receiver gone means the window closed; nothing left to update.
        let _ = outbox.send((sub.ticket, result));
        ctx.request_repaint();
    });
}
