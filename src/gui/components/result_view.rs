// src/gui/components/result_view.rs
//
// The output region. Draws whatever View the form is in; nothing else.

use eframe::egui::{self, Color32, RichText};
use crate::present::{Tone, View};

const OK_GREEN: Color32 = Color32::from_rgb(0x26, 0x83, 0x4f);
const ERR_RED: Color32 = Color32::from_rgb(0xfd, 0x2e, 0x09);

pub fn draw(ui: &mut egui::Ui, view: &View) {
    let Some(headline) = view.headline() else {
        return;
    };

    ui.horizontal_wrapped(|ui| {
        match (view, view.tone()) {
            (_, Tone::Positive) => {
                ui.label(RichText::new("✔").color(OK_GREEN).strong());
            }
            (View::NotFound, Tone::Negative) => {
                ui.label(RichText::new("?").color(ERR_RED).strong());
            }
            (_, Tone::Negative) => {
                ui.label(RichText::new("✖").color(ERR_RED).strong());
            }
            (_, Tone::Neutral) => {}
        }
        ui.label(headline);
    });

    if let View::Found(d) = view {
        ui.add_space(4.0);
        ui.label(RichText::new(d.full_name()).strong());
        ui.label(format!("Certification #: {}", d.number));
        ui.label(format!("Expiration: {}", d.expires));
    }
}
