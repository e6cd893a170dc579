// src/gui/components/lookup_form.rs
//
// Two inputs, the Check button and the Clear link.
// Enter in either input does exactly what Check does.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, panel::Panel};

const LABEL_W: f32 = 110.0;
const INPUT_W: f32 = 200.0;

pub fn draw(ui: &mut egui::Ui, panel: &mut Panel) {
    let mut submit = false;
    let busy = panel.widget.is_busy();
    let focus_cert = panel.widget.take_focus_request();

    ui.horizontal(|ui| {
        ui.add_sized([LABEL_W, 18.0], egui::Label::new("Certification #"));
        let cert = ui.add(
            egui::TextEdit::singleline(&mut panel.widget.cert_input)
                .hint_text("e.g. 12345")
                .desired_width(INPUT_W),
        );
        if focus_cert {
            cert.request_focus();
        }
        submit |= entered(ui, &cert);
    });

    ui.horizontal(|ui| {
        ui.add_sized([LABEL_W, 18.0], egui::Label::new("Last name"));
        let last = ui.add(
            egui::TextEdit::singleline(&mut panel.widget.last_input)
                .desired_width(INPUT_W),
        );
        submit |= entered(ui, &last);
    });

    let mut clear = false;
    ui.horizontal(|ui| {
        let check = ui.add_enabled(
            !busy,
            egui::Button::new(egui::RichText::new("Check").strong()),
        );
        if check.clicked() {
            submit = true;
        }

        if busy {
            ui.add(Spinner::new().size(16.0));
        }

        if ui.link("Clear").clicked() {
            clear = true;
        }
    });

    if clear {
        actions::clear(panel);
    } else if submit {
        actions::check(panel, ui.ctx());
    }
}

/// Enter pressed while this single-line input had focus.
fn entered(ui: &egui::Ui, resp: &egui::Response) -> bool {
    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
