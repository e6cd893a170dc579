// src/gui/components/tabs.rs
//
// Top tabs, one per configured widget. Switching tabs keeps each form's
// inputs, output, and index cache as they were.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        let mut switch_to = None;

        for (idx, panel) in app.panels.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, panel.title()).clicked() && !selected {
                switch_to = Some(idx);
            }
        }

        if let Some(idx) = switch_to {
            logf!("UI: Tab switch {} → {}", app.panels[cur].id(), app.panels[idx].id());
            app.set_current_index(idx);
        }
    });
}
