// src/gui/app.rs
use std::{error::Error, sync::Arc, time::Duration};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::{HttpTransport, Transport},
};

use super::{components, panel::Panel};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let timeout = state.options.request_timeout_secs.map(Duration::from_secs);
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(timeout)?);
    let app = App::new(state, transport);

    eframe::run_native(
        "Certification Lookup",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // one lookup form per configured widget, same order as state.options.widgets
    pub panels: Vec<Panel>,
}

impl App {
    pub fn new(state: AppState, transport: Arc<dyn Transport>) -> Self {
        let panels: Vec<Panel> = state
            .options
            .widgets
            .iter()
            .map(|w| Panel::new(w, Arc::clone(&transport)))
            .collect();

        logf!(
            "Init: {} widget(s): {}",
            panels.len(),
            panels.iter().map(|p| p.id()).collect::<Vec<_>>().join(", ")
        );

        Self { state, panels }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.gui.current_tab.min(self.panels.len().saturating_sub(1))
    }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_tab = idx; }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up finished lookups before drawing.
        for panel in &mut self.panels {
            panel.poll();
        }

        if self.panels.len() > 1 {
            egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
                components::tabs::draw(ui, self);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let idx = self.current_index();
            let Some(panel) = self.panels.get_mut(idx) else {
                ui.label("No lookups configured.");
                return;
            };

            ui.heading(panel.title());
            ui.add_space(6.0);

            components::lookup_form::draw(ui, panel);

            ui.separator();

            components::result_view::draw(ui, &panel.widget.view());
        });
    }
}
