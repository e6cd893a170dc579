// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Active tab index into AppOptions::widgets
    pub current_tab: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 520.0,
            window_h: 360.0,
            current_tab: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
