// src/gui/actions/clear.rs
use crate::gui::panel::Panel;

/// Reset inputs and output; focus returns to the certification field.
pub fn clear(panel: &mut Panel) {
    logd!("Clear [{}]", panel.id());
    panel.widget.clear();
}
