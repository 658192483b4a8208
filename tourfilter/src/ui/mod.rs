pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::AppState;
use ratatui::Frame;
use screens::product_grid;

/// Pure render dispatcher, never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    product_grid::render(f, &state.grid);

    if let Some(ref popup) = state.filter_popup {
        components::filter_popup::render_filter_popup(f, popup);
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.filter_popup.is_some());
    }
}
