//! Centralized theme constants and style functions for consistent UI styling.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers and field labels
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for the active category tab and accents
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Color for the fetch failure message
pub const COLOR_ERROR: Color = Color::Red;

/// Color for prices
pub const COLOR_PRICE: Color = Color::Green;

/// Color for checked options in the filter popup
pub const COLOR_CHECKED: Color = Color::Green;

/// Border color for the filter popup
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background for the focused popup row
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/tabs row
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Width reserved for the field labels in the filter popup
pub const POPUP_LABEL_WIDTH: usize = 20;

// =============================================================================
// Style Functions
// =============================================================================

pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn error_style() -> Style {
    Style::default()
        .fg(COLOR_ERROR)
        .add_modifier(Modifier::BOLD)
}

pub fn price_style() -> Style {
    Style::default().fg(COLOR_PRICE)
}

pub fn checked_style() -> Style {
    Style::default()
        .fg(COLOR_CHECKED)
        .add_modifier(Modifier::BOLD)
}

/// Style for the focused row of the filter popup
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}
