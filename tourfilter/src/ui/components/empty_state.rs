//! Placeholder content for the grid when there is no table to show.

use ratatui::prelude::Rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_EIGHT};

use crate::ui::theme;

/// Render a centered message in a bordered block.
///
/// `hint` is shown below the message when present.
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    render_message(f, area, title, message, theme::loading_style(), hint);
}

/// Render the fetch failure message
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, message: &str) {
    render_message(
        f,
        area,
        title,
        message,
        theme::error_style(),
        Some("Press r to try again"),
    );
}

/// Render a spinner with a label while the catalog is loading
pub fn render_loading_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    throbber_state: &ThrobberState,
) {
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    let message_width = (message.chars().count() + 2) as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(message_width),
            Constraint::Fill(1),
        ])
        .split(rows[1]);

    let throbber = Throbber::default()
        .label(message)
        .style(theme::loading_style())
        .throbber_set(BRAILLE_EIGHT);
    f.render_stateful_widget(throbber, columns[1], &mut throbber_state.clone());
}

fn render_message(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(message, style))];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint_text,
            theme::help_text_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
