use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

pub const HELP_TEXT_GRID: &str = "f: filters  [/]: category  r: refresh  ?: help  q: quit";

pub const HELP_TEXT_POPUP: &str =
    "Tab: next field  ←/→: adjust  Space: toggle  Ctrl-R: reset  Enter: apply  Esc: close";

pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}
