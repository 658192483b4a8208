use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, theme};

pub fn render_help_popup(f: &mut Frame, popup_open: bool) {
    let help_items = get_help_items(popup_open);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::HELP,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(popup_open: bool) -> Vec<(&'static str, &'static str)> {
    if popup_open {
        return vec![
            ("Tab/↓/j", "Next field"),
            ("Shift-Tab/↑/k", "Previous field"),
            ("←/→/h/l", "Adjust value, move option cursor or switch category"),
            ("Space", "Toggle highlighted option"),
            ("Type", "Edit location (when focused)"),
            ("Backspace", "Delete last location character"),
            ("Ctrl-R", "Reset all filters"),
            ("Enter", "Apply filters and close"),
            ("Esc", "Close without applying"),
            ("?", "Toggle help (outside the location field)"),
        ];
    }

    vec![
        ("↑/k", "Move selection up"),
        ("↓/j", "Move selection down"),
        ("g/G", "Jump to first/last product"),
        ("f or /", "Open filters"),
        ("Esc", "Clear applied filters"),
        ("[/]  ←/→", "Previous/next category"),
        ("1-4", "Tours, Tickets, Rent, Transfer"),
        ("r", "Refresh products"),
        ("?", "Toggle help"),
        ("q", "Quit"),
    ]
}
