//! Modal filter editor.

use catalog_api::endpoints::Category;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::{FilterPopupState, PopupField};
use crate::ui::{layouts, theme};

use super::{help_bar, popup};

pub fn render_filter_popup(f: &mut Frame, state: &FilterPopupState) {
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::FILTERS,
        " Filters ",
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = state
        .visible_fields()
        .into_iter()
        .map(|field| field_line(state, field))
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
    f.render_widget(
        Paragraph::new(help_bar::HELP_TEXT_POPUP)
            .style(theme::help_text_style())
            .alignment(Alignment::Center),
        chunks[1],
    );
}

fn field_line(state: &FilterPopupState, field: PopupField) -> Line<'static> {
    let focused = state.focused == field;
    let row_style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    if matches!(field, PopupField::Reset | PopupField::Apply) {
        let label = format!("[ {} ]", field.label());
        let style = if focused {
            theme::form_field_focused_style().fg(theme::COLOR_TITLE)
        } else {
            theme::title_style()
        };
        return Line::from(Span::styled(label, style));
    }

    let mut spans = vec![Span::styled(
        format!("{:width$}", field.label(), width = theme::POPUP_LABEL_WIDTH),
        theme::header_style(),
    )];
    let filters = &state.filters;

    match field {
        PopupField::Category => {
            for category in Category::ALL {
                let style = if category == state.selected_category {
                    theme::checked_style()
                } else {
                    theme::help_text_style()
                };
                spans.push(Span::styled(format!(" {} ", category.display_name()), style));
            }
        }
        PopupField::Location => {
            let mut text = filters.location.clone();
            if focused {
                text.push('_');
            } else if text.is_empty() {
                text.push_str("(any)");
            }
            spans.push(Span::styled(text, row_style));
        }
        PopupField::MaxPrice => spans.push(Span::styled(
            format!("${} - ${}", filters.price_range.0, filters.price_range.1),
            row_style,
        )),
        PopupField::StartTimeFrom => {
            spans.push(Span::styled(filters.start_time.0.clone(), row_style))
        }
        PopupField::StartTimeTo => {
            spans.push(Span::styled(filters.start_time.1.clone(), row_style))
        }
        PopupField::MaxGroupSize => spans.push(Span::styled(
            format!("{} - {}", filters.group_size.0, filters.group_size.1),
            row_style,
        )),
        PopupField::Vehicles
        | PopupField::Features
        | PopupField::TourCategory
        | PopupField::Activities => {
            let radio = field == PopupField::TourCategory;
            for (i, option) in state.options(field).iter().enumerate() {
                let checked = state.is_selected(field, option);
                let marker = match (radio, checked) {
                    (true, true) => "(•)",
                    (true, false) => "( )",
                    (false, true) => "[x]",
                    (false, false) => "[ ]",
                };
                let mut style = if checked {
                    theme::checked_style()
                } else {
                    theme::form_field_style()
                };
                if focused && i == state.option_cursor {
                    style = style.patch(theme::selection_style());
                }
                spans.push(Span::styled(format!("{} {}", marker, option), style));
                spans.push(Span::raw("  "));
            }
        }
        PopupField::Reset | PopupField::Apply => {}
    }

    let line = Line::from(spans);
    if focused {
        line.patch_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        line
    }
}
