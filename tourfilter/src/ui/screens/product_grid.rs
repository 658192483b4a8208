use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{LoadingState, ProductGridState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme, utils,
};

pub const EMPTY_MESSAGE: &str = "No data found in the category you are looking for";

/// What the content area shows for the current grid state
#[derive(Debug, Clone, PartialEq)]
pub enum GridView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Rows(usize),
}

/// Loading and error win over data; an empty result is not an error
pub fn grid_view(state: &ProductGridState) -> GridView<'_> {
    match state.loading {
        LoadingState::NotStarted | LoadingState::Loading(..) => GridView::Loading,
        LoadingState::Error(ref message) => GridView::Error(message),
        LoadingState::Loaded => match state.filtered_products().len() {
            0 => GridView::Empty,
            n => GridView::Rows(n),
        },
    }
}

pub fn render(f: &mut Frame, state: &ProductGridState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, state);
    render_content(f, content_area, state);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_GRID);
}

fn render_content(f: &mut Frame, area: Rect, state: &ProductGridState) {
    let title = state.category.display_name();

    match grid_view(state) {
        GridView::Loading => {
            let throbber_state = match state.loading {
                LoadingState::Loading(ref throbber_state) => throbber_state.clone(),
                _ => Default::default(),
            };
            empty_state::render_loading_state(
                f,
                area,
                title,
                "Loading products...",
                &throbber_state,
            );
        }
        GridView::Error(message) => {
            empty_state::render_error_state(f, area, title, message);
        }
        GridView::Empty => {
            let hint = state
                .filters
                .as_ref()
                .map(|_| "Press f to adjust filters or Esc to clear them");
            empty_state::render_empty_state(f, area, title, EMPTY_MESSAGE, hint);
        }
        GridView::Rows(_) => render_table(f, area, state),
    }
}

fn render_table(f: &mut Frame, area: Rect, state: &ProductGridState) {
    let filtered = state.filtered_products();

    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Vehicle"),
        Cell::from(Text::from("Price").right_aligned()),
        Cell::from(Text::from("Group").right_aligned()),
        Cell::from("Duration"),
        Cell::from("Start Times"),
        Cell::from("Location"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = filtered
        .iter()
        .map(|product| {
            let group = product
                .primary_route()
                .map(|route| route.group_size.to_string())
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(utils::fmt_title(product)),
                Cell::from(product.vehicle_name().unwrap_or("-").to_string()),
                Cell::from(
                    Text::from(utils::fmt_price(
                        product.price.adult_price,
                        product.price.currency.as_deref(),
                    ))
                    .right_aligned(),
                )
                .style(theme::price_style()),
                Cell::from(Text::from(group).right_aligned()),
                Cell::from(product.duration.as_deref().unwrap_or("-").to_string()),
                Cell::from(utils::fmt_start_times(product)),
                Cell::from(utils::fmt_location(product)),
            ])
        })
        .collect();

    let title = match state.filters {
        Some(_) => format!(
            "{} ({} of {} filtered)",
            state.category.display_name(),
            filtered.len(),
            state.products.len()
        ),
        None => state.category.display_name().to_string(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(11),
            Constraint::Percentage(9),
            Constraint::Percentage(6),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
            Constraint::Percentage(23),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}
