//! Category tabs with the filter summary and a loading indicator.

use catalog_api::endpoints::Category;
use ratatui::prelude::Rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::state::ProductGridState;
use crate::ui::{layouts, theme};

use super::loading_indicator;

pub fn render_screen_title(f: &mut Frame, area: Rect, grid: &ProductGridState) {
    let (title_area, indicator_area) = layouts::title_with_loading(area);

    let summary = summary_text(grid);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(summary.chars().count() as u16 + 1),
        ])
        .split(title_area);

    let titles: Vec<Line> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| Line::from(format!("{} {}", i + 1, c.display_name())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(grid.category.index())
        .style(theme::help_text_style())
        .highlight_style(theme::title_style());
    f.render_widget(tabs, chunks[0]);

    f.render_widget(
        Paragraph::new(Span::styled(summary, theme::help_text_style())),
        chunks[1],
    );

    loading_indicator::render_loading_indicator(f, indicator_area, &grid.loading);
}

fn summary_text(grid: &ProductGridState) -> String {
    match grid.filters {
        Some(ref filters) => format!(
            "{}/{} products, {} filters",
            grid.filtered_products().len(),
            grid.products.len(),
            filters.active_count()
        ),
        None => format!("{} products", grid.products.len()),
    }
}
