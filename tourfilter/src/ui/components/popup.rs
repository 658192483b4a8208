//! Shared popup/modal base component.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::layouts;

/// Draw a modal frame on top of whatever is already rendered.
///
/// The area under the popup is cleared first so the grid does not show
/// through the form.
///
/// # Arguments
/// * `parent_area` - Area the popup is centered in, usually the whole frame
/// * `size` - Tuple of (width_percent, height_percent), see [`layouts::popup_sizes`]
/// * `title` - Shown centered in the top border
/// * `border_style` - Style for the border (e.g. `theme::accent_border_style()`)
///
/// # Returns
/// The inner area left for the popup's content
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
) -> Rect {
    let area = layouts::centered_popup(size.0, size.1, parent_area);

    // Wipe the table cells underneath
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}
