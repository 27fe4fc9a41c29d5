//! Wheel column component.
//!
//! Layout, top to bottom: items above the center, a divider, the centered
//! item, a divider, items below. Item colors blend from dim to bright by
//! distance to the center anchor and then fade toward the background near the
//! column edges.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::dialog::Column;
use crate::events::Action;
use crate::picker::{Picker, WheelPicker};
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion, PRIORITY_CONTROL};
use crate::tui::theme::*;

/// What a row of the column shows, relative to the center row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSlot {
    /// Item this many positions from the centered one
    Item(i32),
    /// One of the two center band dividers
    Divider,
}

/// Map a row offset from the center row to its slot.
pub fn row_slot(relative_row: i32) -> RowSlot {
    match relative_row {
        0 => RowSlot::Item(0),
        -1 | 1 => RowSlot::Divider,
        r if r < 0 => RowSlot::Item(r + 1),
        r => RowSlot::Item(r - 1),
    }
}

/// Render one wheel and register its scroll and click regions.
pub fn render_wheel_column<T: Clone + PartialEq>(
    frame: &mut Frame,
    area: Rect,
    wheel: &WheelPicker<T>,
    column: Column,
    focused: bool,
    registry: &mut InteractionRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let center = (area.height / 2) as i32;
    let centered_index = wheel.selected_index();
    let highlight = if focused { ACCENT_BLUE } else { TEXT_WHITE };
    let divider_color = if focused { ACCENT_BLUE } else { DIVIDER };

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let fade = fade_alpha(row, area.height);
        match row_slot(row as i32 - center) {
            RowSlot::Divider => {
                lines.push(Line::styled(
                    "─".repeat(area.width as usize),
                    Style::new().fg(divider_color),
                ));
            }
            RowSlot::Item(offset) => {
                let Some(index) = wheel.index_at_relative_row(offset) else {
                    lines.push(Line::raw(""));
                    continue;
                };
                let Some(item) = wheel.items().get(index) else {
                    lines.push(Line::raw(""));
                    continue;
                };

                let emphasis = 1.0 - wheel.relative_position(index).abs().min(1.0);
                let color = blend(blend(TEXT_DIM, highlight, emphasis), SURFACE_BG, fade);
                let mut style = Style::new().fg(color);
                if index == centered_index {
                    style = style.bold();
                }
                lines.push(Line::styled(wheel.format(item), style));

                let row_area = ClickRegion::new(area.x, area.y + row, area.width, 1);
                registry.register(
                    InteractiveRegion::clickable("wheel_item", row_area, Action::CenterItem { column, index })
                        .with_priority(PRIORITY_CONTROL),
                );
            }
        }
    }

    registry.register(
        InteractiveRegion::scrollable(
            "wheel_column",
            ClickRegion::from(area),
            Action::ScrollColumn { column, notches: -1 },
            Action::ScrollColumn { column, notches: 1 },
        )
        .with_priority(PRIORITY_CONTROL),
    );

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::new().bg(SURFACE_BG));
    frame.render_widget(paragraph, area);
}
