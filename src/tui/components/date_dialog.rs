//! Date picker dialog component.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::dialog::{Column, Focus, WheelDatePickerDialog};
use crate::events::Action;
use crate::tui::interaction::{
    ClickRegion, InteractionRegistry, InteractiveRegion, PRIORITY_BACKDROP, PRIORITY_CONTROL,
    PRIORITY_SURFACE,
};
use crate::tui::theme::*;

use super::render_wheel_column;

/// Rows taken by each wheel column
pub const WHEEL_HEIGHT: u16 = 9;
/// Preferred popup width
pub const POPUP_WIDTH: u16 = 40;
/// Border, title, spacer, wheels, spacer, buttons, border
pub const POPUP_HEIGHT: u16 = WHEEL_HEIGHT + 6;

const BUTTON_GAP: u16 = 2;

/// Render the dialog centered in `area` and register its mouse regions.
///
/// Clicks outside the dialog dismiss it.
pub fn render_date_dialog(
    frame: &mut Frame,
    area: Rect,
    dialog: &WheelDatePickerDialog,
    registry: &mut InteractionRegistry,
) {
    registry.register(
        InteractiveRegion::clickable("backdrop", ClickRegion::from(area), Action::Cancel)
            .with_priority(PRIORITY_BACKDROP),
    );

    // Calculate centered popup area
    let popup_width = POPUP_WIDTH.min(area.width);
    let popup_height = POPUP_HEIGHT.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_BLUE))
        .style(Style::new().bg(SURFACE_BG));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    registry.register(
        InteractiveRegion::clickable("surface", ClickRegion::from(popup_area), Action::None)
            .with_priority(PRIORITY_SURFACE),
    );

    let layout = Layout::vertical([
        Constraint::Length(1),            // Title
        Constraint::Length(1),            // Spacing
        Constraint::Length(WHEEL_HEIGHT), // Wheels
        Constraint::Length(1),            // Spacing
        Constraint::Length(1),            // Buttons
    ])
    .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        dialog.title(),
        Style::new().fg(TEXT_WHITE).bold(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(layout[2]);

    let focus = dialog.focus();
    render_wheel_column(
        frame,
        columns[0],
        dialog.day_wheel(),
        Column::Day,
        focus == Focus::Wheel(Column::Day),
        registry,
    );
    render_wheel_column(
        frame,
        columns[2],
        dialog.month_wheel(),
        Column::Month,
        focus == Focus::Wheel(Column::Month),
        registry,
    );
    render_wheel_column(
        frame,
        columns[4],
        dialog.year_wheel(),
        Column::Year,
        focus == Focus::Wheel(Column::Year),
        registry,
    );

    render_buttons(frame, layout[4], dialog, registry);
}

/// Right-aligned Cancel and OK buttons.
fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    dialog: &WheelDatePickerDialog,
    registry: &mut InteractionRegistry,
) {
    let ok_width = button_width(dialog.ok_label());
    let cancel_width = button_width(dialog.cancel_label());

    let ok_x = area.right().saturating_sub(ok_width).max(area.x);
    let cancel_x = ok_x.saturating_sub(BUTTON_GAP + cancel_width).max(area.x);

    let cancel_area = Rect::new(cancel_x, area.y, cancel_width.min(area.width), area.height.min(1));
    let ok_area = Rect::new(ok_x, area.y, ok_width.min(area.width), area.height.min(1));

    let buttons = [
        (cancel_area, dialog.cancel_label(), Focus::Cancel, Action::Cancel, "cancel_button"),
        (ok_area, dialog.ok_label(), Focus::Ok, Action::Confirm, "ok_button"),
    ];

    for (button_area, label, focus, action, id) in buttons {
        let style = if dialog.focus() == focus {
            Style::new().fg(SURFACE_BG).bg(ACCENT_BLUE).bold()
        } else {
            Style::new().fg(ACCENT_BLUE)
        };
        let text = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)));
        frame.render_widget(text, button_area);

        registry.register(
            InteractiveRegion::clickable(id, ClickRegion::from(button_area), action)
                .with_priority(PRIORITY_CONTROL),
        );
    }
}

fn button_width(label: &str) -> u16 {
    (label.chars().count() + 2).min(u16::MAX as usize) as u16
}
