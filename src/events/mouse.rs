//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the dialog components during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::interaction::InteractionRegistry;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(registry: &InteractionRegistry, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => registry.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => registry.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => registry.handle_click(x, y),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::dialog::Column;
    use crate::tui::interaction::{ClickRegion, InteractiveRegion};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_scroll_routed_to_column() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "day_column",
            ClickRegion::new(0, 0, 10, 5),
            Action::ScrollColumn { column: Column::Day, notches: -1 },
            Action::ScrollColumn { column: Column::Day, notches: 1 },
        ));

        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::ScrollDown, 2, 2)),
            Action::ScrollColumn { column: Column::Day, notches: 1 }
        );
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::ScrollUp, 20, 2)),
            Action::None
        );
    }

    #[test]
    fn test_click_and_other_events() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("ok_button", ClickRegion::new(5, 5, 4, 1), Action::Confirm);

        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Down(MouseButton::Left), 6, 5)),
            Action::Confirm
        );
        assert_eq!(
            handle_mouse_event(&registry, mouse(MouseEventKind::Moved, 6, 5)),
            Action::None
        );
    }
}
