use crate::select::{EventTarget, SelectEvent};
use crate::tui::app::App;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub fn handle(app: &mut App, mouse: MouseEvent) {
    let hit = app.hits.at(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(hit) = hit else {
                // Clicking empty space takes focus away from the controls.
                app.blur();
                return;
            };
            let Some(index) = app.field_index(hit.control) else {
                return;
            };
            app.focus(index);
            app.dispatch(index, SelectEvent::Click(hit.target));
        }
        MouseEventKind::Moved => {
            if let Some(hit) = hit
                && let EventTarget::Option(option) = hit.target
                && let Some(index) = app.field_index(hit.control)
            {
                app.dispatch(index, SelectEvent::Hover(option));
            }
        }
        _ => {}
    }
}
