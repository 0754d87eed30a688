use crate::select::{SelectEvent, SelectKey};
use crate::tui::app::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.shutdown = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.shutdown = true,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        code => match SelectKey::from(code) {
            SelectKey::Other => {}
            key => app.dispatch_key(SelectEvent::key(key)),
        },
    }
}
