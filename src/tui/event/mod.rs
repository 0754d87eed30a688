use super::app::App;
use ratatui::crossterm::event::{self, Event};

mod keys;
mod mouse;

pub fn handle_event(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    match event::read()? {
        Event::Key(key) => {
            if key.kind == event::KeyEventKind::Release {
                return Ok(());
            }
            keys::handle(app, key);
        }
        Event::Mouse(mouse) => mouse::handle(app, mouse),
        Event::FocusLost => app.blur(),
        _ => {}
    }
    Ok(())
}
