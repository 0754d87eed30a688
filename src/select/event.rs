use ratatui::crossterm::event::KeyCode;

/// Keys the control reacts to. Everything else collapses into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectKey {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

impl From<KeyCode> for SelectKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Enter => SelectKey::Enter,
            KeyCode::Char(' ') => SelectKey::Space,
            KeyCode::Up => SelectKey::ArrowUp,
            KeyCode::Down => SelectKey::ArrowDown,
            KeyCode::Esc => SelectKey::Escape,
            _ => SelectKey::Other,
        }
    }
}

/// The part of the control an input event landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTarget {
    /// The focusable body of the control.
    Root,
    /// The clear button.
    Clear,
    /// An entry of the options panel, by catalog index.
    Option(usize),
    /// A value token, by position in the current value.
    Token(usize),
    /// The options panel outside any entry.
    Panel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectEvent {
    Click(EventTarget),
    Hover(usize),
    Key { key: SelectKey, target: EventTarget },
    Blur,
}

impl SelectEvent {
    /// A key press aimed at the control root.
    pub fn key(key: impl Into<SelectKey>) -> Self {
        SelectEvent::Key {
            key: key.into(),
            target: EventTarget::Root,
        }
    }
}

/// Whether a handled event continues bubbling to the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}
