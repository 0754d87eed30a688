use super::event::handle_event;
use super::hit::HitMap;
use super::ui::ui;
use crate::config::models::AppConfig;
use crate::select::{
    ControlId, KeyListeners, SelectEvent, SelectMode, SelectOption, SelectProps, SelectValue,
};
use crate::tui::components::select_field::SelectField;
use ratatui::crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::Backend;
use ratatui::{Terminal, prelude::CrosstermBackend};

use std::io;

pub struct App {
    pub options: Vec<SelectOption>,
    pub fields: Vec<SelectField>,
    pub values: Vec<SelectValue>,
    pub focused: Option<usize>,
    pub listeners: KeyListeners,
    pub hits: HitMap,
    pub shutdown: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> App {
        let panel_height = config.panel_height.max(1).min(config.options.len().max(1));
        let field = |id: usize, title: &str, mode: SelectMode| {
            SelectField::new(ControlId(id), title, mode).configure(
                config.match_by,
                config.close_policy,
                panel_height,
            )
        };

        let fields = vec![
            field(0, "MultiSelect", SelectMode::Multiple),
            field(1, "Single Select", SelectMode::Single),
        ];
        let values = vec![
            SelectValue::Multiple(Vec::new()),
            SelectValue::Single(config.options.first().cloned()),
        ];

        let mut app = App {
            options: config.options,
            fields,
            values,
            focused: None,
            listeners: KeyListeners::new(),
            hits: HitMap::new(),
            shutdown: false,
            status_message: None,
        };
        app.focus(0);
        app
    }

    /// Move focus to `index`, blurring whichever field held it.
    pub fn focus(&mut self, index: usize) {
        if self.focused == Some(index) || index >= self.fields.len() {
            return;
        }
        if let Some(previous) = self.focused.take() {
            let props = SelectProps::new(&self.options, &self.values[previous]);
            self.fields[previous].blur(props);
        }
        self.fields[index].focus(&self.listeners);
        self.focused = Some(index);
        log::debug!("focus -> {}", self.fields[index].title);
    }

    pub fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            let props = SelectProps::new(&self.options, &self.values[previous]);
            self.fields[previous].blur(props);
        }
    }

    pub fn focus_next(&mut self) {
        let next = self.focused.map_or(0, |i| (i + 1) % self.fields.len());
        self.focus(next);
    }

    pub fn focus_previous(&mut self) {
        let len = self.fields.len();
        let previous = self.focused.map_or(len - 1, |i| (i + len - 1) % len);
        self.focus(previous);
    }

    pub fn field_index(&self, id: ControlId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Deliver `event` to a field and adopt the value it asks for.
    pub fn dispatch(&mut self, index: usize, event: SelectEvent) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        let props = SelectProps::new(&self.options, &self.values[index]);
        if let Some(next) = field.handle(props, event) {
            self.status_message = Some(format!("{}: {}", field.title, describe(&next)));
            log::info!("{} changed to {}", field.title, describe(&next));
            self.values[index] = next;
        }
    }

    /// Key events only reach a field whose listener is attached.
    pub fn dispatch_key(&mut self, event: SelectEvent) {
        let Some(index) = self.focused else {
            return;
        };
        if self.listeners.is_listening(self.fields[index].id()) {
            self.dispatch(index, event);
        }
    }

    pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(config);

        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(
            stderr,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend)?;

        let res = run_app(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;

        res
    }
}

pub fn describe(value: &SelectValue) -> String {
    match value {
        SelectValue::Single(None) => "(none)".to_string(),
        SelectValue::Multiple(options) if options.is_empty() => "[]".to_string(),
        SelectValue::Single(Some(option)) => option.label.clone(),
        SelectValue::Multiple(options) => {
            let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            format!("[{}]", labels.join(", "))
        }
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.shutdown {
            return Ok(());
        }

        terminal.draw(|frame| ui(frame, app))?;

        handle_event(app)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{EventTarget, SelectKey};

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn starts_like_the_demo() {
        let app = app();
        assert_eq!(app.values[0], SelectValue::Multiple(vec![]));
        assert_eq!(app.values[1], SelectValue::Single(Some(SelectOption::new("one", 10))));
        assert_eq!(app.focused, Some(0));
        assert!(app.listeners.is_listening(ControlId(0)));
    }

    #[test]
    fn moving_focus_blurs_and_detaches() {
        let mut app = app();
        app.dispatch_key(SelectEvent::key(SelectKey::Enter));
        assert!(app.fields[0].controller.is_open());

        app.focus_next();
        assert!(!app.fields[0].controller.is_open());
        assert!(!app.listeners.is_listening(ControlId(0)));
        assert!(app.listeners.is_listening(ControlId(1)));
        assert_eq!(app.listeners.len(), 1);
    }

    #[test]
    fn host_adopts_requested_values() {
        let mut app = app();
        app.dispatch(0, SelectEvent::Click(EventTarget::Option(1)));
        app.dispatch(0, SelectEvent::Click(EventTarget::Option(0)));
        assert_eq!(describe(&app.values[0]), "[two, one]");

        app.dispatch(0, SelectEvent::Click(EventTarget::Token(0)));
        assert_eq!(describe(&app.values[0]), "[one]");

        app.dispatch(1, SelectEvent::Click(EventTarget::Clear));
        assert_eq!(app.values[1], SelectValue::Single(None));
        assert_eq!(app.status_message.as_deref(), Some("Single Select: (none)"));
    }

    #[test]
    fn keys_skip_unfocused_fields() {
        let mut app = app();
        app.blur();
        app.dispatch_key(SelectEvent::key(SelectKey::ArrowDown));
        assert!(!app.fields[0].controller.is_open());
        assert!(app.listeners.is_empty());
    }
}
