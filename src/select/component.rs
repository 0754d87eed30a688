use super::controller::SelectController;
use super::event::SelectEvent;
use super::scroll::PanelViewport;
use super::value::{SelectMode, SelectProps, SelectValue};

/// A controlled dropdown: interaction state plus the host's change callback.
///
/// The host keeps the value. `handle` reports at most one next value per
/// event through `on_change` and the host decides whether to adopt it.
pub struct Select<'cb> {
    controller: SelectController,
    viewport: PanelViewport,
    on_change: Box<dyn FnMut(SelectValue) + 'cb>,
}

impl std::fmt::Debug for Select<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("controller", &self.controller)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl<'cb> Select<'cb> {
    pub fn new(multiple: bool, on_change: impl FnMut(SelectValue) + 'cb) -> Self {
        Self::with_controller(
            SelectController::new(SelectMode::from_multiple(multiple)),
            on_change,
        )
    }

    pub fn with_controller(
        controller: SelectController,
        on_change: impl FnMut(SelectValue) + 'cb,
    ) -> Self {
        Self {
            controller,
            viewport: PanelViewport::default(),
            on_change: Box::new(on_change),
        }
    }

    pub fn controller(&self) -> &SelectController {
        &self.controller
    }

    pub fn viewport(&self) -> &PanelViewport {
        &self.viewport
    }

    pub fn set_panel_height(&mut self, height: usize) {
        self.viewport.set_height(height);
    }

    /// Process one event. Returns whether `on_change` was invoked.
    pub fn handle(&mut self, props: SelectProps<'_>, event: SelectEvent) -> bool {
        let was_open = self.controller.is_open();
        let change = self.controller.dispatch(props, event, &mut self.viewport);
        if !was_open && self.controller.is_open() {
            self.viewport.reset();
        }
        match change {
            Some(next) => {
                (self.on_change)(next);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::event::{EventTarget, SelectKey};
    use crate::select::option::SelectOption;

    #[test]
    fn callback_receives_next_value() {
        let options = vec![SelectOption::new("one", 10), SelectOption::new("two", 20)];
        let value = SelectValue::Single(Some(options[0].clone()));
        let mut seen = Vec::new();
        {
            let mut select = Select::new(false, |next| seen.push(next));
            let props = SelectProps::new(&options, &value);
            assert!(!select.handle(props, SelectEvent::Click(EventTarget::Option(0))));
            assert!(select.handle(props, SelectEvent::Click(EventTarget::Option(1))));
        }
        assert_eq!(seen, vec![SelectValue::Single(Some(options[1].clone()))]);
    }

    #[test]
    fn arrow_moves_scroll_the_viewport() {
        let options: Vec<_> = (0..6).map(|i| SelectOption::new(format!("o{i}"), i)).collect();
        let value = SelectValue::Multiple(vec![]);
        let props = SelectProps::new(&options, &value);
        let mut select = Select::new(true, |_| {});
        select.set_panel_height(2);

        select.handle(props, SelectEvent::key(SelectKey::ArrowDown));
        for _ in 0..3 {
            select.handle(props, SelectEvent::key(SelectKey::ArrowDown));
        }
        assert_eq!(select.controller().highlighted_index(), 3);
        assert_eq!(select.viewport().offset(), 2);

        select.handle(props, SelectEvent::key(SelectKey::Escape));
        select.handle(props, SelectEvent::key(SelectKey::ArrowDown));
        assert_eq!(select.viewport().offset(), 0);
    }
}
