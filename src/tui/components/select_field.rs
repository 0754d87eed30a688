use crate::select::{
    ClosePolicy, ControlId, KeyListeners, ListenerGuard, MatchBy, PanelViewport, SelectController,
    SelectEvent, SelectMode, SelectProps, SelectValue,
};

/// One mounted select control: its interaction state, panel window and key
/// listener registration. The value it displays lives in the app.
#[derive(Debug)]
pub struct SelectField {
    id: ControlId,
    pub title: String,
    pub controller: SelectController,
    pub viewport: PanelViewport,
    listener: Option<ListenerGuard>,
}

impl SelectField {
    pub fn new(id: ControlId, title: impl Into<String>, mode: SelectMode) -> Self {
        Self {
            id,
            title: title.into(),
            controller: SelectController::new(mode),
            viewport: PanelViewport::default(),
            listener: None,
        }
    }

    pub fn configure(
        mut self,
        match_by: MatchBy,
        close_policy: ClosePolicy,
        panel_height: usize,
    ) -> Self {
        self.controller = self
            .controller
            .with_match_by(match_by)
            .with_close_policy(close_policy);
        self.viewport.set_height(panel_height);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn is_focused(&self) -> bool {
        self.listener.is_some()
    }

    /// Take focus: start listening for keys.
    pub fn focus(&mut self, listeners: &KeyListeners) {
        self.listener = Some(listeners.attach(self.id));
    }

    /// Lose focus: release the key listener and close the panel.
    pub fn blur(&mut self, props: SelectProps<'_>) {
        self.listener = None;
        self.handle(props, SelectEvent::Blur);
    }

    pub fn handle(&mut self, props: SelectProps<'_>, event: SelectEvent) -> Option<SelectValue> {
        let was_open = self.controller.is_open();
        let change = self.controller.dispatch(props, event, &mut self.viewport);
        if !was_open && self.controller.is_open() {
            self.viewport.reset();
        }
        change
    }
}
