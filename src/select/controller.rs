use super::event::{EventTarget, Propagation, SelectEvent, SelectKey};
use super::option::{MatchBy, SelectOption};
use super::scroll::ScrollIntoView;
use super::value::{ClosePolicy, OptionState, SelectMode, SelectProps, SelectValue};

/// Interaction state of one dropdown control.
///
/// The controller owns only the panel flag and the highlight cursor. The
/// catalog and the current value stay with the host and are lent in through
/// [`SelectProps`]; every operation that would change the value returns the
/// next value instead of applying it.
#[derive(Debug, Clone)]
pub struct SelectController {
    mode: SelectMode,
    is_open: bool,
    highlighted_index: usize,
    match_by: MatchBy,
    close_policy: ClosePolicy,
}

impl Default for SelectController {
    fn default() -> Self {
        Self::new(SelectMode::default())
    }
}

impl SelectController {
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            is_open: false,
            highlighted_index: 0,
            match_by: MatchBy::default(),
            close_policy: ClosePolicy::default(),
        }
    }

    pub fn single() -> Self {
        Self::new(SelectMode::Single)
    }

    pub fn multiple() -> Self {
        Self::new(SelectMode::Multiple)
    }

    pub fn with_match_by(mut self, match_by: MatchBy) -> Self {
        self.match_by = match_by;
        self
    }

    pub fn with_close_policy(mut self, close_policy: ClosePolicy) -> Self {
        self.close_policy = close_policy;
        self
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn match_by(&self) -> MatchBy {
        self.match_by
    }

    pub fn close_policy(&self) -> ClosePolicy {
        self.close_policy
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    // -------------------------------------------------------------------------
    // Panel
    // -------------------------------------------------------------------------

    /// Open the panel. The cursor always restarts at the first option.
    pub fn open(&mut self) {
        if !self.is_open {
            self.is_open = true;
            self.highlighted_index = 0;
            log::debug!("select({:?}) opened", self.mode);
        }
    }

    pub fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            log::debug!("select({:?}) closed", self.mode);
        }
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Focus left the control.
    pub fn blur(&mut self) {
        self.close();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Compute the value that results from picking `option`.
    ///
    /// Returns `None` when the value would not change (picking the current
    /// option of a single select). The panel is updated per the close policy
    /// either way.
    pub fn select(&mut self, props: SelectProps<'_>, option: &SelectOption) -> Option<SelectValue> {
        let already = props.value.contains(option, self.match_by);

        let next = match self.mode {
            SelectMode::Single if already => None,
            SelectMode::Single => Some(SelectValue::Single(Some(option.clone()))),
            SelectMode::Multiple if already => Some(SelectValue::Multiple(
                props
                    .value
                    .as_slice()
                    .iter()
                    .filter(|o| !o.matches(option, self.match_by))
                    .cloned()
                    .collect(),
            )),
            SelectMode::Multiple => {
                let mut options = props.value.as_slice().to_vec();
                options.push(option.clone());
                Some(SelectValue::Multiple(options))
            }
        };

        match self.close_policy {
            ClosePolicy::ByMode if self.mode == SelectMode::Single => self.close(),
            ClosePolicy::ByMode => {}
            ClosePolicy::Always => self.close(),
            ClosePolicy::Toggle => self.toggle(),
        }

        if let Some(next) = &next {
            log::debug!(
                "select({:?}) change requested: {} option(s)",
                self.mode,
                next.as_slice().len()
            );
        }
        next
    }

    /// The cleared value. The panel is left alone.
    pub fn clear(&self) -> SelectValue {
        log::debug!("select({:?}) cleared", self.mode);
        SelectValue::empty(self.mode)
    }

    pub fn is_selected(&self, props: SelectProps<'_>, option: &SelectOption) -> bool {
        props.value.contains(option, self.match_by)
    }

    pub fn option_states(&self, props: SelectProps<'_>) -> Vec<OptionState> {
        props
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionState {
                index,
                selected: self.is_selected(props, option),
                highlighted: index == self.highlighted_index,
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    pub fn hover(&mut self, props: SelectProps<'_>, index: usize) {
        if index < props.options.len() {
            self.highlighted_index = index;
        }
    }

    fn move_cursor(&mut self, props: SelectProps<'_>, down: bool, reveal: &mut dyn ScrollIntoView) {
        let candidate = if down {
            self.highlighted_index.checked_add(1)
        } else {
            self.highlighted_index.checked_sub(1)
        };

        // Out-of-range moves are dropped, never wrapped.
        if let Some(index) = candidate.filter(|&i| i < props.options.len()) {
            self.highlighted_index = index;
            reveal.scroll_into_view(index);
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Keyboard navigation. Keys aimed at anything but the root are ignored.
    pub fn handle_key(
        &mut self,
        props: SelectProps<'_>,
        key: SelectKey,
        target: EventTarget,
        reveal: &mut dyn ScrollIntoView,
    ) -> Option<SelectValue> {
        if target != EventTarget::Root {
            return None;
        }

        match key {
            SelectKey::Enter | SelectKey::Space => {
                if !self.is_open {
                    self.open();
                    return None;
                }
                match props.options.get(self.highlighted_index) {
                    Some(option) => self.select(props, option),
                    None => {
                        self.close();
                        None
                    }
                }
            }
            SelectKey::ArrowUp | SelectKey::ArrowDown => {
                if !self.is_open {
                    self.open();
                } else {
                    self.move_cursor(props, key == SelectKey::ArrowDown, reveal);
                }
                None
            }
            SelectKey::Escape => {
                self.close();
                None
            }
            SelectKey::Other => None,
        }
    }

    /// Route one input event, bubbling clicks to the root toggle unless the
    /// handler at the target stops propagation.
    pub fn dispatch(
        &mut self,
        props: SelectProps<'_>,
        event: SelectEvent,
        reveal: &mut dyn ScrollIntoView,
    ) -> Option<SelectValue> {
        match event {
            SelectEvent::Click(target) => {
                let (change, propagation) = self.click_target(props, target);
                if propagation == Propagation::Continue {
                    self.toggle();
                }
                change
            }
            SelectEvent::Hover(index) => {
                self.hover(props, index);
                None
            }
            SelectEvent::Key { key, target } => self.handle_key(props, key, target, reveal),
            SelectEvent::Blur => {
                self.blur();
                None
            }
        }
    }

    fn click_target(
        &mut self,
        props: SelectProps<'_>,
        target: EventTarget,
    ) -> (Option<SelectValue>, Propagation) {
        match target {
            EventTarget::Clear => (Some(self.clear()), Propagation::Stop),
            EventTarget::Option(index) => {
                let change = props
                    .options
                    .get(index)
                    .and_then(|option| self.select(props, option));
                (change, Propagation::Stop)
            }
            EventTarget::Token(index) => {
                let change = props
                    .value
                    .as_slice()
                    .get(index)
                    .and_then(|option| self.select(props, option));
                (change, Propagation::Stop)
            }
            EventTarget::Root | EventTarget::Panel => (None, Propagation::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::scroll::NoScroll;

    fn catalog() -> Vec<SelectOption> {
        vec![
            SelectOption::new("one", 10),
            SelectOption::new("two", 20),
            SelectOption::new("three", 30),
        ]
    }

    #[test]
    fn opening_resets_cursor() {
        let options = catalog();
        let value = SelectValue::Single(None);
        let props = SelectProps::new(&options, &value);
        let mut select = SelectController::single();

        select.open();
        select.hover(props, 2);
        select.close();
        assert_eq!(select.highlighted_index(), 2);
        select.toggle();
        assert_eq!(select.highlighted_index(), 0);
    }

    #[test]
    fn hover_out_of_range_is_ignored() {
        let options = catalog();
        let value = SelectValue::Single(None);
        let props = SelectProps::new(&options, &value);
        let mut select = SelectController::single();

        select.hover(props, 1);
        select.hover(props, 9);
        assert_eq!(select.highlighted_index(), 1);
    }

    #[test]
    fn single_select_closes_and_multiple_stays_open() {
        let options = catalog();
        let none = SelectValue::Single(None);
        let mut single = SelectController::single();
        single.open();
        single.select(SelectProps::new(&options, &none), &options[0]);
        assert!(!single.is_open());

        let empty = SelectValue::Multiple(vec![]);
        let mut multiple = SelectController::multiple();
        multiple.open();
        multiple.select(SelectProps::new(&options, &empty), &options[0]);
        assert!(multiple.is_open());
    }

    #[test]
    fn toggle_policy_inverts_panel() {
        let options = catalog();
        let value = SelectValue::Multiple(vec![options[0].clone()]);
        let props = SelectProps::new(&options, &value);
        let mut select = SelectController::multiple().with_close_policy(ClosePolicy::Toggle);

        select.dispatch(props, SelectEvent::Click(EventTarget::Token(0)), &mut NoScroll);
        assert!(select.is_open());
        select.dispatch(props, SelectEvent::Click(EventTarget::Option(1)), &mut NoScroll);
        assert!(!select.is_open());
    }

    #[test]
    fn always_policy_closes_multiple() {
        let options = catalog();
        let value = SelectValue::Multiple(vec![]);
        let props = SelectProps::new(&options, &value);
        let mut select = SelectController::multiple().with_close_policy(ClosePolicy::Always);

        select.open();
        select.select(props, &options[2]);
        assert!(!select.is_open());
    }

    #[test]
    fn record_matching_treats_relabelled_option_as_new() {
        let options = catalog();
        let value = SelectValue::Multiple(vec![SelectOption::new("uno", 10)]);
        let props = SelectProps::new(&options, &value);

        let by_value = SelectController::multiple();
        assert!(by_value.is_selected(props, &options[0]));

        let mut by_record = SelectController::multiple().with_match_by(MatchBy::Record);
        assert!(!by_record.is_selected(props, &options[0]));
        let next = by_record.select(props, &options[0]);
        assert_eq!(
            next,
            Some(SelectValue::Multiple(vec![
                SelectOption::new("uno", 10),
                options[0].clone()
            ]))
        );
    }

    #[test]
    fn enter_on_empty_catalog_closes_without_change() {
        let value = SelectValue::Single(None);
        let props = SelectProps::new(&[], &value);
        let mut select = SelectController::single();

        assert_eq!(select.dispatch(props, SelectEvent::key(SelectKey::Enter), &mut NoScroll), None);
        assert!(select.is_open());
        assert_eq!(select.dispatch(props, SelectEvent::key(SelectKey::Enter), &mut NoScroll), None);
        assert!(!select.is_open());
    }

    #[test]
    fn click_on_panel_background_bubbles_to_toggle() {
        let options = catalog();
        let value = SelectValue::Single(None);
        let props = SelectProps::new(&options, &value);
        let mut select = SelectController::single();

        select.open();
        select.dispatch(props, SelectEvent::Click(EventTarget::Panel), &mut NoScroll);
        assert!(!select.is_open());
    }
}
