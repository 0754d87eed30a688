use super::option::{MatchBy, SelectOption};
use serde::{Deserialize, Serialize};

/// Whether a control holds one option or a list of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectMode {
    #[default]
    Single,
    Multiple,
}

impl SelectMode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            SelectMode::Multiple
        } else {
            SelectMode::Single
        }
    }

    pub fn is_multiple(self) -> bool {
        self == SelectMode::Multiple
    }
}

/// The value a host owns and lends to the control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectValue {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

impl SelectValue {
    /// The cleared value for `mode`.
    pub fn empty(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => SelectValue::Single(None),
            SelectMode::Multiple => SelectValue::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectMode {
        match self {
            SelectValue::Single(_) => SelectMode::Single,
            SelectValue::Multiple(_) => SelectMode::Multiple,
        }
    }

    /// The chosen options in order. A single value yields zero or one entry.
    pub fn as_slice(&self) -> &[SelectOption] {
        match self {
            SelectValue::Single(Some(option)) => std::slice::from_ref(option),
            SelectValue::Single(None) => &[],
            SelectValue::Multiple(options) => options.as_slice(),
        }
    }

    pub fn contains(&self, option: &SelectOption, match_by: MatchBy) -> bool {
        self.as_slice().iter().any(|o| o.matches(option, match_by))
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// What happens to the panel once a selection completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosePolicy {
    /// Single closes the panel, Multiple leaves it as it was.
    #[default]
    ByMode,
    Always,
    /// Every selection inverts the open flag.
    Toggle,
}

/// Catalog and current value, lent to the control for one pass.
#[derive(Clone, Copy, Debug)]
pub struct SelectProps<'a> {
    pub options: &'a [SelectOption],
    pub value: &'a SelectValue,
}

impl<'a> SelectProps<'a> {
    pub fn new(options: &'a [SelectOption], value: &'a SelectValue) -> Self {
        Self { options, value }
    }
}

/// Per-option flags handed to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionState {
    pub index: usize,
    pub selected: bool,
    pub highlighted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_exposes_one_element_slice() {
        let one = SelectOption::new("one", 10);
        let value = SelectValue::Single(Some(one.clone()));
        assert_eq!(value.as_slice(), &[one]);
        assert!(SelectValue::Single(None).is_empty());
    }

    #[test]
    fn empty_matches_mode() {
        assert_eq!(
            SelectValue::empty(SelectMode::Multiple),
            SelectValue::Multiple(vec![])
        );
        assert_eq!(SelectValue::empty(SelectMode::Single).mode(), SelectMode::Single);
    }
}
