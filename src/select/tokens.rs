use super::controller::SelectController;
use super::option::SelectOption;
use super::value::{SelectProps, SelectValue};

/// One removable chip in a multiple select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub index: usize,
    pub option: &'a SelectOption,
}

impl<'a> Token<'a> {
    pub fn label(&self) -> &'a str {
        &self.option.label
    }

    /// Picks the token's option again, which removes it from a multiple
    /// value. Hosts route token clicks here, never through the root toggle.
    pub fn dismiss(
        &self,
        controller: &mut SelectController,
        props: SelectProps<'_>,
    ) -> Option<SelectValue> {
        controller.select(props, self.option)
    }
}

/// How the current value is shown inside the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueDisplay<'a> {
    Tokens(Vec<Token<'a>>),
    Text(Option<&'a str>),
}

pub fn render_value(value: &SelectValue) -> ValueDisplay<'_> {
    match value {
        SelectValue::Multiple(options) => ValueDisplay::Tokens(
            options
                .iter()
                .enumerate()
                .map(|(index, option)| Token { index, option })
                .collect(),
        ),
        SelectValue::Single(option) => ValueDisplay::Text(option.as_ref().map(|o| o.label.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_value_renders_one_token_per_option() {
        let value = SelectValue::Multiple(vec![
            SelectOption::new("one", 10),
            SelectOption::new("two", 20),
        ]);
        let ValueDisplay::Tokens(tokens) = render_value(&value) else {
            panic!("expected tokens");
        };
        let labels: Vec<_> = tokens.iter().map(Token::label).collect();
        assert_eq!(labels, ["one", "two"]);
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn single_value_renders_label_text() {
        let value = SelectValue::Single(Some(SelectOption::new("one", 10)));
        assert_eq!(render_value(&value), ValueDisplay::Text(Some("one")));
        assert_eq!(render_value(&SelectValue::Single(None)), ValueDisplay::Text(None));
    }

    #[test]
    fn dismiss_removes_token_option() {
        let options = vec![SelectOption::new("one", 10), SelectOption::new("two", 20)];
        let value = SelectValue::Multiple(options.clone());
        let props = SelectProps::new(&options, &value);
        let mut controller = SelectController::multiple();

        let ValueDisplay::Tokens(tokens) = render_value(&value) else {
            panic!("expected tokens");
        };
        let next = tokens[0].dismiss(&mut controller, props);
        assert_eq!(next, Some(SelectValue::Multiple(vec![options[1].clone()])));
        assert!(!controller.is_open());
    }
}
