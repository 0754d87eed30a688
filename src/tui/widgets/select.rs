use crate::select::{
    ControlId, EventTarget, SelectOption, SelectProps, SelectValue, ValueDisplay, render_value,
};
use crate::tui::{components::select_field::SelectField, hit::HitMap, theme::Theme};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const CLEAR: &str = "×";
const DIVIDER: &str = "│";

/// Rows taken by a closed control.
pub const CONTROL_HEIGHT: u16 = 3;

pub fn render_control(
    frame: &mut Frame<'_>,
    area: Rect,
    field: &SelectField,
    value: &SelectValue,
    hits: &mut HitMap,
) {
    let theme = Theme::new();
    let id = field.id();
    hits.register(area, id, EventTarget::Root);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(field.title.as_str())
        .border_style(if field.is_focused() {
            theme.block_active()
        } else {
            theme.block_inactive()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let caret = if field.controller.is_open() { "▲" } else { "▼" };
    let [value_area, clear_area, _, divider_area, _, caret_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_value_area(frame, value_area, id, value, hits);

    frame.render_widget(Span::styled(CLEAR, theme.clear_button()), clear_area);
    hits.register(clear_area, id, EventTarget::Clear);
    frame.render_widget(Span::styled(DIVIDER, theme.text_dim()), divider_area);
    frame.render_widget(Span::styled(caret, theme.text_dim()), caret_area);
}

fn render_value_area(
    frame: &mut Frame<'_>,
    area: Rect,
    id: ControlId,
    value: &SelectValue,
    hits: &mut HitMap,
) {
    let theme = Theme::new();
    match render_value(value) {
        ValueDisplay::Text(Some(label)) => {
            frame.render_widget(Paragraph::new(label).style(theme.text_normal()), area);
        }
        ValueDisplay::Text(None) => {
            frame.render_widget(Paragraph::new("Select...").style(theme.text_dim()), area);
        }
        ValueDisplay::Tokens(tokens) if tokens.is_empty() => {
            frame.render_widget(Paragraph::new("Select...").style(theme.text_dim()), area);
        }
        ValueDisplay::Tokens(tokens) => {
            let mut spans = Vec::with_capacity(tokens.len() * 2);
            let mut x = area.x;
            for token in tokens {
                let text = format!(" {} {CLEAR} ", token.label());
                let width = UnicodeWidthStr::width(text.as_str()) as u16;
                // Tokens that do not fit whole are left out.
                if x + width > area.right() {
                    break;
                }
                hits.register(
                    Rect::new(x, area.y, width, 1),
                    id,
                    EventTarget::Token(token.index),
                );
                spans.push(Span::styled(text, theme.token()));
                spans.push(Span::raw(" "));
                x += width + 1;
            }
            frame.render_widget(Line::from(spans), area);
        }
    }
}

/// Draw the options panel under `anchor`, kept inside `bounds`.
pub fn render_panel(
    frame: &mut Frame<'_>,
    anchor: Rect,
    bounds: Rect,
    field: &SelectField,
    options: &[SelectOption],
    value: &SelectValue,
    hits: &mut HitMap,
) {
    let theme = Theme::new();
    let id = field.id();
    let rows = field.viewport.height().max(1) as u16;
    let y = anchor.bottom().min(bounds.bottom());
    let height = (rows + 2).min(bounds.bottom().saturating_sub(y));
    let area = Rect::new(anchor.x, y, anchor.width, height);
    if area.is_empty() {
        return;
    }

    frame.render_widget(Clear, area);
    hits.register(area, id, EventTarget::Panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.block_active());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if options.is_empty() {
        frame.render_widget(
            Paragraph::new("No options.")
                .alignment(Alignment::Center)
                .style(theme.text_dim()),
            inner,
        );
        return;
    }

    let props = SelectProps::new(options, value);
    let states = field.controller.option_states(props);
    let offset = field.viewport.offset();
    for (row, state) in states.iter().skip(offset).take(inner.height as usize).enumerate() {
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let option = &options[state.index];

        let marker = if state.selected { "✓ " } else { "  " };
        let style = if state.highlighted {
            theme.option_highlighted()
        } else if state.selected {
            theme.option_selected()
        } else {
            theme.text_normal()
        };

        frame.render_widget(
            Paragraph::new(format!("{marker}{}", option.label)).style(style),
            row_area,
        );
        hits.register(row_area, id, EventTarget::Option(state.index));
    }
}
