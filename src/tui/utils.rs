use ratatui::prelude::*;

/// A horizontally centered column at most `width` cells wide, with a blank
/// row above it.
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(width),
        Constraint::Fill(1),
    ])
    .areas(r);

    let [_, body] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(column);
    body
}
