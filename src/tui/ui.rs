use super::app::App;
use super::utils::centered_column;
use super::widgets::{bottom, header, select};
use ratatui::prelude::*;

const COLUMN_WIDTH: u16 = 48;

pub fn ui(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    header::render(frame, layout[0], app);
    bottom::render(frame, layout[2], app);

    let column = centered_column(COLUMN_WIDTH, layout[1]);
    let mut constraints = Vec::new();
    for _ in &app.fields {
        constraints.push(Constraint::Length(select::CONTROL_HEIGHT));
        constraints.push(Constraint::Length(1));
    }
    let rows = Layout::vertical(constraints).split(column);

    app.hits.clear();
    for (i, field) in app.fields.iter().enumerate() {
        select::render_control(frame, rows[i * 2], field, &app.values[i], &mut app.hits);
    }

    // Panels go last so they sit on top of the controls below them.
    for (i, field) in app.fields.iter().enumerate() {
        if field.controller.is_open() {
            select::render_panel(
                frame,
                rows[i * 2],
                layout[1],
                field,
                &app.options,
                &app.values[i],
                &mut app.hits,
            );
        }
    }
}
