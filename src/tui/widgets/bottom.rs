use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span, Text},
};

use crate::tui::{app::App, theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let version_info = Text::from(vec![Line::raw(format!(
        "Pickbox {}",
        env!("CARGO_PKG_VERSION")
    ))])
    .right_aligned();

    let open = app
        .focused
        .is_some_and(|i| app.fields[i].controller.is_open());

    let help_text = if open {
        vec![
            Span::raw("Esc: Close"),
            Span::raw("  ↑/↓: Move"),
            Span::raw("  Enter/Space: Pick"),
            Span::raw("  Tab: Next"),
            Span::raw("  q: Quit"),
        ]
    } else {
        vec![
            Span::raw("Enter/Space/↓: Open"),
            Span::raw("  Tab: Next"),
            Span::raw("  Shift+Tab: Previous"),
            Span::raw("  Click ×: Clear"),
            Span::raw("  q: Quit"),
        ]
    };

    let help = Text::from(Line::from(help_text))
        .left_aligned()
        .style(Theme::new().text_dim());

    frame.render_widget(help, area);
    frame.render_widget(version_info, area);
}
