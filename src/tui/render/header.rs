use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the panel title and the completed-count line
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let completed = app
        .document()
        .map(|d| d.completed_line())
        .unwrap_or_else(|| "Completed tasks: 0".to_string());

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", app.title),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", completed),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_title_and_count() {
        let mut app = app_with_text(SAMPLE_TEXT);
        app.complete_selected();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert_eq!(output, " CodeTasks\n Completed tasks: 1");
    }
}
