use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::{fit_to_width, truncate_to_width};

/// Render the navigated-to file with the target line centered and highlighted
pub fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let Some(preview) = &app.host.preview else {
        return;
    };
    let bg = app.theme.background;

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(
            truncate_to_width(&format!(" {} ", preview.path), area.width.saturating_sub(1) as usize),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    let width = inner.width as usize;
    let start = preview.cursor_line.saturating_sub(height / 2);
    let gutter = (preview.lines.len().max(1)).to_string().len();

    let lines: Vec<Line> = preview
        .lines
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, text)| {
            let is_target = i == preview.cursor_line;
            let row_bg = if is_target { app.theme.selection_bg } else { bg };
            let number = format!("{:>w$} ", i + 1, w = gutter);
            let room = width.saturating_sub(number.len());
            let (text, style) = if is_target {
                (
                    fit_to_width(text, room),
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    truncate_to_width(text, room),
                    Style::default().fg(app.theme.text).bg(row_bg),
                )
            };
            Line::from(vec![
                Span::styled(number, Style::default().fg(app.theme.dim).bg(row_bg)),
                Span::styled(text, style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Preview;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn no_preview_renders_nothing() {
        let app = app_with_text(SAMPLE_TEXT);
        let output = render_to_string(40, 5, |frame, area| {
            render_preview(frame, &app, area);
        });
        assert_eq!(output, "");
    }

    #[test]
    fn shows_numbered_lines_around_target() {
        let mut app = app_with_text(SAMPLE_TEXT);
        app.host.preview = Some(Preview {
            path: "a.ts".into(),
            lines: (1..=20).map(|i| format!("line {}", i)).collect(),
            cursor_line: 10,
        });
        let output = render_to_string(40, 5, |frame, area| {
            render_preview(frame, &app, area);
        });
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 5);
        // Height 5 with a one-row title leaves 4 rows, starting 2 above the target
        assert!(rows[0].contains("a.ts"));
        assert!(rows[1].ends_with("9 line 9"));
        assert!(rows[3].ends_with("11 line 11"));
    }
}
