use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::panel::NO_TASKS;
use crate::tui::app::App;
use crate::util::unicode::{display_width, fit_to_width, truncate_to_width};

/// Width of the marker column: " FIXME "
const MARKER_COL: usize = 7;

/// Render the task list, keeping the cursor row in view
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let entries = match app.document() {
        Some(doc) if !doc.is_empty() => doc.entries.clone(),
        _ => {
            let empty = Paragraph::new(format!(" {}", NO_TASKS))
                .style(Style::default().fg(app.theme.dim).bg(bg));
            frame.render_widget(empty, area);
            return;
        }
    };

    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, entry) in entries
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let marker = format!(" {:<5} ", entry.marker.keyword());
        let location = format!("{}:{}", entry.location, entry.line);
        let rest = width.saturating_sub(MARKER_COL);
        // Location gets at most half of what is left after the marker
        let location = truncate_to_width(&location, (rest / 2).max(1));
        let text_room = rest.saturating_sub(display_width(&location) + 2);

        let text_style = if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let mut spans = vec![
            Span::styled(
                truncate_to_width(&marker, width),
                Style::default()
                    .fg(app.theme.marker_color(entry.marker))
                    .bg(row_bg),
            ),
            Span::styled(location, Style::default().fg(app.theme.dim).bg(row_bg)),
            Span::styled("  ", Style::default().bg(row_bg)),
        ];
        if is_cursor {
            spans.push(Span::styled(fit_to_width(&entry.text, text_room), text_style));
        } else {
            spans.push(Span::styled(
                truncate_to_width(&entry.text, text_room),
                text_style,
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
