use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.host.notice = None;

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Esc) => {
            // Esc closes the preview first
            if !app.close_preview() {
                app.should_quit = true;
            }
        }
        (_, KeyCode::Down | KeyCode::Char('j')) => app.move_cursor(1),
        (_, KeyCode::Up | KeyCode::Char('k')) => app.move_cursor(-1),
        (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::End | KeyCode::Char('G')) => app.jump_to_end(),
        (_, KeyCode::Enter | KeyCode::Char('g')) => app.go_to_selected(),
        (_, KeyCode::Char('c') | KeyCode::Char('x')) => app.complete_selected(),
        (_, KeyCode::Char('r')) => app.reopen(),
        _ => {}
    }
}
