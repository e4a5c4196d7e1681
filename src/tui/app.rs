use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::document_io::load_document;
use crate::io::host::{Host, RevealTarget, Surface};
use crate::model::{Config, Document};
use crate::ops::panel::{PanelDocument, PanelEntry, Session};

use super::input;
use super::render;
use super::theme::Theme;

/// Surface that holds the latest panel document until the next draw
#[derive(Debug, Default)]
pub struct PanelBuffer {
    pub document: Option<PanelDocument>,
}

impl Surface for PanelBuffer {
    fn set_content(&mut self, document: &PanelDocument) {
        self.document = Some(document.clone());
    }
}

/// A file opened by a "go to": its lines and the 0-based target line
#[derive(Debug, Clone)]
pub struct Preview {
    pub path: String,
    pub lines: Vec<String>,
    pub cursor_line: usize,
}

/// The terminal as a host: the active document is the file named on the
/// command line, and navigation opens a read-only preview pane.
#[derive(Debug, Default)]
pub struct TerminalHost {
    pub active: Option<Document>,
    pub preview: Option<Preview>,
    /// Transient message for the status row
    pub notice: Option<String>,
}

impl TerminalHost {
    /// Re-read the active document from disk. On failure the last good
    /// buffer stays active.
    pub fn reload(&mut self) {
        let Some(current) = &self.active else {
            return;
        };
        match load_document(Path::new(&current.path)) {
            Ok(doc) => self.active = Some(doc),
            Err(e) => tracing::debug!("keeping previous buffer: {}", e),
        }
    }
}

impl Host for TerminalHost {
    fn active_document(&self) -> Option<Document> {
        self.active.clone()
    }

    fn reveal(&mut self, target: RevealTarget) {
        let text = match fs::read_to_string(&target.path) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!("cannot open {}: {}", target.path, e);
                return;
            }
        };
        let lines: Vec<String> = text.lines().map(String::from).collect();
        let cursor_line = target.line.min(lines.len().saturating_sub(1));
        self.preview = Some(Preview {
            path: target.path,
            lines,
            cursor_line,
        });
    }

    fn notify(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

/// Main application state
pub struct App {
    pub host: TerminalHost,
    pub session: Session<PanelBuffer>,
    pub title: String,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Index of the selected entry
    pub cursor: usize,
    /// First visible entry
    pub scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(active: Option<Document>, config: &Config) -> Self {
        let mut host = TerminalHost {
            active,
            ..Default::default()
        };
        let title = config.panel.title.clone();
        let session = Session::open(&mut host, PanelBuffer::default(), title.as_str());

        App {
            host,
            session,
            title,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            should_quit: false,
        }
    }

    /// The most recently rendered panel document
    pub fn document(&self) -> Option<&PanelDocument> {
        self.session.surface().document.as_ref()
    }

    pub fn entry_count(&self) -> usize {
        self.document().map_or(0, |d| d.entries.len())
    }

    pub fn selected(&self) -> Option<&PanelEntry> {
        self.document()?.entries.get(self.cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.entry_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.entry_count().saturating_sub(1);
    }

    /// Navigate to the selected task
    pub fn go_to_selected(&mut self) {
        let Some(msg) = self.selected().map(PanelEntry::go_to) else {
            return;
        };
        self.session.handle(&mut self.host, msg);
    }

    /// Complete the selected task and keep the cursor in range
    pub fn complete_selected(&mut self) {
        let Some(msg) = self.selected().map(PanelEntry::complete) else {
            return;
        };
        self.session.handle(&mut self.host, msg);
        self.move_cursor(0);
    }

    /// Re-read the document, throw away the current session and open a
    /// fresh one
    pub fn reopen(&mut self) {
        self.host.reload();
        self.session = Session::open(&mut self.host, PanelBuffer::default(), self.title.as_str());
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn close_preview(&mut self) -> bool {
        self.host.preview.take().is_some()
    }
}

/// Run the terminal panel
pub fn run(active: Option<Document>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(active, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
