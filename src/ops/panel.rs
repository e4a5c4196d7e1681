use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::io::host::{Host, RevealTarget, Surface};
use crate::model::task::{CodeTask, Marker};
use crate::ops::extract::extract_tasks;
use crate::ops::working_set::WorkingSet;

/// Shown in place of the task list when nothing is left
pub const NO_TASKS: &str = "No tasks found.";

/// Notice sent to the host when a session opens
pub const OPENED_NOTICE: &str = "Code Tasks Panel is now active!";

/// Default panel heading
pub const DEFAULT_TITLE: &str = "CodeTasks";

// ---------------------------------------------------------------------------
// Inbound protocol
// ---------------------------------------------------------------------------

/// A message posted back from the rendered panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelMessage {
    /// `{ "command": "goTo", "file": ..., "line": ... }`
    GoTo { file: String, line: usize },
    /// `{ "command": "complete", "file": ..., "line": ... }`
    Complete { file: String, line: usize },
}

/// Decode one inbound message. Unknown commands and malformed payloads
/// decode to `None` and are meant to be dropped.
pub fn decode_message(raw: &str) -> Option<PanelMessage> {
    match serde_json::from_str(raw) {
        Ok(msg) => Some(msg),
        Err(e) => {
            tracing::debug!("ignoring panel message {:?}: {}", raw, e);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Display document
// ---------------------------------------------------------------------------

/// One row of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub location: String,
    pub line: usize,
    pub text: String,
    pub marker: Marker,
}

impl PanelEntry {
    /// The message the "Go To" trigger posts
    pub fn go_to(&self) -> PanelMessage {
        PanelMessage::GoTo {
            file: self.location.clone(),
            line: self.line,
        }
    }

    /// The message the "Complete" trigger posts
    pub fn complete(&self) -> PanelMessage {
        PanelMessage::Complete {
            file: self.location.clone(),
            line: self.line,
        }
    }
}

impl From<&CodeTask> for PanelEntry {
    fn from(task: &CodeTask) -> Self {
        PanelEntry {
            location: task.location.clone(),
            line: task.line,
            text: task.text.clone(),
            marker: task.marker,
        }
    }
}

/// The full rendered state of a panel: always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDocument {
    pub title: String,
    pub completed: usize,
    pub entries: Vec<PanelEntry>,
}

impl PanelDocument {
    pub fn from_working_set(title: &str, set: &WorkingSet) -> Self {
        PanelDocument {
            title: title.to_string(),
            completed: set.completed(),
            entries: set.tasks().iter().map(PanelEntry::from).collect(),
        }
    }

    pub fn completed_line(&self) -> String {
        format!("Completed tasks: {}", self.completed)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Escape text for use in HTML content and double- or single-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body { font-family: Arial, sans-serif; padding: 10px; }
.task { margin-bottom: 10px; padding: 5px; border: 1px solid #ccc; }
.task button { margin-left: 10px; }
.marker { font-size: 0.8em; opacity: 0.7; }";

const SCRIPT: &str = r#"const bridge = typeof acquireVsCodeApi === 'function' ? acquireVsCodeApi() : window.parent;
document.getElementById('tasks').addEventListener('click', (event) => {
    const button = event.target.closest('button[data-command]');
    if (!button) { return; }
    bridge.postMessage({
        command: button.dataset.command,
        file: button.dataset.file,
        line: Number(button.dataset.line),
    }, '*');
});"#;

/// Render the panel as a standalone HTML page.
pub fn render_html(doc: &PanelDocument) -> String {
    let mut items = String::new();
    for entry in &doc.entries {
        let file = escape_html(&entry.location);
        // Writing to a String cannot fail
        let _ = write!(
            items,
            "<div class=\"task\">\
<span class=\"marker\">{marker}</span> <strong>{file}</strong> (Line {line}): {text}\
<button data-command=\"goTo\" data-file=\"{file}\" data-line=\"{line}\">Go To</button>\
<button data-command=\"complete\" data-file=\"{file}\" data-line=\"{line}\">Complete</button>\
</div>\n",
            marker = entry.marker.keyword(),
            file = file,
            line = entry.line,
            text = escape_html(&entry.text),
        );
    }
    if items.is_empty() {
        items = format!("<p>{}</p>", NO_TASKS);
    }

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"UTF-8\">
<title>{title}</title>
<style>
{style}
</style>
</head>
<body>
<h2>{title}</h2>
<p>{completed}</p>
<div id=\"tasks\">{items}</div>
<script>
{script}
</script>
</body>
</html>
",
        title = escape_html(&doc.title),
        style = STYLE,
        completed = doc.completed_line(),
        items = items,
        script = SCRIPT,
    )
}

/// A surface that keeps the latest HTML render.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    pub html: String,
    pub renders: usize,
}

impl Surface for HtmlSurface {
    fn set_content(&mut self, document: &PanelDocument) {
        self.html = render_html(document);
        self.renders += 1;
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One open panel: its own working set and counter, bound to one surface.
pub struct Session<S: Surface> {
    title: String,
    working: WorkingSet,
    surface: S,
}

impl<S: Surface> Session<S> {
    /// Scan the host's active document, seed a fresh working set, and
    /// render it into `surface`.
    pub fn open<H: Host + ?Sized>(host: &mut H, surface: S, title: impl Into<String>) -> Self {
        let document = host.active_document();
        let tasks = extract_tasks(document.as_ref());
        tracing::debug!(
            document = document.as_ref().map(|d| d.path.as_str()),
            tasks = tasks.len(),
            "opening task panel"
        );

        let mut working = WorkingSet::new();
        working.seed(tasks);
        let mut session = Session {
            title: title.into(),
            working,
            surface,
        };
        session.render();
        host.notify(OPENED_NOTICE);
        session
    }

    /// Decode and handle a raw inbound message. Returns whether the panel
    /// was re-rendered.
    pub fn handle_raw<H: Host + ?Sized>(&mut self, host: &mut H, raw: &str) -> bool {
        match decode_message(raw) {
            Some(msg) => self.handle(host, msg),
            None => false,
        }
    }

    /// Handle one inbound message. Returns whether the panel was re-rendered.
    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, msg: PanelMessage) -> bool {
        match msg {
            PanelMessage::GoTo { file, line } => {
                tracing::debug!(file = %file, line, "navigating to task");
                host.reveal(RevealTarget {
                    path: file,
                    line: line.saturating_sub(1),
                    column: 0,
                });
                false
            }
            PanelMessage::Complete { file, line } => {
                let removed = self.working.complete(&file, line);
                tracing::debug!(file = %file, line, removed, "completed task");
                self.render();
                true
            }
        }
    }

    /// The display document for the current state
    pub fn document(&self) -> PanelDocument {
        PanelDocument::from_working_set(&self.title, &self.working)
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn render(&mut self) {
        let doc = self.document();
        self.surface.set_content(&doc);
    }
}
