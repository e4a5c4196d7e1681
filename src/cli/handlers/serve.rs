use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::Serialize;

use crate::io::host::{Host, RevealTarget};
use crate::model::document::Document;
use crate::ops::panel::{HtmlSurface, Session};

/// One outbound line on stdout
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ServeEvent<'a> {
    /// The panel's full content changed
    Render { html: &'a str },
    /// The client should open `file` and move the cursor
    Reveal {
        file: &'a str,
        line: usize,
        column: usize,
    },
}

/// A host whose editor lives on the other end of a JSON-lines pipe.
pub struct ServeHost<W: Write> {
    active: Option<Document>,
    out: W,
}

impl<W: Write> ServeHost<W> {
    pub fn new(active: Option<Document>, out: W) -> Self {
        ServeHost { active, out }
    }

    pub fn emit(&mut self, event: &ServeEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Host for ServeHost<W> {
    fn active_document(&self) -> Option<Document> {
        self.active.clone()
    }

    fn reveal(&mut self, target: RevealTarget) {
        if !Path::new(&target.path).is_file() {
            tracing::debug!(path = %target.path, "cannot open, dropping reveal");
            return;
        }
        let event = ServeEvent::Reveal {
            file: &target.path,
            line: target.line,
            column: target.column,
        };
        if let Err(e) = self.emit(&event) {
            tracing::warn!("could not write reveal event: {}", e);
        }
    }

    fn notify(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Run one panel session: render on open, then one inbound message per
/// input line until EOF.
pub fn run_serve<R: BufRead, W: Write>(
    active: Option<Document>,
    title: &str,
    input: R,
    output: W,
) -> io::Result<W> {
    let mut host = ServeHost::new(active, output);
    let mut session = Session::open(&mut host, HtmlSurface::default(), title);
    host.emit(&ServeEvent::Render {
        html: &session.surface().html,
    })?;

    for line in input.split(b'\n') {
        let line = line?;
        let raw = match std::str::from_utf8(&line) {
            Ok(s) => s.trim(),
            Err(e) => {
                tracing::debug!("ignoring panel message that is not UTF-8: {}", e);
                continue;
            }
        };
        if raw.is_empty() {
            continue;
        }
        if session.handle_raw(&mut host, raw) {
            host.emit(&ServeEvent::Render {
                html: &session.surface().html,
            })?;
        }
    }

    Ok(host.into_inner())
}
