use std::sync::LazyLock;

use regex::Regex;

use crate::model::document::Document;
use crate::model::task::{CodeTask, Marker};

/// `TODO:` or `FIXME:`, optional whitespace, then the rest of the line.
/// The capture stops at `\n` or a lone `\r`.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(TODO|FIXME):\s*([^\r\n]*)").expect("marker pattern is valid")
});

/// Scan the active document for marker comments.
///
/// No document yields an empty list; that is not an error.
pub fn extract_tasks(document: Option<&Document>) -> Vec<CodeTask> {
    match document {
        Some(doc) => extract_from_text(&doc.path, &doc.text),
        None => Vec::new(),
    }
}

/// Scan `text` left to right, one task per match, in order of appearance.
pub fn extract_from_text(location: &str, text: &str) -> Vec<CodeTask> {
    let mut tasks = Vec::new();
    let mut counter = LineCounter::new(text);

    for caps in MARKER_RE.captures_iter(text) {
        let (Some(whole), Some(keyword)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(marker) = Marker::from_keyword(keyword.as_str()) else {
            continue;
        };
        let body = caps.get(2).map_or("", |m| m.as_str());

        tasks.push(CodeTask {
            location: location.to_string(),
            line: counter.line_at(whole.start()) + 1,
            text: body.trim().to_string(),
            marker,
        });
    }

    tasks
}

/// Converts byte offsets to 0-based line numbers.
///
/// `\n`, `\r\n` and a lone `\r` each end one line.
///
/// Offsets must be queried in non-decreasing order; each query only scans the
/// text between the previous offset and the new one.
struct LineCounter<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(text: &'a str) -> Self {
        LineCounter {
            text,
            pos: 0,
            line: 0,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        let offset = offset.min(self.text.len());
        if offset > self.pos {
            let bytes = self.text.as_bytes();
            self.line += (self.pos..offset)
                .filter(|&i| match bytes[i] {
                    b'\n' => true,
                    b'\r' => bytes.get(i + 1) != Some(&b'\n'),
                    _ => false,
                })
                .count();
            self.pos = offset;
        }
        self.line
    }
}

/// 0-based line containing `offset`, counted from the start of `text`.
pub fn line_of_offset(text: &str, offset: usize) -> usize {
    LineCounter::new(text).line_at(offset)
}
