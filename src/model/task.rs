use serde::Serialize;

/// Which marker keyword introduced a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Todo,
    Fixme,
}

impl Marker {
    /// The keyword as it appears in source text
    pub fn keyword(self) -> &'static str {
        match self {
            Marker::Todo => "TODO",
            Marker::Fixme => "FIXME",
        }
    }

    /// Parse a matched keyword back into a marker
    pub fn from_keyword(s: &str) -> Option<Marker> {
        match s {
            "TODO" => Some(Marker::Todo),
            "FIXME" => Some(Marker::Fixme),
            _ => None,
        }
    }
}

/// One marker occurrence found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTask {
    /// Path of the document the marker was found in
    pub location: String,
    /// 1-based line number at scan time
    pub line: usize,
    /// Trimmed text following the marker
    pub text: String,
    pub marker: Marker,
}

impl CodeTask {
    /// Whether this task is identified by the given (location, line) pair
    pub fn matches(&self, location: &str, line: usize) -> bool {
        self.location == location && self.line == line
    }
}
