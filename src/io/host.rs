use crate::model::document::Document;
use crate::ops::panel::PanelDocument;

/// Where a navigation request should land: a path and a 0-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub path: String,
    pub line: usize,
    pub column: usize,
}

/// The editor-like environment a panel session runs inside.
pub trait Host {
    /// The buffer currently in focus, if any.
    fn active_document(&self) -> Option<Document>;

    /// Open `target.path`, bring it into focus, put the cursor at the target
    /// position and scroll it into view.
    ///
    /// Fire-and-forget: the session never learns whether this succeeded. A
    /// host that cannot open the path drops the request.
    fn reveal(&mut self, target: RevealTarget);

    /// A short informational notice (e.g. "panel is now active").
    fn notify(&mut self, _message: &str) {}
}

/// The display surface a session renders into.
pub trait Surface {
    /// Replace the whole displayed content.
    fn set_content(&mut self, document: &PanelDocument);
}
