use serde::Serialize;

use crate::model::task::{CodeTask, Marker};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub file: String,
    pub line: usize,
    pub marker: Marker,
    pub text: String,
}

pub fn task_to_json(task: &CodeTask) -> TaskJson {
    TaskJson {
        file: task.location.clone(),
        line: task.line,
        marker: task.marker,
        text: task.text.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a task as `path:line: MARKER text`
pub fn format_task_line(task: &CodeTask) -> String {
    if task.text.is_empty() {
        format!("{}:{}: {}", task.location, task.line, task.marker.keyword())
    } else {
        format!(
            "{}:{}: {} {}",
            task.location,
            task.line,
            task.marker.keyword(),
            task.text
        )
    }
}
