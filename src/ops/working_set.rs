use crate::model::task::CodeTask;

/// The tasks still shown in one panel session, plus how many completions
/// have been issued in that session.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    tasks: Vec<CodeTask>,
    completed: usize,
}

impl WorkingSet {
    pub fn new() -> Self {
        WorkingSet::default()
    }

    /// Replace the task list wholesale. The counter is untouched.
    pub fn seed(&mut self, tasks: Vec<CodeTask>) {
        self.tasks = tasks;
    }

    /// Remove every task at (location, line) and count one completion.
    ///
    /// The counter moves even when nothing matched: it counts complete
    /// actions, not removed tasks. Returns how many tasks were removed.
    pub fn complete(&mut self, location: &str, line: usize) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.matches(location, line));
        self.completed += 1;
        before - self.tasks.len()
    }

    pub fn tasks(&self) -> &[CodeTask] {
        &self.tasks
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Marker;

    fn task(location: &str, line: usize, text: &str) -> CodeTask {
        CodeTask {
            location: location.into(),
            line,
            text: text.into(),
            marker: Marker::Todo,
        }
    }

    fn seeded() -> WorkingSet {
        let mut set = WorkingSet::new();
        set.seed(vec![task("a.ts", 1, "fix bug"), task("a.ts", 3, "handle null")]);
        set
    }

    #[test]
    fn starts_empty_with_zero_completed() {
        let set = WorkingSet::new();
        assert!(set.is_empty());
        assert_eq!(set.completed(), 0);
    }

    #[test]
    fn complete_removes_matching_and_counts() {
        let mut set = seeded();
        assert_eq!(set.complete("a.ts", 1), 1);
        assert_eq!(set.tasks(), &[task("a.ts", 3, "handle null")]);
        assert_eq!(set.completed(), 1);
    }

    #[test]
    fn complete_without_match_still_counts() {
        let mut set = seeded();
        assert_eq!(set.complete("a.ts", 999), 0);
        assert_eq!(set.tasks().len(), 2);
        assert_eq!(set.completed(), 1);
        set.complete("other.ts", 1);
        assert_eq!(set.tasks().len(), 2);
        assert_eq!(set.completed(), 2);
    }

    #[test]
    fn complete_removes_all_duplicates_and_nothing_else() {
        let mut set = WorkingSet::new();
        set.seed(vec![
            task("a.ts", 2, "first"),
            task("b.ts", 2, "other file"),
            task("a.ts", 2, "second"),
            task("a.ts", 5, "later"),
        ]);
        assert_eq!(set.complete("a.ts", 2), 2);
        assert_eq!(
            set.tasks(),
            &[task("b.ts", 2, "other file"), task("a.ts", 5, "later")]
        );
    }

    #[test]
    fn seed_replaces_tasks_but_keeps_counter() {
        let mut set = seeded();
        set.complete("a.ts", 1);
        set.seed(vec![task("c.ts", 7, "new")]);
        assert_eq!(set.tasks(), &[task("c.ts", 7, "new")]);
        assert_eq!(set.completed(), 1);
    }

    #[test]
    fn repeated_completion_of_same_task() {
        let mut set = seeded();
        set.complete("a.ts", 3);
        set.complete("a.ts", 3);
        assert_eq!(set.tasks().len(), 1);
        assert_eq!(set.completed(), 2);
    }
}
