use super::task::Task;

/// One rendered row: the index it acts on for this pass, plus its text.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub index: usize,
    pub label: String,
    pub done: bool,
}

/// Ordered task sequence. Position is the only identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new pending task. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.tasks.push(Task::new(text));
        true
    }

    /// Appends a stored record as-is.
    pub fn push_restored(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn delete(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Marks the task at `index` done. Returns `false` only when out of
    /// range; an entry that cannot hold a flag is left as it is.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.mark_done();
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> Vec<TaskRow> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskRow {
                index,
                label: task.label(index),
                done: task.is_done(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(items: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for item in items {
            assert!(list.add(item));
        }
        list
    }

    #[test]
    fn add_appends_pending_task() {
        let mut list = list_of(&["one"]);
        assert!(list.add("buy milk"));
        assert_eq!(list.len(), 2);
        let last = list.get(1).unwrap();
        assert_eq!(last.text(), "buy milk");
        assert!(!last.is_done());
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut list = list_of(&["one"]);
        assert!(!list.add(""));
        assert!(!list.add("   \t"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn mark_is_idempotent() {
        let mut once = list_of(&["a", "b"]);
        once.mark(1);
        let mut twice = once.clone();
        assert!(twice.mark(1));
        assert_eq!(once, twice);
        assert!(twice.get(1).unwrap().is_done());
        assert!(!twice.get(0).unwrap().is_done());
    }

    #[test]
    fn mark_out_of_range_is_noop() {
        let mut list = list_of(&["a"]);
        let before = list.clone();
        assert!(!list.mark(3));
        assert_eq!(list, before);
    }

    #[test]
    fn delete_out_of_range_leaves_list_unchanged() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        assert!(list.delete(2).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn delete_shifts_later_rows_down() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.delete(0).unwrap();
        assert_eq!(removed.text(), "a");

        let rows = list.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].label, "1. b ");
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].label, "2. c ");
    }
}
