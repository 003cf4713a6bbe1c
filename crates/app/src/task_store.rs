use chrono::NaiveDate;
use shared_types::{Task, TaskDraft};

use crate::storage::{load_json, save_json, KeyValueStore};

/// Storage key for the JSON-encoded task list.
pub const TASKS_KEY: &str = "tasks";

/// The task manager's list, written back to storage after every change.
#[derive(Debug, Clone)]
pub struct TaskStore<S: KeyValueStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load the saved list. A missing or unreadable list starts empty.
    pub fn load(store: S) -> Self {
        let tasks = load_json(&store, TASKS_KEY).unwrap_or_default();
        Self { store, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a task from a form draft. Returns the validation message when
    /// the draft is rejected.
    pub fn add(&mut self, draft: TaskDraft, today: NaiveDate) -> Result<&Task, String> {
        draft.validate()?;
        self.tasks.push(draft.into_task(today));
        self.persist();
        let idx = self.tasks.len() - 1;
        Ok(&self.tasks[idx])
    }

    /// Apply an edited draft to an existing task. Unknown ids are ignored.
    pub fn update(&mut self, id: &str, draft: &TaskDraft, today: NaiveDate) -> Result<(), String> {
        draft.validate()?;
        if self.modify(id, |task| draft.apply_to(task, today)) {
            self.persist();
        }
        Ok(())
    }

    pub fn delete(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    pub fn toggle(&mut self, id: &str) {
        if self.modify(id, Task::toggle_completed) {
            self.persist();
        }
    }

    pub fn set_progress(&mut self, id: &str, progress: u8) {
        if self.modify(id, |task| task.set_progress(progress)) {
            self.persist();
        }
    }

    fn modify(&mut self, id: &str, f: impl FnOnce(&mut Task)) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                f(task);
                true
            }
            None => {
                tracing::debug!(id, "no task with this id");
                false
            }
        }
    }

    fn persist(&self) {
        save_json(&self.store, TASKS_KEY, &self.tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use shared_types::{TaskPriority, TaskStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn draft(title: &str, due: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            due_date: due.to_string(),
            priority: TaskPriority::High,
        }
    }

    fn add(store: &mut TaskStore<MemoryStore>, title: &str) -> String {
        store.add(draft(title, "2024-03-20"), today()).unwrap().id.clone()
    }

    #[test]
    fn starts_empty_without_saved_tasks() {
        let store = TaskStore::load(MemoryStore::new());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn invalid_json_starts_empty() {
        let mem = MemoryStore::new();
        mem.set(TASKS_KEY, "[{\"id\": 3");
        assert!(TaskStore::load(mem).tasks().is_empty());
    }

    #[test]
    fn contradicting_saved_status_is_repaired_on_load() {
        let mem = MemoryStore::new();
        mem.set(
            TASKS_KEY,
            r#"[{"id":"t1","title":"Legacy","due_date":"2024-03-01","priority":"low","status":"completed","progress":40}]"#,
        );

        let store = TaskStore::load(mem);
        let task = store.get("t1").unwrap();
        assert_eq!((task.status, task.progress), (TaskStatus::InProgress, 40));
        assert!(!task.is_completed());
    }

    #[test]
    fn add_persists_and_reloads() {
        let mem = MemoryStore::new();
        let mut store = TaskStore::load(mem.clone());
        let id = add(&mut store, "Write report");

        let reloaded = TaskStore::load(mem);
        let task = reloaded.get(&id).unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.progress, 0);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mem = MemoryStore::new();
        let mut store = TaskStore::load(mem.clone());
        let err = store.add(draft("   ", "2024-03-20"), today()).unwrap_err();
        assert_eq!(err, "Please enter a task title");
        assert_eq!(mem.get(TASKS_KEY), None);
    }

    #[test]
    fn malformed_due_date_falls_back_to_today() {
        let mut store = TaskStore::load(MemoryStore::new());
        let task = store.add(draft("Plan", "next week"), today()).unwrap();
        assert_eq!(task.due_date, today());
    }

    #[test]
    fn update_changes_fields_in_place() {
        let mem = MemoryStore::new();
        let mut store = TaskStore::load(mem.clone());
        let id = add(&mut store, "Draft");

        let edit = TaskDraft {
            title: "Final".into(),
            due_date: "2024-04-01".into(),
            priority: TaskPriority::Low,
        };
        store.update(&id, &edit, today()).unwrap();

        let task = TaskStore::load(mem).get(&id).cloned().unwrap();
        assert_eq!(task.title, "Final");
        assert_eq!(task.priority, TaskPriority::Low);
        assert_eq!(task.due_date_input(), "2024-04-01");
    }

    #[test]
    fn toggle_flips_between_completed_and_todo() {
        let mem = MemoryStore::new();
        let mut store = TaskStore::load(mem.clone());
        let id = add(&mut store, "Ship");

        store.set_progress(&id, 40);
        store.toggle(&id);
        let task = TaskStore::load(mem.clone()).get(&id).cloned().unwrap();
        assert_eq!((task.status, task.progress), (TaskStatus::Completed, 100));

        store.toggle(&id);
        let task = TaskStore::load(mem).get(&id).cloned().unwrap();
        assert_eq!((task.status, task.progress), (TaskStatus::Todo, 0));
    }

    #[test]
    fn progress_drives_status() {
        let mut store = TaskStore::load(MemoryStore::new());
        let id = add(&mut store, "Review");

        store.set_progress(&id, 55);
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::InProgress);
        store.set_progress(&id, 100);
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Completed);
        store.set_progress(&id, 0);
        assert_eq!(store.get(&id).unwrap().status, TaskStatus::Todo);
    }

    #[test]
    fn delete_removes_and_persists() {
        let mem = MemoryStore::new();
        let mut store = TaskStore::load(mem.clone());
        let keep = add(&mut store, "Keep");
        let drop = add(&mut store, "Drop");

        store.delete(&drop);
        let reloaded = TaskStore::load(mem);
        assert_eq!(reloaded.tasks().len(), 1);
        assert!(reloaded.get(&keep).is_some());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = TaskStore::load(MemoryStore::new());
        add(&mut store, "Only");
        store.toggle("missing");
        store.delete("missing");
        store.set_progress("missing", 50);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
    }
}
