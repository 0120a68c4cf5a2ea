//! The day's task list.
//!
//! Tasks carry a stable synthetic id assigned at creation, so toggling and
//! deleting address a task directly instead of through its rendered
//! position. A stale id is a rejected intent, never an out-of-bounds
//! access. The whole list is serialized as one JSON array on every
//! mutation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Rebuilds a list from persisted tasks and the persisted id counter.
    ///
    /// The counter is bumped past any id already in use, which also repairs
    /// data written before ids existed (all ids deserialized as 0).
    pub fn from_parts(mut tasks: Vec<Task>, next_id: u64) -> Self {
        let mut next_id = next_id.max(1);
        for task in &mut tasks {
            if task.id == 0 {
                task.id = next_id;
                next_id += 1;
            } else if task.id >= next_id {
                next_id = task.id + 1;
            }
        }
        Self { tasks, next_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new pending task and returns its assigned id.
    pub fn add(&mut self, text: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        id
    }

    /// Flips the completion flag of the task with `id`. Returns `false`
    /// when no such task exists.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`, shifting later tasks up. Returns `false`
    /// when no such task exists.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }
}
