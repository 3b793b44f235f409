//! Task store: the session's collection of committed tasks.
//!
//! The store is append-only. Implementations expose a revision number that
//! changes on every append so derived views can tell when to recompute.

use crate::task::Task;

/// Repository interface for committed tasks.
pub trait TaskStore {
    /// Add a task to the end of the collection. Never fails and performs
    /// no uniqueness check on the id.
    fn append(&mut self, task: Task);

    /// All tasks. Ordering is not part of the contract.
    fn list_all(&self) -> &[Task];

    /// Counter bumped by every append.
    fn revision(&self) -> u64;

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }
}

/// Process-memory store; contents are lost when the session ends.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
    revision: u64,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `tasks`.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut store = Self::new();
        for task in tasks {
            store.append(task);
        }
        store
    }
}

impl TaskStore for InMemoryTaskStore {
    fn append(&mut self, task: Task) {
        self.tasks.push(task);
        self.revision += 1;
    }

    fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
