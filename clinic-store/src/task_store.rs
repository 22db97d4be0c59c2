//! Admin dashboard task list.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::store_error::Result;
use crate::seeded_at;
use crate::simulate_latency;
use crate::structs::task::{CreateTaskInput, Task, TaskPriority, TaskStatus, UpdateTaskInput};
use crate::validation::{validate_create_task, validate_update_task};

#[derive(Debug)]
struct TaskTable {
    tasks: Vec<Task>,
    /// Never reused, even after deletes.
    next_id: u64,
}

/// In-memory task store. Reads return owned copies.
#[derive(Debug)]
pub struct TaskStore {
    table: RwLock<TaskTable>,
    latency: Duration,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::with_tasks(seed_tasks())
    }
}

impl TaskStore {
    /// Store pre-filled with the demo tasks.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            table: RwLock::new(TaskTable { tasks, next_id }),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn list(&self) -> Vec<Task> {
        simulate_latency(self.latency).await;
        self.table.read().await.tasks.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Task> {
        simulate_latency(self.latency).await;
        self.table.read().await.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub async fn create(&self, input: CreateTaskInput) -> Result<Task> {
        validate_create_task(&input)?;
        simulate_latency(self.latency).await;

        let mut table = self.table.write().await;
        let now = Utc::now();
        let task = Task {
            id: table.next_id.to_string(),
            title: input.title,
            status: input.status,
            priority: input.priority,
            assignee_id: input.assignee_id,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.tasks.push(task.clone());

        info!(target: "clinic_store::tasks", id = %task.id, "task created");
        Ok(task)
    }

    /// `Ok(None)` when the id is unknown.
    pub async fn update(&self, id: &str, input: UpdateTaskInput) -> Result<Option<Task>> {
        validate_update_task(&input)?;
        simulate_latency(self.latency).await;

        let mut table = self.table.write().await;
        let Some(task) = table.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(target: "clinic_store::tasks", id, "update: unknown id");
            return Ok(None);
        };

        if let Some(title) = input.title {
            task.title = title;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(assignee_id) = input.assignee_id {
            task.assignee_id = Some(assignee_id);
        }
        if let Some(due_date) = input.due_date {
            task.due_date = Some(due_date);
        }
        task.updated_at = Utc::now();

        Ok(Some(task.clone()))
    }

    /// `false` when the id is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        simulate_latency(self.latency).await;

        let mut table = self.table.write().await;
        let before = table.tasks.len();
        table.tasks.retain(|t| t.id != id);
        let removed = table.tasks.len() != before;

        if removed {
            info!(target: "clinic_store::tasks", id, "task deleted");
        }
        removed
    }
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".into(),
            title: "Review patient records".into(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            assignee_id: Some("2".into()),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 25),
            created_at: seeded_at(2026, 2, 20, 9),
            updated_at: seeded_at(2026, 2, 22, 10),
        },
        Task {
            id: "2".into(),
            title: "Update clinic hours".into(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            assignee_id: Some("1".into()),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 28),
            created_at: seeded_at(2026, 2, 21, 9),
            updated_at: seeded_at(2026, 2, 21, 9),
        },
        Task {
            id: "3".into(),
            title: "Prepare quarterly report".into(),
            status: TaskStatus::Done,
            priority: TaskPriority::High,
            assignee_id: Some("2".into()),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 15),
            created_at: seeded_at(2026, 2, 1, 9),
            updated_at: seeded_at(2026, 2, 15, 17),
        },
        Task {
            id: "4".into(),
            title: "Schedule follow-up calls".into(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Low,
            assignee_id: None,
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            created_at: seeded_at(2026, 2, 22, 8),
            updated_at: seeded_at(2026, 2, 22, 8),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::store_error::StoreError;

    fn input(title: &str) -> CreateTaskInput {
        CreateTaskInput {
            title: title.into(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            assignee_id: None,
            due_date: None,
        }
    }

    #[tokio::test]
    async fn seeded_with_demo_tasks() {
        let store = TaskStore::new();
        let tasks = store.list().await;
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[0].title, "Review patient records");
        assert_eq!(tasks[3].assignee_id, None);
    }

    #[tokio::test]
    async fn create_applies_defaults_and_next_id() {
        let store = TaskStore::new();
        let task = store.create(input("Call lab")).await.unwrap();
        assert_eq!(task.id, "5");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(store.get("5").await, Some(task));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = TaskStore::new();
        assert!(store.delete("2").await);
        let task = store.create(input("Another")).await.unwrap();
        assert_eq!(task.id, "5");
        let ids: Vec<String> = store.list().await.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5"]);
    }

    #[tokio::test]
    async fn invalid_create_is_rejected_without_side_effects() {
        let store = TaskStore::new();
        let err = store.create(input("")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "title", .. }));
        assert_eq!(store.list().await.len(), 4);
    }

    #[tokio::test]
    async fn update_merges_and_bumps_timestamp() {
        let store = TaskStore::new();
        let before = store.get("2").await.unwrap();
        let updated = store
            .update(
                "2",
                UpdateTaskInput {
                    status: Some(TaskStatus::Done),
                    ..UpdateTaskInput::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(updated.title, before.title);
        assert!(updated.updated_at > before.updated_at);
        assert_eq!(updated.created_at, before.created_at);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_errors() {
        let store = TaskStore::new();
        assert_eq!(store.get("404").await, None);
        assert_eq!(
            store.update("404", UpdateTaskInput::default()).await.unwrap(),
            None
        );
        assert!(!store.delete("404").await);
    }

    #[tokio::test]
    async fn returned_tasks_are_copies() {
        let store = TaskStore::new();
        let mut t = store.get("1").await.unwrap();
        t.title = "mutated".into();
        assert_eq!(store.get("1").await.unwrap().title, "Review patient records");
    }
}
