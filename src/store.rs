// In-memory store owning the project and task collections

use std::sync::mpsc::{self, Receiver, Sender};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::entity::{Entity, matches_query};
use crate::error::StoreError;
use crate::event::StoreEvent;
use crate::filter::{ProjectFilter, TaskFilter};
use crate::models::{
    CreateProjectInput, CreateTaskInput, Priority, Project, ProjectStats, ProjectStatus, Task,
    TaskStats, TaskStatus, UpdateProjectInput, UpdateTaskInput,
};

/// In-memory store for projects and tasks.
///
/// The store is the sole writer of its collections: callers get defensive
/// copies back, insertion order preserved. Lookups that find nothing return
/// `None`/`false` rather than an error; only malformed input is rejected.
///
/// No interior locking: the store assumes a single logical caller. It is
/// `Send`, so wrap it in a `Mutex` if it ever has to cross threads.
pub struct Store {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            tasks: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Create a store seeded with a small demo dataset: two projects and two
    /// tasks attached to the first one.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        let ecommerce = store
            .create_project(CreateProjectInput {
                name: "E-commerce Platform".to_string(),
                description: "Online sales platform development".to_string(),
                status: ProjectStatus::Active,
                priority: Priority::High,
                estimated_hours: Some(120.0),
            })
            .expect("sample project input is valid");

        store
            .create_project(CreateProjectInput {
                name: "Mobile Delivery App".to_string(),
                description: "Food delivery application".to_string(),
                status: ProjectStatus::Active,
                priority: Priority::Medium,
                estimated_hours: Some(80.0),
            })
            .expect("sample project input is valid");

        store
            .create_task(CreateTaskInput {
                title: "Set up the database".to_string(),
                description: "Create the initial schema and tables".to_string(),
                project_id: ecommerce.id.clone(),
                status: TaskStatus::Completed,
                priority: Priority::High,
                assignee: Some("Joana Silva".to_string()),
                due_date: None,
                estimated_hours: Some(8.0),
            })
            .expect("sample task input is valid");

        store
            .create_task(CreateTaskInput {
                title: "Implement authentication".to_string(),
                description: "Login and registration flow".to_string(),
                project_id: ecommerce.id,
                status: TaskStatus::InProgress,
                priority: Priority::High,
                assignee: Some("Maria Santos".to_string()),
                due_date: None,
                estimated_hours: Some(12.0),
            })
            .expect("sample task input is valid");

        store
    }

    /// Subscribe to change notifications.
    ///
    /// Every successful mutation is broadcast to all live subscribers.
    /// Receivers that have been dropped are pruned on the next emit.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: StoreEvent) {
        debug!(id = event.entity_id(), "store event");
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn new_id() -> String {
        // UUIDv7: time-ordered and collision-free, unlike the wall clock
        Uuid::now_v7().to_string()
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// Create a project. The store assigns the identifier and both
    /// timestamps; at creation `created_at == updated_at`.
    pub fn create_project(&mut self, input: CreateProjectInput) -> Result<Project, StoreError> {
        require_non_empty("name", &input.name)?;
        require_positive("estimated_hours", input.estimated_hours)?;

        let now = Utc::now();
        let project = Project {
            id: Self::new_id(),
            name: input.name,
            description: input.description,
            status: input.status,
            priority: input.priority,
            estimated_hours: input.estimated_hours,
            created_at: now,
            updated_at: now,
        };

        info!(id = %project.id, name = %project.name, "project created");
        self.projects.push(project.clone());
        self.emit(StoreEvent::ProjectCreated {
            project: project.clone(),
        });
        Ok(project)
    }

    /// All projects, insertion order, as a defensive copy.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// A single project, or `None` if the id is unknown.
    pub fn project(&self, id: &str) -> Option<Project> {
        find_by_id(&self.projects, id).cloned()
    }

    /// Merge the `Some` fields of `input` over the project with this id.
    ///
    /// Returns `Ok(None)` when the id is unknown; `id` and `created_at` are
    /// never touched, `updated_at` is refreshed.
    pub fn update_project(
        &mut self,
        id: &str,
        input: UpdateProjectInput,
    ) -> Result<Option<Project>, StoreError> {
        if let Some(name) = &input.name {
            require_non_empty("name", name)?;
        }
        require_positive("estimated_hours", input.estimated_hours)?;

        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            debug!(id, "update_project: not found");
            return Ok(None);
        };

        if let Some(name) = input.name {
            project.name = name;
        }
        if let Some(description) = input.description {
            project.description = description;
        }
        if let Some(status) = input.status {
            project.status = status;
        }
        if let Some(priority) = input.priority {
            project.priority = priority;
        }
        if let Some(hours) = input.estimated_hours {
            project.estimated_hours = Some(hours);
        }
        project.updated_at = Utc::now();

        let project = project.clone();
        info!(id = %project.id, "project updated");
        self.emit(StoreEvent::ProjectUpdated {
            project: project.clone(),
        });
        Ok(Some(project))
    }

    /// Delete a project and every task referencing it.
    ///
    /// Returns `false` when the id is unknown; in that case neither
    /// collection changes.
    pub fn delete_project(&mut self, id: &str) -> bool {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            debug!(id, "delete_project: not found");
            return false;
        };

        let before = self.tasks.len();
        self.tasks.retain(|task| task.project_id != id);
        let cascaded_tasks = before - self.tasks.len();
        self.projects.remove(index);

        info!(id, cascaded_tasks, "project deleted");
        self.emit(StoreEvent::ProjectDeleted {
            id: id.to_string(),
            cascaded_tasks,
        });
        true
    }

    /// Case-insensitive substring search over project name and description.
    /// An empty query returns every project.
    pub fn search_projects(&self, query: &str) -> Vec<Project> {
        search(&self.projects, query)
    }

    /// Projects matching every present criterion of the filter.
    pub fn filter_projects(&self, filter: &ProjectFilter) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Project counts grouped by status.
    pub fn project_stats(&self) -> ProjectStats {
        ProjectStats {
            total: self.projects.len(),
            active: self
                .projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count(),
            completed: self
                .projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Completed)
                .count(),
        }
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// Create a task. `project_id` is recorded as given; the store does not
    /// check that the referenced project exists.
    pub fn create_task(&mut self, input: CreateTaskInput) -> Result<Task, StoreError> {
        require_non_empty("title", &input.title)?;
        require_non_empty("project_id", &input.project_id)?;
        require_positive("estimated_hours", input.estimated_hours)?;

        let now = Utc::now();
        let task = Task {
            id: Self::new_id(),
            title: input.title,
            description: input.description,
            project_id: input.project_id,
            status: input.status,
            priority: input.priority,
            assignee: input.assignee,
            due_date: input.due_date,
            estimated_hours: input.estimated_hours,
            created_at: now,
            updated_at: now,
        };

        info!(id = %task.id, title = %task.title, project_id = %task.project_id, "task created");
        self.tasks.push(task.clone());
        self.emit(StoreEvent::TaskCreated { task: task.clone() });
        Ok(task)
    }

    /// All tasks, insertion order, as a defensive copy.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// A single task, or `None` if the id is unknown.
    pub fn task(&self, id: &str) -> Option<Task> {
        find_by_id(&self.tasks, id).cloned()
    }

    /// Every task whose `project_id` equals the argument, original order.
    pub fn tasks_by_project(&self, project_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Merge the `Some` fields of `input` over the task with this id.
    /// Returns `Ok(None)` when the id is unknown.
    pub fn update_task(
        &mut self,
        id: &str,
        input: UpdateTaskInput,
    ) -> Result<Option<Task>, StoreError> {
        if let Some(title) = &input.title {
            require_non_empty("title", title)?;
        }
        if let Some(project_id) = &input.project_id {
            require_non_empty("project_id", project_id)?;
        }
        require_positive("estimated_hours", input.estimated_hours)?;

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "update_task: not found");
            return Ok(None);
        };

        if let Some(title) = input.title {
            task.title = title;
        }
        if let Some(description) = input.description {
            task.description = description;
        }
        if let Some(project_id) = input.project_id {
            task.project_id = project_id;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(assignee) = input.assignee {
            task.assignee = Some(assignee);
        }
        if let Some(due_date) = input.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(hours) = input.estimated_hours {
            task.estimated_hours = Some(hours);
        }
        task.updated_at = Utc::now();

        let task = task.clone();
        info!(id = %task.id, "task updated");
        self.emit(StoreEvent::TaskUpdated { task: task.clone() });
        Ok(Some(task))
    }

    /// Delete a single task. Returns `false` when the id is unknown.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(id, "delete_task: not found");
            return false;
        };

        self.tasks.remove(index);
        info!(id, "task deleted");
        self.emit(StoreEvent::TaskDeleted { id: id.to_string() });
        true
    }

    /// Case-insensitive substring search over task title and description.
    /// An empty query returns every task.
    pub fn search_tasks(&self, query: &str) -> Vec<Task> {
        search(&self.tasks, query)
    }

    /// Tasks matching every present criterion of the filter.
    pub fn filter_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    /// Task counts grouped by status.
    pub fn task_stats(&self) -> TaskStats {
        TaskStats {
            total: self.tasks.len(),
            todo: self
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Todo)
                .count(),
            in_progress: self
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            completed: self
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
        }
    }
}

// ============================================================================
// Generic helpers over any entity collection
// ============================================================================

fn find_by_id<'a, T: Entity>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn search<T: Entity>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(*item, query))
        .cloned()
        .collect()
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::EmptyField { field });
    }
    Ok(())
}

fn require_positive(field: &'static str, value: Option<f64>) -> Result<(), StoreError> {
    if let Some(v) = value
        && v <= 0.0
    {
        return Err(StoreError::NonPositiveNumber { field, value: v });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_input(name: &str) -> CreateProjectInput {
        CreateProjectInput {
            name: name.to_string(),
            description: "A project".to_string(),
            status: ProjectStatus::Active,
            priority: Priority::Medium,
            estimated_hours: None,
        }
    }

    fn task_input(title: &str, project_id: &str) -> CreateTaskInput {
        CreateTaskInput {
            title: title.to_string(),
            description: "A task".to_string(),
            project_id: project_id.to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            assignee: None,
            due_date: None,
            estimated_hours: None,
        }
    }

    #[test]
    fn test_create_project_assigns_fresh_identity() {
        let mut store = Store::new();

        let first = store.create_project(project_input("First")).unwrap();
        let second = store.create_project(project_input("Second")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(store.projects().len(), 2);
        // Insertion order preserved
        assert_eq!(store.projects()[0].name, "First");
    }

    #[test]
    fn test_create_task_does_not_check_project_exists() {
        let mut store = Store::new();

        let task = store.create_task(task_input("Orphan", "no-such-project")).unwrap();
        assert_eq!(task.project_id, "no-such-project");
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = Store::new();
        let project = store.create_project(project_input("Lookup")).unwrap();

        assert_eq!(store.project(&project.id).unwrap().name, "Lookup");
        assert!(store.project("nonexistent").is_none());
        assert!(store.task("nonexistent").is_none());
    }

    #[test]
    fn test_update_project_merges_partial_fields() {
        let mut store = Store::new();
        let created = store
            .create_project(CreateProjectInput {
                estimated_hours: Some(40.0),
                ..project_input("Original")
            })
            .unwrap();

        let updated = store
            .update_project(
                &created.id,
                UpdateProjectInput {
                    name: Some("Renamed".to_string()),
                    status: Some(ProjectStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("project exists");

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.status, ProjectStatus::Completed);
        // Absent fields unchanged
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.priority, created.priority);
        assert_eq!(updated.estimated_hours, Some(40.0));
        // Identity and creation time untouched, updated_at refreshed
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_update_nonexistent_is_a_sentinel_not_an_error() {
        let mut store = Store::with_sample_data();
        let tasks_before = store.tasks();
        let projects_before = store.projects();

        let result = store
            .update_task(
                "nonexistent",
                UpdateTaskInput {
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(result.is_none());

        let result = store
            .update_project(
                "nonexistent",
                UpdateProjectInput {
                    name: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(result.is_none());

        // Both collections untouched
        assert_eq!(store.tasks().len(), tasks_before.len());
        assert_eq!(store.projects().len(), projects_before.len());
    }

    #[test]
    fn test_delete_project_cascades_to_its_tasks() {
        let mut store = Store::new();
        let p1 = store.create_project(project_input("P1")).unwrap();
        let p2 = store.create_project(project_input("P2")).unwrap();
        store.create_task(task_input("T1", &p1.id)).unwrap();
        store.create_task(task_input("T2", &p1.id)).unwrap();
        let survivor = store.create_task(task_input("T3", &p2.id)).unwrap();

        assert!(store.delete_project(&p1.id));

        assert!(store.project(&p1.id).is_none());
        assert!(store.tasks_by_project(&p1.id).is_empty());
        // Tasks of other projects untouched
        let remaining = store.tasks();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, survivor.id);
    }

    #[test]
    fn test_delete_nonexistent_returns_false_and_changes_nothing() {
        let mut store = Store::with_sample_data();
        let projects = store.projects().len();
        let tasks = store.tasks().len();

        assert!(!store.delete_project("nonexistent"));
        assert!(!store.delete_task("nonexistent"));
        assert_eq!(store.projects().len(), projects);
        assert_eq!(store.tasks().len(), tasks);
    }

    #[test]
    fn test_delete_task_removes_only_that_task() {
        let mut store = Store::new();
        let p = store.create_project(project_input("P")).unwrap();
        let t1 = store.create_task(task_input("T1", &p.id)).unwrap();
        let t2 = store.create_task(task_input("T2", &p.id)).unwrap();

        assert!(store.delete_task(&t1.id));
        assert!(store.task(&t1.id).is_none());
        assert!(store.task(&t2.id).is_some());
        assert!(store.project(&p.id).is_some());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = Store::new();
        store
            .create_project(CreateProjectInput {
                description: "Online storefront".to_string(),
                ..project_input("E-commerce")
            })
            .unwrap();
        store.create_project(project_input("Internal tools")).unwrap();

        let hits = store.search_projects("E-COMMERCE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "E-commerce");

        // Description is searched too
        assert_eq!(store.search_projects("storefront").len(), 1);

        // Empty query returns everything
        assert_eq!(store.search_projects("").len(), 2);
    }

    #[test]
    fn test_search_tasks_covers_title_and_description() {
        let mut store = Store::new();
        let p = store.create_project(project_input("P")).unwrap();
        store
            .create_task(CreateTaskInput {
                description: "Login and registration".to_string(),
                ..task_input("Implement authentication", &p.id)
            })
            .unwrap();
        store.create_task(task_input("Write docs", &p.id)).unwrap();

        assert_eq!(store.search_tasks("AUTH").len(), 1);
        assert_eq!(store.search_tasks("registration").len(), 1);
        assert_eq!(store.search_tasks("").len(), 2);
        assert!(store.search_tasks("deploy").is_empty());
    }

    #[test]
    fn test_stats_counts_sum() {
        let mut store = Store::new();
        let p = store.create_project(project_input("P")).unwrap();
        store
            .create_project(CreateProjectInput {
                status: ProjectStatus::Completed,
                ..project_input("Done")
            })
            .unwrap();
        store
            .create_project(CreateProjectInput {
                status: ProjectStatus::OnHold,
                ..project_input("Paused")
            })
            .unwrap();

        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed, TaskStatus::Todo] {
            store
                .create_task(CreateTaskInput {
                    status,
                    ..task_input("T", &p.id)
                })
                .unwrap();
        }

        let ps = store.project_stats();
        assert_eq!(ps.total, 3);
        assert_eq!(ps.active, 1);
        assert_eq!(ps.completed, 1);
        // on-hold counts toward total only

        let ts = store.task_stats();
        assert_eq!(ts.total, 4);
        assert_eq!(ts.todo + ts.in_progress + ts.completed, ts.total);
        assert_eq!(ts.todo, 2);
        assert_eq!(ts.in_progress, 1);
        assert_eq!(ts.completed, 1);
    }

    #[test]
    fn test_filter_tasks_combines_criteria() {
        let mut store = Store::with_sample_data();

        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };
        let hits = store.filter_tasks(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Implement authentication");

        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            assignee: Some("Nobody".to_string()),
            ..Default::default()
        };
        assert!(store.filter_tasks(&filter).is_empty());
    }

    #[test]
    fn test_validation_rejects_malformed_input() {
        let mut store = Store::new();

        let err = store.create_project(project_input("  ")).unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "name" }));

        let err = store
            .create_project(CreateProjectInput {
                estimated_hours: Some(-3.0),
                ..project_input("P")
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::NonPositiveNumber { .. }));

        let err = store.create_task(task_input("T", "")).unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "project_id" }));

        // Rejected input never reaches the collections
        assert!(store.projects().is_empty());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_validation_applies_to_updates_too() {
        let mut store = Store::new();
        let p = store.create_project(project_input("P")).unwrap();

        let err = store
            .update_project(
                &p.id,
                UpdateProjectInput {
                    name: Some("".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "name" }));

        // The record is unchanged after the rejection
        let unchanged = store.project(&p.id).unwrap();
        assert_eq!(unchanged.name, "P");
        assert_eq!(unchanged.updated_at, p.updated_at);
    }

    #[test]
    fn test_events_are_emitted_for_every_mutation() {
        let mut store = Store::new();
        let rx = store.subscribe();

        let p = store.create_project(project_input("P")).unwrap();
        let t = store.create_task(task_input("T", &p.id)).unwrap();
        store
            .update_task(
                &t.id,
                UpdateTaskInput {
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap();
        store.delete_project(&p.id);

        assert!(matches!(rx.recv().unwrap(), StoreEvent::ProjectCreated { .. }));
        assert!(matches!(rx.recv().unwrap(), StoreEvent::TaskCreated { .. }));
        assert!(matches!(rx.recv().unwrap(), StoreEvent::TaskUpdated { .. }));
        match rx.recv().unwrap() {
            StoreEvent::ProjectDeleted { id, cascaded_tasks } => {
                assert_eq!(id, p.id);
                assert_eq!(cascaded_tasks, 1);
            }
            other => panic!("expected ProjectDeleted, got {other:?}"),
        }
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut store = Store::new();
        let rx = store.subscribe();
        drop(rx);

        // Emitting after the receiver is gone must not fail
        store.create_project(project_input("P")).unwrap();
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn test_sample_data_shape() {
        let store = Store::with_sample_data();

        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.tasks().len(), 2);

        // Both seed tasks hang off the first project
        let first = &store.projects()[0];
        assert_eq!(store.tasks_by_project(&first.id).len(), 2);

        let stats = store.task_stats();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
    }

    #[test]
    fn test_defensive_copies() {
        let mut store = Store::new();
        store.create_project(project_input("P")).unwrap();

        let mut copy = store.projects();
        copy.clear();
        assert_eq!(store.projects().len(), 1);
    }
}
