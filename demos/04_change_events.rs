//! Example 04: Change Events
//!
//! This example demonstrates the store's change-notification channel:
//! - `subscribe()` hands back an `mpsc::Receiver<StoreEvent>`
//! - Every successful mutation is broadcast to live subscribers
//! - Deletion events carry the cascaded-task count
//!
//! Run with: cargo run --example 04_change_events

use eyre::Result;
use projstore::{
    CreateProjectInput, CreateTaskInput, Priority, ProjectStatus, Store, StoreEvent, TaskStatus,
    UpdateTaskInput,
};

fn main() -> Result<()> {
    println!("projstore Change Events Example");
    println!("===============================\n");

    let mut store = Store::new();
    let events = store.subscribe();

    // A few mutations...
    let project = store.create_project(CreateProjectInput {
        name: "Observability".to_string(),
        description: "Dashboards and alerting".to_string(),
        status: ProjectStatus::Active,
        priority: Priority::Medium,
        estimated_hours: None,
    })?;
    let task = store.create_task(CreateTaskInput {
        title: "Wire up tracing".to_string(),
        description: String::new(),
        project_id: project.id.clone(),
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        assignee: None,
        due_date: None,
        estimated_hours: None,
    })?;
    store.update_task(
        &task.id,
        UpdateTaskInput {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    )?;
    store.delete_project(&project.id);

    // ...and the notifications they produced, in order
    println!("Emitted events:");
    while let Ok(event) = events.try_recv() {
        match event {
            StoreEvent::ProjectCreated { project } => {
                println!("  project-created   {}", project.name);
            }
            StoreEvent::ProjectUpdated { project } => {
                println!("  project-updated   {}", project.name);
            }
            StoreEvent::ProjectDeleted { id, cascaded_tasks } => {
                println!("  project-deleted   {id} (took {cascaded_tasks} task(s) with it)");
            }
            StoreEvent::TaskCreated { task } => {
                println!("  task-created      {}", task.title);
            }
            StoreEvent::TaskUpdated { task } => {
                println!("  task-updated      {} -> {}", task.title, task.status);
            }
            StoreEvent::TaskDeleted { id } => {
                println!("  task-deleted      {id}");
            }
        }
    }

    Ok(())
}
