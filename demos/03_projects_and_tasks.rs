//! Example 03: Projects, Tasks, and Cascading Delete
//!
//! This example demonstrates the one-to-many relationship between projects
//! and tasks:
//! - Tasks reference their project by id (the reference is not enforced)
//! - Listing tasks per project
//! - Deleting a project cascade-deletes its tasks and nothing else
//!
//! Run with: cargo run --example 03_projects_and_tasks

use eyre::Result;
use projstore::{CreateProjectInput, CreateTaskInput, Priority, ProjectStatus, Store, TaskStatus};

fn main() -> Result<()> {
    println!("projstore Relationships Example");
    println!("===============================\n");

    let mut store = Store::new();

    // Two parent projects
    let shop = store.create_project(CreateProjectInput {
        name: "Shop Backend".to_string(),
        description: "Order and inventory services".to_string(),
        status: ProjectStatus::Active,
        priority: Priority::High,
        estimated_hours: None,
    })?;
    let blog = store.create_project(CreateProjectInput {
        name: "Company Blog".to_string(),
        description: "Static site for announcements".to_string(),
        status: ProjectStatus::Active,
        priority: Priority::Low,
        estimated_hours: None,
    })?;

    // Tasks hang off a project via project_id
    for title in ["Design order schema", "Build checkout API", "Load-test inventory"] {
        store.create_task(CreateTaskInput {
            title: title.to_string(),
            description: String::new(),
            project_id: shop.id.clone(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            assignee: None,
            due_date: None,
            estimated_hours: None,
        })?;
    }
    store.create_task(CreateTaskInput {
        title: "Write launch post".to_string(),
        description: String::new(),
        project_id: blog.id.clone(),
        status: TaskStatus::Todo,
        priority: Priority::Low,
        assignee: None,
        due_date: None,
        estimated_hours: None,
    })?;

    println!("1. Tasks per project:");
    println!("   {}: {}", shop.name, store.tasks_by_project(&shop.id).len());
    println!("   {}: {}\n", blog.name, store.tasks_by_project(&blog.id).len());

    // The reference is not validated: this task is an orphan from birth
    let orphan = store.create_task(CreateTaskInput {
        title: "Mystery chore".to_string(),
        description: String::new(),
        project_id: "no-such-project".to_string(),
        status: TaskStatus::Todo,
        priority: Priority::Low,
        assignee: None,
        due_date: None,
        estimated_hours: None,
    })?;
    println!("2. Orphan task created with project_id={}\n", orphan.project_id);

    // Cascade delete: the shop project takes its three tasks with it
    println!("3. Deleting '{}'...", shop.name);
    store.delete_project(&shop.id);
    println!("   tasks for shop:   {}", store.tasks_by_project(&shop.id).len());
    println!("   tasks for blog:   {}", store.tasks_by_project(&blog.id).len());
    println!("   tasks overall:    {}", store.tasks().len());
    println!("   projects overall: {}", store.projects().len());

    Ok(())
}
