//! Example 01: Basic CRUD Operations
//!
//! This example demonstrates the fundamental create, read, update, and delete
//! operations with the project store.
//!
//! Run with: cargo run --example 01_basic_crud

use eyre::Result;
use projstore::{CreateProjectInput, Priority, ProjectStatus, Store, UpdateProjectInput};

fn main() -> Result<()> {
    println!("projstore Basic CRUD Example");
    println!("============================\n");

    // Start from an empty store
    let mut store = Store::new();

    // CREATE: Add a new project
    println!("1. CREATE - Adding a new project...");
    let project = store.create_project(CreateProjectInput {
        name: "Website Redesign".to_string(),
        description: "Refresh the marketing site".to_string(),
        status: ProjectStatus::Active,
        priority: Priority::Medium,
        estimated_hours: Some(60.0),
    })?;
    println!("   Created project with ID: {}\n", project.id);

    // READ: Retrieve the project
    println!("2. READ - Retrieving the project...");
    match store.project(&project.id) {
        Some(found) => {
            println!("   Found project:");
            println!("   - Name: {}", found.name);
            println!("   - Status: {}", found.status);
            println!("   - Priority: {}", found.priority);
        }
        None => println!("   Project not found!"),
    }
    println!();

    // UPDATE: Change only the fields we care about
    println!("3. UPDATE - Marking the project completed...");
    let updated = store
        .update_project(
            &project.id,
            UpdateProjectInput {
                status: Some(ProjectStatus::Completed),
                ..Default::default()
            },
        )?
        .expect("project exists");
    println!("   Status is now: {}", updated.status);
    println!("   Name unchanged: {}\n", updated.name);

    // DELETE: Remove the project
    println!("4. DELETE - Removing the project...");
    let deleted = store.delete_project(&project.id);
    println!("   Deleted: {}", deleted);
    println!("   Projects remaining: {}", store.projects().len());

    // Deleting again is a no-op signalled by `false`, not an error
    let deleted_again = store.delete_project(&project.id);
    println!("   Deleting again returns: {}", deleted_again);

    Ok(())
}
