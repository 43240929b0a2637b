//! Example 02: Search and Filtering
//!
//! This example demonstrates free-text search and field filters:
//! - Case-insensitive substring search over names and descriptions
//! - Combinable status / priority / assignee criteria
//! - Summary statistics grouped by status
//!
//! Run with: cargo run --example 02_search_and_filter

use eyre::Result;
use projstore::{Store, TaskFilter, TaskStatus};

fn main() -> Result<()> {
    println!("projstore Search and Filter Example");
    println!("===================================\n");

    // The seeded dataset: two projects, two tasks
    let store = Store::with_sample_data();

    // Free-text search is case-insensitive
    println!("1. SEARCH - projects matching 'DELIVERY'...");
    for project in store.search_projects("DELIVERY") {
        println!("   - {}: {}", project.name, project.description);
    }
    println!();

    println!("2. SEARCH - tasks matching 'auth'...");
    for task in store.search_tasks("auth") {
        println!("   - {} [{}]", task.title, task.status);
    }
    println!();

    // An empty query matches everything
    println!("3. SEARCH - empty query returns all...");
    println!("   projects: {}", store.search_projects("").len());
    println!("   tasks:    {}\n", store.search_tasks("").len());

    // Field filters combine with AND
    println!("4. FILTER - in-progress tasks assigned to Maria Santos...");
    let filter = TaskFilter {
        status: Some(TaskStatus::InProgress),
        assignee: Some("Maria Santos".to_string()),
        ..Default::default()
    };
    for task in store.filter_tasks(&filter) {
        println!("   - {}", task.title);
    }
    println!();

    // Statistics recompute from the live collections on every call
    println!("5. STATS - counts by status...");
    let projects = store.project_stats();
    println!(
        "   projects: total={} active={} completed={}",
        projects.total, projects.active, projects.completed
    );
    let tasks = store.task_stats();
    println!(
        "   tasks:    total={} todo={} in-progress={} completed={}",
        tasks.total, tasks.todo, tasks.in_progress, tasks.completed
    );

    Ok(())
}
