// projstore - In-memory project/task store with filtering, stats, and change events

pub mod entity;
pub mod error;
pub mod event;
pub mod filter;
pub mod models;
pub mod store;

// Re-export main types for convenience
pub use entity::Entity;
pub use error::StoreError;
pub use event::StoreEvent;
pub use filter::{ProjectFilter, TaskFilter};
pub use models::{
    CreateProjectInput, CreateTaskInput, Priority, Project, ProjectStats, ProjectStatus, Task,
    TaskStats, TaskStatus, UpdateProjectInput, UpdateTaskInput, User, UserRole,
};
pub use store::Store;
