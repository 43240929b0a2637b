// Query filtering over store collections

use serde::{Deserialize, Serialize};

use crate::entity::matches_query;
use crate::models::{Priority, Project, ProjectStatus, Task, TaskStatus};

/// Criteria for filtering projects. All present fields must match;
/// a default filter matches every project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    /// Case-insensitive substring match over name and description
    pub search: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status
            && project.status != status
        {
            return false;
        }
        if let Some(priority) = self.priority
            && project.priority != priority
        {
            return false;
        }
        if let Some(search) = &self.search
            && !matches_query(project, search)
        {
            return false;
        }
        true
    }
}

/// Criteria for filtering tasks. Same combination rule as [`ProjectFilter`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub project_id: Option<String>,
    pub assignee: Option<String>,
    /// Case-insensitive substring match over title and description
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }
        if let Some(priority) = self.priority
            && task.priority != priority
        {
            return false;
        }
        if let Some(project_id) = &self.project_id
            && &task.project_id != project_id
        {
            return false;
        }
        if let Some(assignee) = &self.assignee
            && task.assignee.as_deref() != Some(assignee.as_str())
        {
            return false;
        }
        if let Some(search) = &self.search
            && !matches_query(task, search)
        {
            return false;
        }
        true
    }
}
