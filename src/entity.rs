// Common surface shared by everything the store holds

use chrono::{DateTime, Utc};

use crate::models::{Project, Task};

/// Core trait implemented by every entity kept in a store collection.
///
/// The store's generic lookup and search helpers only need the identifier,
/// the timestamps, and the fields covered by free-text search.
pub trait Entity: Clone {
    /// Unique identifier for this entity
    fn id(&self) -> &str;

    /// Timestamp set once at creation
    fn created_at(&self) -> DateTime<Utc>;

    /// Timestamp refreshed on every mutation
    fn updated_at(&self) -> DateTime<Utc>;

    /// Fields matched by case-insensitive substring search
    fn search_fields(&self) -> [&str; 2];
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.description]
    }
}

/// True if any of the entity's search fields contains `query`,
/// case-insensitively. An empty query matches everything.
pub(crate) fn matches_query<T: Entity>(entity: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    entity
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
