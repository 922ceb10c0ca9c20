//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The three entity
//! caches are eventually-consistent snapshots of the server: a load replaces
//! the whole collection, and no helper exists to patch a single entry in
//! place. Mutations go through `actions`, which refetch the owning
//! collection before the UI settles.

use crate::models::{Project, Task, UserRef};
use leptos::prelude::*;
use reactive_stores::Store;

/// Entity caches with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last-fetched user roster (lazy: dropdown data only)
    pub users: Vec<UserRef>,
    /// Last-fetched project list
    pub projects: Vec<Project>,
    /// Last-fetched task list
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Full-Replace Helpers
// ========================

/// Replace a cache wholesale with the latest server snapshot.
pub(crate) fn replace_all<T>(cache: &mut Vec<T>, snapshot: Vec<T>) {
    *cache = snapshot;
}

pub fn replace_users(store: &AppStore, users: Vec<UserRef>) {
    replace_all(&mut *store.users().write(), users);
}

pub fn replace_projects(store: &AppStore, projects: Vec<Project>) {
    replace_all(&mut *store.projects().write(), projects);
}

pub fn replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    replace_all(&mut *store.tasks().write(), tasks);
}

/// Look up a task in the cache by id.
pub fn cached_task(store: &AppStore, task_id: i64) -> Option<Task> {
    store
        .tasks()
        .read_untracked()
        .iter()
        .find(|t| t.id == task_id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_drops_entries_absent_from_snapshot() {
        let mut cache = vec![1, 2, 3];
        replace_all(&mut cache, vec![2, 4]);
        assert_eq!(cache, vec![2, 4]);
    }

    #[test]
    fn replace_with_empty_snapshot_empties_cache() {
        let mut cache = vec![1];
        replace_all(&mut cache, Vec::new());
        assert!(cache.is_empty());
    }
}
