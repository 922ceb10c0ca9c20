//! Cache Refresh Policy
//!
//! Two strategies coexist: `reload_*` always refetches (primary section
//! data, and after every mutation), `ensure_*` refetches only when the
//! cache is empty (dropdown data, where staleness is tolerated).

use crate::api::Api;
use crate::store::{self, AppStateStoreFields, AppStore};
use leptos::prelude::*;

/// Eager refetch of the project list. Returns false if the gateway
/// reported a failure (already surfaced there).
pub async fn reload_projects(api: Api, app: AppStore) -> bool {
    match api.fetch_projects().await {
        Some(projects) => {
            store::replace_projects(&app, projects);
            true
        }
        None => false,
    }
}

/// Eager refetch of the task list.
pub async fn reload_tasks(api: Api, app: AppStore) -> bool {
    match api.fetch_tasks().await {
        Some(tasks) => {
            store::replace_tasks(&app, tasks);
            true
        }
        None => false,
    }
}

/// Eager refetch of the user roster.
pub async fn reload_users(api: Api, app: AppStore) -> bool {
    match api.fetch_users().await {
        Some(users) => {
            store::replace_users(&app, users);
            true
        }
        None => false,
    }
}

/// Lazy-load guard: dropdown caches are refetched only when nothing is
/// cached yet; otherwise the stale snapshot is kept.
fn needs_fetch(cached_len: usize) -> bool {
    cached_len == 0
}

/// Lazy load: fetch users only when the cache is empty. User rosters
/// change far less often than task or project state.
pub async fn ensure_users(api: Api, app: AppStore) {
    if needs_fetch(app.users().read_untracked().len()) {
        reload_users(api, app).await;
    }
}

/// Lazy load: fetch projects only when the cache is empty (task-form
/// dropdown data).
pub async fn ensure_projects(api: Api, app: AppStore) {
    if needs_fetch(app.projects().read_untracked().len()) {
        reload_projects(api, app).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_guard_fetches_only_into_an_empty_cache() {
        assert!(needs_fetch(0));
        assert!(!needs_fetch(1));
        assert!(!needs_fetch(12));
    }
}
