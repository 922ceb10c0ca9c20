//! UI Actions
//!
//! Typed command layer between markup and mutations. Each user-triggered
//! action issues its request(s) through the gateway, eagerly reloads the
//! owning collection on success, and pushes the success notice. Components
//! never call the gateway directly for mutations.

use crate::api::{
    AddMemberArgs, Api, AuthPhase, CreateProjectArgs, CreateTaskArgs, LoginArgs, RegisterArgs,
    UpdateTaskArgs,
};
use crate::models::{Priority, TaskStatus, UserRef};
use crate::session;
use crate::store::AppStore;
use crate::sync;
use leptos::prelude::*;

// ========================
// Session
// ========================

fn establish_session(api: Api, token: &str, user: UserRef) {
    session::set_token(token);
    session::set_current_user(&user);
    api.current_user.set(Some(user));
    api.auth.set(AuthPhase::Authed);
}

pub async fn login(api: Api, email: &str, password: &str) -> bool {
    match api.login(&LoginArgs { email, password }).await {
        Some(auth) => {
            establish_session(api, &auth.token, auth.user);
            api.notices.success("Login successful!");
            true
        }
        None => false,
    }
}

pub async fn register(api: Api, username: &str, email: &str, password: &str) -> bool {
    match api
        .register(&RegisterArgs {
            username,
            email,
            password,
        })
        .await
    {
        Some(auth) => {
            establish_session(api, &auth.token, auth.user);
            api.notices.success("Registration successful!");
            true
        }
        None => false,
    }
}

pub fn logout(api: Api) {
    api.expire_session();
    api.notices.success("Logged out successfully");
}

/// Second phase of startup: the shell is already rendered from the stored
/// session; a failed validation tears it back down.
pub async fn validate_stored_session(api: Api) {
    if api.fetch_me().await.is_some() {
        api.auth.set(AuthPhase::Authed);
    } else if api.auth.get_untracked() != AuthPhase::Guest {
        // A 401 already tore the session down inside the gateway
        api.expire_session();
    }
}

// ========================
// Projects
// ========================

pub async fn create_project(api: Api, app: AppStore, name: &str, description: &str) -> bool {
    let created = api
        .create_project(&CreateProjectArgs { name, description })
        .await;
    if created.is_some() {
        sync::reload_projects(api, app).await;
        api.notices.success("Project created successfully!");
        true
    } else {
        false
    }
}

pub async fn add_member(api: Api, app: AppStore, project_id: i64, user_id: i64, role: &str) -> bool {
    let added = api
        .add_member(project_id, &AddMemberArgs { user_id, role })
        .await;
    if added.is_some() {
        sync::reload_projects(api, app).await;
        api.notices.success("Member added successfully!");
        true
    } else {
        false
    }
}

// ========================
// Tasks
// ========================

pub async fn create_task(api: Api, app: AppStore, args: CreateTaskArgs<'_>) -> bool {
    if api.create_task(&args).await.is_some() {
        sync::reload_tasks(api, app).await;
        api.notices.success("Task created successfully!");
        true
    } else {
        false
    }
}

/// Kanban drop: one status update, then one task reload.
pub async fn update_task_status(api: Api, app: AppStore, task_id: i64, status: TaskStatus) -> bool {
    if api.update_task_status(task_id, status).await.is_some() {
        sync::reload_tasks(api, app).await;
        api.notices
            .success(format!("Task status updated to {}!", status.as_str()));
        true
    } else {
        false
    }
}

pub async fn delete_task(api: Api, app: AppStore, task_id: i64) -> bool {
    if api.delete_task(task_id).await.is_some() {
        sync::reload_tasks(api, app).await;
        api.notices.success("Task deleted successfully!");
        true
    } else {
        false
    }
}

/// Edited field values collected from the task modal.
pub struct TaskEdit {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<String>,
    pub assigned_to_user_id: Option<i64>,
}

/// Whether a save needs the separate status-transition request. The API
/// models status changes as a distinct operation from field edits.
fn status_mutation_needed(previous: TaskStatus, next: TaskStatus) -> bool {
    previous != next
}

/// Modal save as one aggregated operation: the field update always goes
/// out first; the status update follows only when the status differs from
/// the cached value. Both must succeed for the save to count. Either way
/// a successful save ends with one task reload.
pub async fn save_task_changes(
    api: Api,
    app: AppStore,
    task_id: i64,
    previous_status: TaskStatus,
    edit: TaskEdit,
) -> bool {
    let args = UpdateTaskArgs {
        title: &edit.title,
        description: &edit.description,
        priority: edit.priority,
        due_date: edit.due_date.as_deref(),
        assigned_to_user_id: edit.assigned_to_user_id,
    };
    if api.update_task(task_id, &args).await.is_none() {
        return false;
    }
    if status_mutation_needed(previous_status, edit.status)
        && api.update_task_status(task_id, edit.status).await.is_none()
    {
        return false;
    }
    sync::reload_tasks(api, app).await;
    api.notices.success("Task updated successfully!");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_request_skipped_when_unchanged() {
        assert!(!status_mutation_needed(TaskStatus::ToDo, TaskStatus::ToDo));
        assert!(status_mutation_needed(TaskStatus::ToDo, TaskStatus::Done));
        assert!(status_mutation_needed(
            TaskStatus::InProgress,
            TaskStatus::ToDo
        ));
    }
}
