//! Kanban Board Component
//!
//! Three fixed status columns rendered from the task cache. Cards are
//! draggable with native HTML5 drag-and-drop; dropping a card on a column
//! issues one status update followed by one task reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::DragEvent;

use crate::actions;
use crate::api::use_api;
use crate::components::format_due_date;
use crate::context::use_view_context;
use crate::models::{Task, TaskStatus};
use crate::store::{use_app_store, AppStateStoreFields};

/// Partition the task cache into the three fixed columns, preserving
/// cache order within each.
pub fn partition_by_status(tasks: &[Task]) -> [Vec<Task>; 3] {
    let mut buckets: [Vec<Task>; 3] = Default::default();
    for task in tasks {
        let idx = match task.status {
            TaskStatus::ToDo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        };
        buckets[idx].push(task.clone());
    }
    buckets
}

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let api = use_api();
    let app = use_app_store();

    let columns = Memo::new(move |_| partition_by_status(&app.tasks().read()));

    let on_drop = Callback::new(move |(task_id, status): (i64, TaskStatus)| {
        spawn_local(async move {
            actions::update_task_status(api, app, task_id, status).await;
        });
    });

    view! {
        <div class="kanban-view">
            {TaskStatus::ALL
                .iter()
                .enumerate()
                .map(|(idx, status)| {
                    let status = *status;
                    let tasks = Signal::derive(move || columns.get()[idx].clone());
                    view! { <KanbanColumn status tasks on_drop/> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn KanbanColumn(
    status: TaskStatus,
    tasks: Signal<Vec<Task>>,
    on_drop: Callback<(i64, TaskStatus)>,
) -> impl IntoView {
    let (drag_over, set_drag_over) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        // Required, otherwise the browser refuses the drop
        ev.prevent_default();
    };
    let on_dragenter = move |_: DragEvent| set_drag_over.set(true);
    let on_dragleave = move |_: DragEvent| set_drag_over.set(false);

    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let task_id = ev
            .data_transfer()
            .and_then(|dt| dt.get_data("text/plain").ok())
            .and_then(|raw| raw.parse::<i64>().ok());
        if let Some(task_id) = task_id {
            on_drop.run((task_id, status));
        }
    };

    view! {
        <div
            class=move || {
                if drag_over.get() { "kanban-column drag-over" } else { "kanban-column" }
            }
            on:dragover=on_dragover
            on:dragenter=on_dragenter
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
        >
            <div class="kanban-column-header">
                <h3>{status.column_title()}</h3>
                <span class="task-count">{move || tasks.get().len()}</span>
            </div>
            <div class="kanban-tasks">
                <For
                    each=move || tasks.get()
                    key=|task| task.id
                    children=move |task| view! { <KanbanCard task/> }
                />
            </div>
        </div>
    }
}

#[component]
fn KanbanCard(task: Task) -> impl IntoView {
    let ctx = use_view_context();
    let task_id = task.id;
    let (dragging, set_dragging) = signal(false);

    let on_dragstart = move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &task_id.to_string());
        }
        set_dragging.set(true);
    };
    let on_dragend = move |_: DragEvent| set_dragging.set(false);

    let base_class = format!("kanban-task priority-{}", task.priority.css_class());
    let description = task
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_string());
    let assignee = task
        .assigned_to_user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_else(|| "Unassigned".to_string());
    let due = format_due_date(task.due_date.as_deref());

    view! {
        <div
            class=move || {
                if dragging.get() {
                    format!("{base_class} dragging")
                } else {
                    base_class.clone()
                }
            }
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:click=move |_| ctx.open_task(task_id)
        >
            <h4>{task.title.clone()}</h4>
            <p>{description}</p>
            <div class="task-meta">
                <span class="task-assignee">{assignee}</span>
                <span>{due}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, ProjectRef, UserRef};

    fn make_task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            project: ProjectRef {
                id: 1,
                name: "P".to_string(),
            },
            assigned_to_user: None,
            created_by_user: UserRef {
                id: 1,
                username: "ana".to_string(),
            },
            priority: Priority::Medium,
            status,
            due_date: None,
        }
    }

    #[test]
    fn partitions_into_three_fixed_buckets() {
        let tasks = vec![
            make_task(1, TaskStatus::Done),
            make_task(2, TaskStatus::ToDo),
            make_task(3, TaskStatus::InProgress),
            make_task(4, TaskStatus::ToDo),
        ];
        let [todo, in_progress, done] = partition_by_status(&tasks);
        assert_eq!(todo.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(in_progress.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(done.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_cache_yields_empty_columns() {
        let [todo, in_progress, done] = partition_by_status(&[]);
        assert!(todo.is_empty());
        assert!(in_progress.is_empty());
        assert!(done.is_empty());
    }
}
