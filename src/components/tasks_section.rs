//! Tasks Section Component
//!
//! Create-task form, list/kanban view toggle, and the task list cards.
//! View switching is presentation-only; it never refetches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::{use_api, CreateTaskArgs};
use crate::components::{format_due_date, KanbanBoard, TaskModal};
use crate::context::{use_view_context, ViewMode};
use crate::models::{Priority, Task, TaskStatus, UserRef};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TasksSection() -> impl IntoView {
    let ctx = use_view_context();

    let toggle_class = move |mode: ViewMode| {
        if ctx.view_mode.get() == mode {
            "view-btn active"
        } else {
            "view-btn"
        }
    };

    view! {
        <section class="section">
            <h2>"Tasks"</h2>

            <NewTaskForm/>

            <div class="view-toggle">
                <button class=move || toggle_class(ViewMode::List) on:click=move |_| ctx.switch_view(ViewMode::List)>
                    "List"
                </button>
                <button class=move || toggle_class(ViewMode::Kanban) on:click=move |_| ctx.switch_view(ViewMode::Kanban)>
                    "Kanban"
                </button>
            </div>

            {move || match ctx.view_mode.get() {
                ViewMode::List => view! { <TaskList/> }.into_any(),
                ViewMode::Kanban => view! { <KanbanBoard/> }.into_any(),
            }}

            <TaskModal/>
        </section>
    }
}

/// Form for creating new tasks. The assignee dropdown is restricted to the
/// selected project's roster, which is fetched whenever the project changes.
#[component]
fn NewTaskForm() -> impl IntoView {
    let api = use_api();
    let app = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (project_sel, set_project_sel) = signal(String::new());
    let (assignee_sel, set_assignee_sel) = signal(String::new());
    let (priority_sel, set_priority_sel) = signal("Medium".to_string());
    let (due_date, set_due_date) = signal(String::new());
    let (roster, set_roster) = signal(Vec::<UserRef>::new());

    let on_project_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_project_sel.set(value.clone());
        set_assignee_sel.set(String::new());
        set_roster.set(Vec::new());
        if let Ok(project_id) = value.parse::<i64>() {
            spawn_local(async move {
                if let Some(details) = api.fetch_project(project_id).await {
                    set_roster.set(details.roster());
                }
            });
        }
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task_title = title.get();
        if task_title.is_empty() {
            return;
        }
        let Ok(project_id) = project_sel.get().parse::<i64>() else {
            api.notices.error("Please select a project");
            return;
        };
        let task_description = description.get();
        let assigned_to_user_id = assignee_sel.get().parse::<i64>().ok();
        let priority = Priority::parse(&priority_sel.get()).unwrap_or(Priority::Medium);
        let due = due_date.get();

        spawn_local(async move {
            let args = CreateTaskArgs {
                title: &task_title,
                description: &task_description,
                project_id,
                assigned_to_user_id,
                priority,
                due_date: (!due.is_empty()).then_some(due.as_str()),
                // New tasks always start in the first column
                status: TaskStatus::ToDo,
            };
            if actions::create_task(api, app, args).await {
                set_title.set(String::new());
                set_description.set(String::new());
                set_project_sel.set(String::new());
                set_assignee_sel.set(String::new());
                set_priority_sel.set("Medium".to_string());
                set_due_date.set(String::new());
                set_roster.set(Vec::new());
            }
        });
    };

    view! {
        <form class="task-form" on:submit=on_create>
            <input
                type="text"
                placeholder="Task title"
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />

            <select prop:value=move || project_sel.get() on:change=on_project_change>
                <option value="">"Select Project..."</option>
                <For
                    each=move || app.projects().get()
                    key=|project| project.id
                    children=move |project| {
                        view! { <option value=project.id.to_string()>{project.name.clone()}</option> }
                    }
                />
            </select>

            <select
                prop:value=move || assignee_sel.get()
                on:change=move |ev| set_assignee_sel.set(event_target_value(&ev))
            >
                {move || if roster.get().is_empty() {
                    view! { <option value="">"Select project first"</option> }.into_any()
                } else {
                    view! {
                        <option value="">"Unassigned"</option>
                        <For
                            each=move || roster.get()
                            key=|user| user.id
                            children=move |user| {
                                view! { <option value=user.id.to_string()>{user.username.clone()}</option> }
                            }
                        />
                    }.into_any()
                }}
            </select>

            <select
                prop:value=move || priority_sel.get()
                on:change=move |ev| set_priority_sel.set(event_target_value(&ev))
            >
                {Priority::ALL
                    .iter()
                    .map(|p| {
                        let label = p.as_str();
                        view! { <option value=label>{label}</option> }
                    })
                    .collect_view()}
            </select>

            <input
                type="datetime-local"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />

            // Creator is always the logged-in user; the server derives it
            // from the token, this is display only.
            <input
                type="text"
                disabled
                prop:value=move || {
                    api.current_user
                        .get()
                        .map(|u| u.username)
                        .unwrap_or_default()
                }
            />

            <button type="submit" class="btn">"Create Task"</button>
        </form>
    }
}

#[component]
fn TaskList() -> impl IntoView {
    let app = use_app_store();

    view! {
        <div class="tasks-container">
            <Show when=move || app.tasks().read().is_empty()>
                <div class="loading">"No tasks found. Create your first task!"</div>
            </Show>
            <For
                each=move || app.tasks().get()
                key=|task| task.id
                children=move |task| view! { <TaskCard task/> }
            />
        </div>
    }
}

#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_view_context();
    let task_id = task.id;

    let card_class = format!("card priority-{}", task.priority.css_class());
    let badge_class = format!("status-badge status-{}", task.status.css_class());
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
        <div class=card_class on:click=move |_| ctx.open_task(task_id)>
            <h3>{task.title.clone()}</h3>
            <p>{description}</p>
            <p><strong>"Project: "</strong>{task.project.name.clone()}</p>
            <p><strong>"Assigned to: "</strong>{assignee}</p>
            <p><strong>"Created by: "</strong>{task.created_by_user.username.clone()}</p>
            <p><strong>"Priority: "</strong>{task.priority.as_str()}</p>
            <p><strong>"Due: "</strong>{due}</p>
            <div class="card-status">
                <span class=badge_class>{task.status.as_str()}</span>
            </div>
        </div>
    }
}
