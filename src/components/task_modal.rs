//! Task Modal Component
//!
//! Single-task edit lifecycle: open populates the form from the cached task
//! (no fresh fetch) and side-loads the owning project's roster for the
//! assignee dropdown, so the dropdown may briefly lag behind the visible
//! modal. Save aggregates the field update and the conditional status
//! update into one result; cancel discards everything.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, TaskEdit};
use crate::api::use_api;
use crate::components::DeleteConfirmButton;
use crate::context::use_view_context;
use crate::models::{Priority, TaskStatus, UserRef};
use crate::store::{self, use_app_store};

/// Value for a `datetime-local` input. The API returns UTC timestamps,
/// but datetime-local wants wall-clock time: shift by the zone offset so
/// the ISO rendering reads as local time, then clip to the minute.
fn datetime_local_value(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    let time = date.get_time();
    if time.is_nan() {
        // Unparseable timestamp, show it as-is
        return clip_to_minutes(iso);
    }
    let shifted = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(
        time - date.get_timezone_offset() * 60_000.0,
    ));
    clip_to_minutes(&String::from(shifted.to_iso_string()))
}

fn clip_to_minutes(iso: &str) -> String {
    iso.chars().take(16).collect()
}

#[component]
pub fn TaskModal() -> impl IntoView {
    let api = use_api();
    let app = use_app_store();
    let ctx = use_view_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority_sel, set_priority_sel) = signal(String::new());
    let (status_sel, set_status_sel) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (assignee_sel, set_assignee_sel) = signal(String::new());
    let (roster, set_roster) = signal(Vec::<UserRef>::new());
    let (prev_status, set_prev_status) = signal(TaskStatus::ToDo);

    // Populate the form from the cached task whenever the modal opens
    Effect::new(move |_| {
        let Some(task_id) = ctx.modal_task.get() else {
            return;
        };
        let Some(task) = store::cached_task(&app, task_id) else {
            ctx.close_task();
            return;
        };
        set_title.set(task.title.clone());
        set_description.set(task.description.clone().unwrap_or_default());
        set_priority_sel.set(task.priority.as_str().to_string());
        set_status_sel.set(task.status.as_str().to_string());
        set_prev_status.set(task.status);
        set_due_date.set(
            task.due_date
                .as_deref()
                .map(datetime_local_value)
                .unwrap_or_default(),
        );
        set_assignee_sel.set(
            task.assigned_to_user
                .as_ref()
                .map(|u| u.id.to_string())
                .unwrap_or_default(),
        );
        set_roster.set(Vec::new());
        let project_id = task.project.id;
        spawn_local(async move {
            if let Some(details) = api.fetch_project(project_id).await {
                set_roster.set(details.roster());
            }
        });
    });

    let on_save = move |_| {
        let Some(task_id) = ctx.modal_task.get_untracked() else {
            return;
        };
        let previous = prev_status.get_untracked();
        let due = due_date.get_untracked();
        let edit = TaskEdit {
            title: title.get_untracked(),
            description: description.get_untracked(),
            priority: Priority::parse(&priority_sel.get_untracked()).unwrap_or(Priority::Medium),
            status: TaskStatus::parse(&status_sel.get_untracked()).unwrap_or(previous),
            due_date: (!due.is_empty()).then_some(due),
            assigned_to_user_id: assignee_sel.get_untracked().parse::<i64>().ok(),
        };
        spawn_local(async move {
            if actions::save_task_changes(api, app, task_id, previous, edit).await {
                ctx.close_task();
            }
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        let Some(task_id) = ctx.modal_task.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if actions::delete_task(api, app, task_id).await {
                ctx.close_task();
            }
        });
    });

    view! {
        <Show when=move || ctx.modal_task.get().is_some()>
            <div class="modal">
                <div class="modal-content">
                    <h3>"Edit Task"</h3>

                    <label>"Title"</label>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />

                    <label>"Description"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />

                    <label>"Priority"</label>
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

                    <label>"Status"</label>
                    <select
                        prop:value=move || status_sel.get()
                        on:change=move |ev| set_status_sel.set(event_target_value(&ev))
                    >
                        {TaskStatus::ALL
                            .iter()
                            .map(|s| {
                                let label = s.as_str();
                                view! { <option value=label>{label}</option> }
                            })
                            .collect_view()}
                    </select>

                    <label>"Due date"</label>
                    <input
                        type="datetime-local"
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />

                    <label>"Assigned to"</label>
                    <select
                        prop:value=move || assignee_sel.get()
                        on:change=move |ev| set_assignee_sel.set(event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
                        <For
                            each=move || roster.get()
                            key=|user| user.id
                            children=move |user| {
                                view! { <option value=user.id.to_string()>{user.username.clone()}</option> }
                            }
                        />
                    </select>

                    <div class="modal-actions">
                        <button class="btn" on:click=on_save>"Save"</button>
                        <button class="btn btn-secondary" on:click=move |_| ctx.close_task()>
                            "Cancel"
                        </button>
                        <DeleteConfirmButton button_class="btn btn-danger" on_confirm=on_delete/>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_drops_seconds_and_zone() {
        assert_eq!(
            clip_to_minutes("2026-09-01T12:30:45.000Z"),
            "2026-09-01T12:30"
        );
        assert_eq!(clip_to_minutes("2026-09-01T12:30"), "2026-09-01T12:30");
        assert_eq!(clip_to_minutes(""), "");
    }
}
