//! Projects Section Component
//!
//! Create-project form plus the project card grid. Owner-only card actions:
//! inline add-member form and a details popup.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::use_api;
use crate::components::format_date;
use crate::models::{Project, UserRef};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync;

const MEMBER_ROLES: &[&str] = &["Viewer", "Member", "Admin"];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let api = use_api();
    let app = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let project_name = name.get();
        if project_name.is_empty() {
            return;
        }
        let project_description = description.get();
        spawn_local(async move {
            if actions::create_project(api, app, &project_name, &project_description).await {
                set_name.set(String::new());
                set_description.set(String::new());
            }
        });
    };

    view! {
        <section class="section">
            <h2>"Projects"</h2>

            <form class="project-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Project name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Create Project"</button>
            </form>

            <div class="projects-container">
                <Show when=move || app.projects().read().is_empty()>
                    <div class="loading">"No projects found. Create your first project!"</div>
                </Show>
                <For
                    each=move || app.projects().get()
                    key=|project| project.id
                    children=move |project| view! { <ProjectCard project/> }
                />
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let api = use_api();
    let app = use_app_store();

    let project_id = project.id;
    let is_owner = project.is_owner;
    let owner_name = project
        .owner
        .as_ref()
        .map(|o| o.username.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let created = project
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    let description = project
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_string());
    let tasks_count = project.tasks_count;

    let (member_form_open, set_member_form_open) = signal(false);
    let (available_users, set_available_users) = signal(Vec::<UserRef>::new());
    let (selected_user, set_selected_user) = signal(String::new());
    let (selected_role, set_selected_role) = signal("Member".to_string());

    let open_member_form = move |_| {
        set_member_form_open.set(true);
        spawn_local(async move {
            sync::ensure_users(api, app).await;
            // The dropdown excludes the owner and everyone already on the project
            let Some(details) = api.fetch_project(project_id).await else {
                return;
            };
            let existing = details.member_ids();
            let available: Vec<UserRef> = app
                .users()
                .read_untracked()
                .iter()
                .filter(|user| !existing.contains(&user.id))
                .cloned()
                .collect();
            set_available_users.set(available);
        });
    };

    let on_add = move |_| {
        let Ok(user_id) = selected_user.get().parse::<i64>() else {
            api.notices.error("Please select a user");
            return;
        };
        let role = selected_role.get();
        spawn_local(async move {
            if actions::add_member(api, app, project_id, user_id, &role).await {
                set_member_form_open.set(false);
                set_selected_user.set(String::new());
            }
        });
    };

    let show_details = move |_| {
        spawn_local(async move {
            let Some(details) = api.fetch_project(project_id).await else {
                return;
            };
            let members = if details.members.is_empty() {
                "No members".to_string()
            } else {
                details
                    .members
                    .iter()
                    .map(|m| format!("{} ({})", m.username, m.role))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let owner = details
                .owner
                .map(|o| o.username)
                .unwrap_or_else(|| "Unknown".to_string());
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&format!(
                    "Project: {}\nOwner: {}\nMembers: {}",
                    details.name, owner, members
                ));
            }
        });
    };

    view! {
        <div class="card">
            <h3>{project.name.clone()}</h3>
            <p>{description}</p>
            <p><strong>"Owner: "</strong>{owner_name}</p>
            <p><strong>"Created: "</strong>{created}</p>
            <p><strong>"Tasks: "</strong>{tasks_count}</p>
            {if is_owner {
                view! { <span class="status-badge status-done">"Owner"</span> }.into_any()
            } else {
                view! { <span class="status-badge status-todo">"Member"</span> }.into_any()
            }}

            <Show when=move || is_owner>
                <div class="card-actions">
                    <button class="btn btn-secondary" on:click=open_member_form>"Add Member"</button>
                    <button class="btn btn-secondary" on:click=show_details>"View Details"</button>
                </div>
            </Show>

            <Show when=move || member_form_open.get()>
                <div class="add-member-form">
                    <select
                        prop:value=move || selected_user.get()
                        on:change=move |ev| set_selected_user.set(event_target_value(&ev))
                    >
                        <option value="">"Select User..."</option>
                        <For
                            each=move || available_users.get()
                            key=|user| user.id
                            children=move |user| {
                                view! { <option value=user.id.to_string()>{user.username.clone()}</option> }
                            }
                        />
                    </select>
                    <select
                        prop:value=move || selected_role.get()
                        on:change=move |ev| set_selected_role.set(event_target_value(&ev))
                    >
                        {MEMBER_ROLES
                            .iter()
                            .map(|role| {
                                let role = *role;
                                view! { <option value=role>{role}</option> }
                            })
                            .collect_view()}
                    </select>
                    <button class="btn" on:click=on_add>"Add"</button>
                    <button class="btn btn-secondary" on:click=move |_| set_member_form_open.set(false)>
                        "Cancel"
                    </button>
                </div>
            </Show>
        </div>
    }
}
