//! Taskboard Frontend App
//!
//! Root component: owns the session phase, the view-state signals, and the
//! per-section data loads.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::actions;
use crate::api::{Api, AuthPhase};
use crate::components::{AuthView, NoticeArea, ProjectsSection, TasksSection};
use crate::context::{Section, ViewContext, ViewMode};
use crate::notify::Notices;
use crate::session;
use crate::store::AppState;
use crate::sync;

#[component]
pub fn App() -> impl IntoView {
    let notices = Notices::new();

    let stored_token = session::token();
    let stored_user = session::current_user();
    console::log_1(&JsValue::from_str(&format!(
        "checking stored auth: token={} user={}",
        stored_token.is_some(),
        stored_user.is_some()
    )));

    // Two-phase startup: with a stored session the authenticated shell
    // renders immediately, then the token is validated against /users/me.
    let initial_phase = if stored_token.is_some() && stored_user.is_some() {
        AuthPhase::Checking
    } else {
        AuthPhase::Guest
    };
    let auth = RwSignal::new(initial_phase);
    let current_user = RwSignal::new(stored_user);
    let api = Api {
        notices,
        auth,
        current_user,
    };
    provide_context(api);

    let app = Store::new(AppState::default());
    provide_context(app);

    let (section, set_section) = signal(Section::Projects);
    let (view_mode, set_view_mode) = signal(ViewMode::List);
    let (modal_task, set_modal_task) = signal(None::<i64>);
    let ctx = ViewContext::new(
        (section, set_section),
        (view_mode, set_view_mode),
        (modal_task, set_modal_task),
    );
    provide_context(ctx);

    if initial_phase == AuthPhase::Checking {
        spawn_local(async move {
            actions::validate_stored_session(api).await;
        });
    }

    // Section data loads. Reruns on every navigation and on login;
    // reloading a section twice just replaces the caches again.
    Effect::new(move |_| {
        if auth.get() != AuthPhase::Authed {
            return;
        }
        match section.get() {
            Section::Projects => spawn_local(async move {
                sync::reload_projects(api, app).await;
                sync::ensure_users(api, app).await;
            }),
            Section::Tasks => spawn_local(async move {
                sync::reload_tasks(api, app).await;
                sync::ensure_projects(api, app).await;
                sync::ensure_users(api, app).await;
            }),
        }
    });

    // Checking counts as authenticated for rendering purposes; that is the
    // whole point of the optimistic phase.
    let authed_shell = move || auth.get() != AuthPhase::Guest;

    let nav_class = move |target: Section| {
        if section.get() == target {
            "nav-btn active"
        } else {
            "nav-btn"
        }
    };

    view! {
        <NoticeArea/>

        <header class="app-header">
            <h1>"Task Manager"</h1>
            <Show when=authed_shell>
                <nav class="main-nav">
                    <button class=move || nav_class(Section::Projects) on:click=move |_| ctx.show_section(Section::Projects)>
                        "Projects"
                    </button>
                    <button class=move || nav_class(Section::Tasks) on:click=move |_| ctx.show_section(Section::Tasks)>
                        "Tasks"
                    </button>
                </nav>
                <div class="user-info">
                    <span class="user-name">
                        {move || {
                            current_user
                                .get()
                                .map(|u| format!("Welcome, {}!", u.username))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="nav-btn" on:click=move |_| actions::logout(api)>"Logout"</button>
                </div>
            </Show>
        </header>

        <main class="main-content">
            <Show when=move || !authed_shell()>
                <AuthView/>
            </Show>
            <Show when=authed_shell>
                <Show when=move || section.get() == Section::Projects>
                    <ProjectsSection/>
                </Show>
                <Show when=move || section.get() == Section::Tasks>
                    <TasksSection/>
                </Show>
            </Show>
        </main>
    }
}
