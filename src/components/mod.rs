//! UI Components
//!
//! Leptos components for the taskboard shell.

mod auth_view;
mod delete_confirm_button;
mod kanban_board;
mod notices;
mod projects_section;
mod task_modal;
mod tasks_section;

pub use auth_view::AuthView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_board::KanbanBoard;
pub use notices::NoticeArea;
pub use projects_section::ProjectsSection;
pub use task_modal::TaskModal;
pub use tasks_section::TasksSection;

/// Locale-formatted calendar date for an ISO timestamp.
pub(crate) fn format_date(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    date.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

pub(crate) fn format_due_date(due: Option<&str>) -> String {
    match due {
        Some(iso) => format_date(iso),
        None => "No due date".to_string(),
    }
}
