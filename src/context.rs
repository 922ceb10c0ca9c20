//! View Context
//!
//! Navigation state shared via the Leptos Context API: which section is
//! visible, how the task list is presented, and which task the modal is
//! editing. None of this is persisted.

use leptos::prelude::*;

/// Top-level navigable areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Projects,
    Tasks,
}

/// Presentation style within the Tasks section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Kanban,
}

/// View-state signals provided via context
#[derive(Clone, Copy)]
pub struct ViewContext {
    /// Visible section - read
    pub section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
    /// Task presentation mode - read
    pub view_mode: ReadSignal<ViewMode>,
    set_view_mode: WriteSignal<ViewMode>,
    /// Task currently open in the modal (None = closed) - read
    pub modal_task: ReadSignal<Option<i64>>,
    set_modal_task: WriteSignal<Option<i64>>,
}

impl ViewContext {
    pub fn new(
        section: (ReadSignal<Section>, WriteSignal<Section>),
        view_mode: (ReadSignal<ViewMode>, WriteSignal<ViewMode>),
        modal_task: (ReadSignal<Option<i64>>, WriteSignal<Option<i64>>),
    ) -> Self {
        Self {
            section: section.0,
            set_section: section.1,
            view_mode: view_mode.0,
            set_view_mode: view_mode.1,
            modal_task: modal_task.0,
            set_modal_task: modal_task.1,
        }
    }

    /// Navigate to a section. Idempotent; each call re-triggers the
    /// section's data loads.
    pub fn show_section(&self, section: Section) {
        self.set_section.set(section);
    }

    /// Toggle list/kanban. Presentation-only: re-renders from the existing
    /// task cache without refetching.
    pub fn switch_view(&self, mode: ViewMode) {
        self.set_view_mode.set(mode);
    }

    pub fn open_task(&self, task_id: i64) {
        self.set_modal_task.set(Some(task_id));
    }

    pub fn close_task(&self) {
        self.set_modal_task.set(None);
    }
}

pub fn use_view_context() -> ViewContext {
    expect_context::<ViewContext>()
}
