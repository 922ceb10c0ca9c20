//! Transient Notices
//!
//! Non-blocking error/success messages shown at the top of the page and
//! auto-dismissed after a fixed duration. Errors replace any error already
//! on screen; successes stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ERROR_TTL_MS: u32 = 5000;
const SUCCESS_TTL_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Copyable handle to the notice queue, provided via context.
#[derive(Clone, Copy)]
pub struct Notices {
    list: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        // Only one error on screen at a time
        self.list
            .update(|list| list.retain(|n| n.kind != NoticeKind::Error));
        self.push(NoticeKind::Error, message.into(), ERROR_TTL_MS);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into(), SUCCESS_TTL_MS);
    }

    fn push(&self, kind: NoticeKind, message: String, ttl_ms: u32) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.list.update(|list| list.push(Notice { id, kind, message }));

        let list = self.list;
        spawn_local(async move {
            TimeoutFuture::new(ttl_ms).await;
            list.update(|list| list.retain(|n| n.id != id));
        });
    }

    /// Current notices, newest last.
    pub fn entries(&self) -> ReadSignal<Vec<Notice>> {
        self.list.read_only()
    }
}
