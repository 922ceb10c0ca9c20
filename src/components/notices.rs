//! Notice Area Component
//!
//! Renders the transient error/success notices pushed through the gateway
//! and the action layer.

use leptos::prelude::*;

use crate::api::use_api;
use crate::notify::NoticeKind;

#[component]
pub fn NoticeArea() -> impl IntoView {
    let api = use_api();
    let entries = api.notices.entries();

    view! {
        <div class="notice-area">
            <For
                each=move || entries.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Error => "error",
                        NoticeKind::Success => "success-message",
                    };
                    view! { <div class=class>{notice.message.clone()}</div> }
                }
            />
        </div>
    }
}
