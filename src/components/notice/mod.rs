//! Notice delivery.
//!
//! Alerts are drained from their queue and shown with the browser's blocking
//! `alert()`. Toasts stack on screen; each one leaves after the configured
//! duration or when clicked, independently of the others.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::BlogContext;
use crate::config::{BlogConfig, DEFAULT_NOTICE_DURATION_MS};
use crate::models::{Notice, NoticeKind};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/notice/notice.module.css");

#[component]
pub fn Notifications() -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");
    let duration_ms = use_context::<BlogConfig>()
        .map(|c| c.notice_duration_ms)
        .unwrap_or(DEFAULT_NOTICE_DURATION_MS);

    Effect::new(move || {
        if ctx.alerts.with(Vec::is_empty) {
            return;
        }
        for notice in ctx.take_alerts() {
            dom::alert(&notice.message);
        }
    });

    view! {
        <div class=css::stack>
            <For
                each=move || ctx.toasts.get()
                key=|notice| notice.id
                children=move |notice| view! { <Toast notice=notice duration_ms=duration_ms /> }
            />
        </div>
    }
}

/// One toast with its own dismiss timer.
#[component]
fn Toast(notice: Notice, duration_ms: u32) -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");
    let id = notice.id;

    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        ctx.dismiss(id);
    });

    let tone = match notice.kind {
        NoticeKind::Success => css::success,
        NoticeKind::Error => css::error,
    };

    view! {
        <div
            class=format!("{} {}", css::toast, tone)
            role="status"
            on:click=move |_| ctx.dismiss(id)
        >
            {notice.message}
        </div>
    }
}
