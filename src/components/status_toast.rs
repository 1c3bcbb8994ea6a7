//! Status Toast Component
//!
//! Transient feedback for import results, auto-dismissed after a few
//! seconds. A newer notice restarts the clock; dismissal is keyed by
//! notice id so a stale timer never hides a fresh notice.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn StatusToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        if let Some(notice) = ctx.current_notice() {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                ctx.dismiss(notice.id);
            });
        }
    });

    view! {
        <Show when=move || ctx.current_notice().is_some()>
            <div class="status-toast">
                {move || ctx.current_notice().map(|notice| notice.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
