//! Application Context
//!
//! Shared state provided via Leptos Context API: the active locale, the
//! fixed timezone, and a transient notice slot for the status toast.

use leptos::prelude::*;

use crate::i18n::{Locale, Messages, TIME_ZONE};

/// A transient user-facing notice (import feedback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub text: &'static str,
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active locale, derived from the `/:locale` route segment
    pub locale: Memo<Locale>,
    notice: RwSignal<Option<Notice>>,
    notice_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(locale: Memo<Locale>) -> Self {
        Self {
            locale,
            notice: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
        }
    }

    /// Message table for the active locale. Reactive.
    pub fn messages(&self) -> &'static Messages {
        self.locale.get().messages()
    }

    /// Timezone the app presents dates in.
    pub fn time_zone(&self) -> &'static str {
        TIME_ZONE
    }

    /// Currently visible notice, if any. Reactive.
    pub fn current_notice(&self) -> Option<Notice> {
        self.notice.get()
    }

    /// Show a notice, replacing any visible one.
    pub fn notify(&self, text: &'static str) {
        let id = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(id);
        self.notice.set(Some(Notice { id, text }));
    }

    /// Clear the notice with `id`. A newer notice stays visible.
    pub fn dismiss(&self, id: u32) {
        self.notice.update(|current| {
            if current.map(|notice| notice.id) == Some(id) {
                *current = None;
            }
        });
    }
}
