//! Language Switcher Component
//!
//! One button per supported locale. Switching navigates to the same page
//! under the new locale prefix.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::AppContext;
use crate::i18n::Locale;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    view! {
        <div class="language-switcher">
            {Locale::ALL
                .iter()
                .map(|locale| {
                    let locale = *locale;
                    let navigate = navigate.clone();
                    let is_active = move || ctx.locale.get() == locale;
                    view! {
                        <button
                            class=move || if is_active() { "lang-btn active" } else { "lang-btn" }
                            on:click=move |_| {
                                navigate(&format!("/{}", locale.code()), NavigateOptions::default());
                            }
                        >
                            {locale.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
