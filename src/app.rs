//! Christmas Wishlist App
//!
//! Routing shell and page layout. The locale is the leading path segment;
//! everything under it is a single page.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{AddPersonForm, LanguageSwitcher, SettingsPanel, StatusToast, WishlistCard};
use crate::context::AppContext;
use crate::i18n::Locale;
use crate::storage::{self, BrowserStorage};
use crate::store::{use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State survives locale switches, so it lives above the router.
    let store = Store::new(AppState::new(storage::load_wishlists(&BrowserStorage)));
    provide_context(store);

    // Persist every collection change to both storage slots.
    Effect::new(move |_| {
        let lists = store.wishlists().read();
        storage::save_wishlists(&BrowserStorage, &lists);
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/en"/> }>
                <Route path=path!("/:locale") view=LocaleShell/>
            </Routes>
        </Router>
    }
}

/// Resolves the locale segment and provides the app context.
#[component]
fn LocaleShell() -> impl IntoView {
    let params = use_params_map();
    let locale = Memo::new(move |_| {
        params
            .read()
            .get("locale")
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_default()
    });
    provide_context(AppContext::new(locale));

    view! { <WishlistPage/> }
}

#[component]
fn WishlistPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (show_settings, set_show_settings) = signal(false);
    let people = Memo::new(move |_| store.wishlists().read().people());

    view! {
        <div class="page">
            <header class="page-header">
                <div class="header-actions">
                    <LanguageSwitcher/>
                    <button
                        class="icon-btn settings-toggle"
                        title=move || ctx.messages().settings_title
                        on:click=move |_| set_show_settings.update(|open| *open = !*open)
                    >
                        "⚙"
                    </button>
                </div>

                <Show when=move || show_settings.get()>
                    <SettingsPanel/>
                </Show>

                <h1 class="page-title">{move || ctx.messages().title}</h1>
                <p class="page-subtitle">{move || ctx.messages().subtitle}</p>

                <AddPersonForm/>
            </header>

            <main class="wishlists">
                <For
                    each=move || people.get()
                    key=|person| person.clone()
                    children=move |person| view! { <WishlistCard person=person/> }
                />
                <Show when=move || store.wishlists().read().is_empty()>
                    <div class="empty-state">
                        <p>{move || ctx.messages().empty}</p>
                    </div>
                </Show>
            </main>

            <footer class="page-footer" title=ctx.time_zone()>
                {move || ctx.messages().footer}
            </footer>

            <StatusToast/>
        </div>
    }
}
