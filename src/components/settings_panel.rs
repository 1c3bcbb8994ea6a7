//! Settings Panel Component
//!
//! Export and import of the whole collection as a JSON file.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{store_replace_all, use_app_store, AppStateStoreFields};
use crate::transfer;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let export = move |_| {
        let lists = store.wishlists().read_untracked();
        if let Err(err) = transfer::download_export(&lists) {
            log::error!("export failed: {err}");
        }
    };

    let pick_file = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let import = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap().clone();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Reset so picking the same file again re-fires the change event.
        input.set_value("");

        spawn_local(async move {
            match transfer::read_file_text(&file)
                .await
                .and_then(|raw| transfer::parse_import(&raw))
            {
                Ok(lists) => {
                    store_replace_all(&store, lists);
                    ctx.notify(ctx.messages().import_success);
                }
                Err(err) => {
                    log::warn!("import rejected: {err}");
                    ctx.notify(ctx.messages().import_error);
                }
            }
        });
    };

    view! {
        <div class="settings-panel">
            <h3>{move || ctx.messages().settings_title}</h3>
            <button class="settings-btn" on:click=export>
                "⬇ " {move || ctx.messages().settings_export}
            </button>
            <button class="settings-btn" on:click=pick_file>
                "⬆ " {move || ctx.messages().settings_import}
            </button>
            <input node_ref=file_input type="file" accept=".json" class="file-input" on:change=import/>
        </div>
    }
}
