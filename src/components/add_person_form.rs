//! Add Person Form Component
//!
//! Form for adding a new person with an empty wish list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_add_person, use_app_store};

/// Form for adding a person. Enter submits; the input is cleared on
/// a successful add and left alone when the add is a no-op.
#[component]
pub fn AddPersonForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (name, set_name) = signal(String::new());

    let add_person = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_person(&store, &name.get()) {
            set_name.set(String::new());
        }
    };

    view! {
        <div class="add-person">
            <form class="add-person-form" on:submit=add_person>
                <input
                    type="text"
                    placeholder=move || ctx.messages().add_person_placeholder
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button type="submit">{move || ctx.messages().add_person_button}</button>
            </form>
            <p class="add-person-hint">{move || ctx.messages().add_person_description}</p>
        </div>
    }
}
