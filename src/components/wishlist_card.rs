//! Wishlist Card Component
//!
//! One card per person: share and delete actions, an add-wish form, and
//! the wishes in insertion order.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::share;
use crate::store::{
    store_add_wish, store_remove_person, store_remove_wish, use_app_store, AppStateStoreFields,
};

#[component]
pub fn WishlistCard(person: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (new_wish, set_new_wish) = signal(String::new());

    let wishes = {
        let person = person.clone();
        Memo::new(move |_| {
            store
                .wishlists()
                .read()
                .wishes_of(&person)
                .map(<[String]>::to_vec)
                .unwrap_or_default()
        })
    };

    let add_wish = {
        let person = person.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if store_add_wish(&store, &person, &new_wish.get()) {
                set_new_wish.set(String::new());
            }
        }
    };

    let share = {
        let person = person.clone();
        move |_| share::share_wishlist(&person, &wishes.get_untracked(), ctx.messages())
    };

    let remove_person = {
        let person = person.clone();
        Callback::new(move |()| store_remove_person(&store, &person))
    };

    let wish_rows = {
        let person = person.clone();
        move || {
            let person = person.clone();
            wishes
                .get()
                .into_iter()
                .enumerate()
                .map(|(index, wish)| {
                    let person = person.clone();
                    view! {
                        <li class="wish-row">
                            <span class="wish-text">"🎁 " {wish}</span>
                            <button
                                class="icon-btn remove-btn"
                                on:click=move |_| store_remove_wish(&store, &person, index)
                            >
                                "×"
                            </button>
                        </li>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <section class="wishlist-card">
            <div class="card-header">
                <h2 class="card-title">
                    "🎁 " {person.clone()} {move || ctx.messages().wishlist_title_suffix}
                </h2>
                <div class="card-actions">
                    <button
                        class="icon-btn share-btn"
                        title=move || ctx.messages().wishlist_share
                        on:click=share
                    >
                        "📤"
                    </button>
                    <DeleteConfirmButton button_class="icon-btn delete-btn" on_confirm=remove_person/>
                </div>
            </div>

            <form class="add-wish-form" on:submit=add_wish>
                <input
                    type="text"
                    placeholder=move || ctx.messages().wishlist_add_wish
                    prop:value=move || new_wish.get()
                    on:input=move |ev| set_new_wish.set(event_target_value(&ev))
                />
                <button type="submit">{move || ctx.messages().wishlist_add_button}</button>
            </form>

            <ul class="wish-list">{wish_rows}</ul>

            <Show when=move || wishes.get().is_empty()>
                <p class="no-wishes">{move || ctx.messages().wishlist_no_wishes}</p>
            </Show>
        </section>
    }
}
