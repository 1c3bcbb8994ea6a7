//! Global Application State Store
//!
//! Uses Leptos reactive_stores so the persistence effect observes every
//! collection change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Wishlists;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All wishlists, person insertion order preserved
    pub wishlists: Wishlists,
}

impl AppState {
    pub fn new(wishlists: Wishlists) -> Self {
        Self { wishlists }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a person with an empty wish list
pub fn store_add_person(store: &AppStore, name: &str) -> bool {
    store.wishlists().write().add_person(name)
}

/// Remove a person and all of their wishes
pub fn store_remove_person(store: &AppStore, name: &str) {
    store.wishlists().write().remove_person(name);
}

/// Append a wish to a person's list
pub fn store_add_wish(store: &AppStore, person: &str, text: &str) -> bool {
    store.wishlists().write().add_wish(person, text)
}

/// Remove the wish at `index` from a person's list
pub fn store_remove_wish(store: &AppStore, person: &str, index: usize) {
    store.wishlists().write().remove_wish(person, index);
}

/// Replace the whole collection (import)
pub fn store_replace_all(store: &AppStore, lists: Wishlists) {
    *store.wishlists().write() = lists;
}
