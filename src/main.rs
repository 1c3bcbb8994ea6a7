//! Christmas Wishlist Entry Point

mod app;
mod components;
mod context;
mod i18n;
mod models;
mod share;
mod storage;
mod store;
mod transfer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
