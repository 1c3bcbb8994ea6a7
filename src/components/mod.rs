//! UI Components
//!
//! Reusable Leptos components.

mod add_person_form;
mod delete_confirm_button;
mod language_switcher;
mod settings_panel;
mod status_toast;
mod wishlist_card;

pub use add_person_form::AddPersonForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use language_switcher::LanguageSwitcher;
pub use settings_panel::SettingsPanel;
pub use status_toast::StatusToast;
pub use wishlist_card::WishlistCard;
