//! Locale Support
//!
//! Static message tables for the supported locales. The active locale is
//! selected by the leading path segment (`/en`, `/de`) and provided to the
//! UI tree via [`crate::context::AppContext`].

/// Timezone the app presents dates in, fixed for all locales.
pub const TIME_ZONE: &str = "Europe/Vienna";

/// A supported UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::De];

    /// The path segment for this locale.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Label shown on the language switcher button.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "🇬🇧 EN",
            Locale::De => "🇩🇪 DE",
        }
    }

    /// Parse a path segment. Unknown codes return `None`; callers fall
    /// back to [`Locale::default`].
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::De => &DE,
        }
    }
}

/// All user-visible strings for one locale.
pub struct Messages {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub empty: &'static str,
    pub footer: &'static str,
    pub add_person_placeholder: &'static str,
    pub add_person_button: &'static str,
    pub add_person_description: &'static str,
    pub settings_title: &'static str,
    pub settings_export: &'static str,
    pub settings_import: &'static str,
    /// Appended directly after the person's name in card titles and in
    /// shared messages ("Mara's wishlist" / "Maras Wunschzettel").
    pub wishlist_title_suffix: &'static str,
    pub wishlist_add_wish: &'static str,
    pub wishlist_add_button: &'static str,
    pub wishlist_no_wishes: &'static str,
    pub wishlist_share: &'static str,
    pub wishlist_no_items_to_share: &'static str,
    pub wishlist_share_error: &'static str,
    pub delete_confirm: &'static str,
    pub import_success: &'static str,
    pub import_error: &'static str,
}

static EN: Messages = Messages {
    title: "Ho ho ho!",
    subtitle: "Christmas Wishlist 2024",
    empty: "No wishlists yet. Add a person above to get started!",
    footer: "Made with love for the holidays. Your lists never leave this device.",
    add_person_placeholder: "Who is wishing for something?",
    add_person_button: "Add",
    add_person_description: "Add a person to start collecting wishes. Every list is saved on this device.",
    settings_title: "Settings",
    settings_export: "Export wishlists",
    settings_import: "Import wishlists",
    wishlist_title_suffix: "'s wishlist",
    wishlist_add_wish: "Add a wish...",
    wishlist_add_button: "Add wish",
    wishlist_no_wishes: "No wishes yet. Time to dream big!",
    wishlist_share: "Share via WhatsApp",
    wishlist_no_items_to_share: "This wishlist is still empty, there is nothing to share yet.",
    wishlist_share_error: "WhatsApp could not be opened. Please try again.",
    delete_confirm: "Delete?",
    import_success: "Wishlists imported.",
    import_error: "That file could not be imported. The previous lists are unchanged.",
};

static DE: Messages = Messages {
    title: "Ho ho ho!",
    subtitle: "Weihnachtswunschliste 2024",
    empty: "Noch keine Wunschzettel. Füge oben eine Person hinzu!",
    footer: "Mit Liebe für die Feiertage gemacht. Deine Listen bleiben auf diesem Gerät.",
    add_person_placeholder: "Wer wünscht sich etwas?",
    add_person_button: "Hinzufügen",
    add_person_description: "Füge eine Person hinzu, um Wünsche zu sammeln. Alle Listen werden auf diesem Gerät gespeichert.",
    settings_title: "Einstellungen",
    settings_export: "Wunschzettel exportieren",
    settings_import: "Wunschzettel importieren",
    wishlist_title_suffix: "s Wunschzettel",
    wishlist_add_wish: "Wunsch hinzufügen...",
    wishlist_add_button: "Hinzufügen",
    wishlist_no_wishes: "Noch keine Wünsche. Zeit zu träumen!",
    wishlist_share: "Per WhatsApp teilen",
    wishlist_no_items_to_share: "Dieser Wunschzettel ist noch leer, es gibt nichts zu teilen.",
    wishlist_share_error: "WhatsApp konnte nicht geöffnet werden. Bitte versuche es erneut.",
    delete_confirm: "Löschen?",
    import_success: "Wunschzettel importiert.",
    import_error: "Diese Datei konnte nicht importiert werden. Die bisherigen Listen bleiben erhalten.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(*locale));
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("EN"), None);
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_locales_are_translated() {
        let en = Locale::En.messages();
        let de = Locale::De.messages();
        assert_ne!(en.subtitle, de.subtitle);
        assert_ne!(en.add_person_placeholder, de.add_person_placeholder);
        assert_ne!(en.wishlist_title_suffix, de.wishlist_title_suffix);
    }
}
