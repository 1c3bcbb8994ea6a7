//! WhatsApp Share
//!
//! Formats a wish list as a numbered plain-text message and opens the
//! matching share target: the native app URI on mobile user agents, the
//! web URL everywhere else.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::i18n::Messages;

/// Bytes escaped the way `encodeURIComponent` escapes them: everything
/// except alphanumerics and `-_.!~*'()`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the share message for one person, or `None` when there is
/// nothing to share.
pub fn share_message(person: &str, wishes: &[String], messages: &Messages) -> Option<String> {
    if wishes.is_empty() {
        return None;
    }
    let lines: Vec<String> = wishes
        .iter()
        .enumerate()
        .map(|(index, wish)| format!("{}. {}", index + 1, wish))
        .collect();
    Some(format!(
        "🎄 *{person}{}* 🎁\n\n{}",
        messages.wishlist_title_suffix,
        lines.join("\n")
    ))
}

/// Device sniffing for share-target selection.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    ["iphone", "ipad", "ipod", "android"]
        .iter()
        .any(|probe| user_agent.contains(probe))
}

/// Share-target URL for the message text.
pub fn share_url(text: &str, mobile: bool) -> String {
    let encoded = utf8_percent_encode(text, URI_COMPONENT);
    if mobile {
        format!("whatsapp://send?text={encoded}")
    } else {
        format!("https://api.whatsapp.com/send?text={encoded}")
    }
}

/// Share a person's wish list from the browser.
///
/// An empty list and a failed launch are both surfaced as blocking
/// alerts; there is no other error handling.
pub fn share_wishlist(person: &str, wishes: &[String], messages: &'static Messages) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(text) = share_message(person, wishes, messages) else {
        let _ = window.alert_with_message(messages.wishlist_no_items_to_share);
        return;
    };
    let mobile = window
        .navigator()
        .user_agent()
        .map(|ua| is_mobile_user_agent(&ua))
        .unwrap_or(false);
    let url = share_url(&text, mobile);
    // A blocked popup comes back as Ok(None), treat it like a failed launch.
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) | Err(_) => {
            let _ = window.alert_with_message(messages.wishlist_share_error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn wishes(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_share_message_numbers_wishes() {
        let messages = Locale::En.messages();
        let text = share_message("Mara", &wishes(&["Bicycle", "Sled"]), messages).unwrap();
        assert_eq!(text, "🎄 *Mara's wishlist* 🎁\n\n1. Bicycle\n2. Sled");
    }

    #[test]
    fn test_share_message_empty_list() {
        let messages = Locale::En.messages();
        assert_eq!(share_message("Mara", &[], messages), None);
    }

    #[test]
    fn test_share_message_localized() {
        let messages = Locale::De.messages();
        let text = share_message("Mara", &wishes(&["Schlitten"]), messages).unwrap();
        assert!(text.starts_with("🎄 *Maras Wunschzettel* 🎁"));
    }

    #[test]
    fn test_is_mobile_user_agent() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/130.0"
        ));
    }

    #[test]
    fn test_share_url_scheme_selection() {
        assert!(share_url("hi", true).starts_with("whatsapp://send?text="));
        assert!(share_url("hi", false).starts_with("https://api.whatsapp.com/send?text="));
    }

    #[test]
    fn test_share_url_encoding_matches_encode_uri_component() {
        let url = share_url("a b&c!~*'()-_.", false);
        let (_, query) = url.split_once("text=").unwrap();
        assert_eq!(query, "a%20b%26c!~*'()-_.");
    }
}
