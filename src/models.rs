//! Domain Model
//!
//! People and their ordered wish lists.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One person's wish list.
#[derive(Debug, Clone, PartialEq)]
struct WishlistEntry {
    person: String,
    wishes: Vec<String>,
}

/// Mapping of person name to wishes.
///
/// Person order and wish order are both insertion order, and both are
/// meaningful for display. Serializes as a plain JSON object
/// (`{"Mara": ["Bicycle"]}`), which is also the persisted and exported form.
///
/// Invariants:
/// * person names are non-empty, trimmed strings
/// * duplicate-name insertion is a no-op (first writer wins)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlists {
    entries: Vec<WishlistEntry>,
}

impl Wishlists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person with an empty wish list.
    ///
    /// Returns `false` without changing anything if the trimmed name is
    /// empty or already present.
    pub fn add_person(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.entry(name).is_some() {
            return false;
        }
        self.entries.push(WishlistEntry {
            person: name.to_string(),
            wishes: Vec::new(),
        });
        true
    }

    /// Remove a person and all of their wishes.
    pub fn remove_person(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.person != name);
        self.entries.len() != before
    }

    /// Append a wish to a person's list.
    ///
    /// Returns `false` without changing anything if the trimmed text is
    /// empty or the person is unknown.
    pub fn add_wish(&mut self, person: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.entry_mut(person) {
            Some(entry) => {
                entry.wishes.push(text.to_string());
                true
            }
            None => false,
        }
    }

    /// Remove the wish at `index` from a person's list.
    ///
    /// Unknown person or out-of-range index is a no-op.
    pub fn remove_wish(&mut self, person: &str, index: usize) -> bool {
        match self.entry_mut(person) {
            Some(entry) if index < entry.wishes.len() => {
                entry.wishes.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn wishes_of(&self, person: &str) -> Option<&[String]> {
        self.entry(person).map(|entry| entry.wishes.as_slice())
    }

    /// Person names in insertion order.
    pub fn people(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.person.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, person: &str) -> Option<&WishlistEntry> {
        self.entries.iter().find(|entry| entry.person == person)
    }

    fn entry_mut(&mut self, person: &str) -> Option<&mut WishlistEntry> {
        self.entries.iter_mut().find(|entry| entry.person == person)
    }

    /// Insert an entry as deserialized, applying the key invariants:
    /// keys are trimmed, empty keys dropped, later duplicates ignored.
    fn insert_raw(&mut self, person: String, wishes: Vec<String>) {
        let person = person.trim();
        if person.is_empty() || self.entry(person).is_some() {
            return;
        }
        self.entries.push(WishlistEntry {
            person: person.to_string(),
            wishes,
        });
    }
}

impl Serialize for Wishlists {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.person, &entry.wishes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Wishlists {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WishlistsVisitor;

        impl<'de> Visitor<'de> for WishlistsVisitor {
            type Value = Wishlists;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of person names to lists of wishes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Wishlists, A::Error> {
                let mut lists = Wishlists::new();
                while let Some((person, wishes)) = access.next_entry::<String, Vec<String>>()? {
                    lists.insert_raw(person, wishes);
                }
                Ok(lists)
            }
        }

        deserializer.deserialize_map(WishlistsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_person() {
        let mut lists = Wishlists::new();
        assert!(lists.add_person("Mara"));
        assert_eq!(lists.people(), vec!["Mara"]);
        assert_eq!(lists.wishes_of("Mara"), Some(&[][..]));
    }

    #[test]
    fn test_add_person_trims_name() {
        let mut lists = Wishlists::new();
        assert!(lists.add_person("  Mara  "));
        assert_eq!(lists.people(), vec!["Mara"]);
    }

    #[test]
    fn test_add_person_twice_keeps_one_entry() {
        let mut lists = Wishlists::new();
        assert!(lists.add_person("Mara"));
        assert!(!lists.add_person("Mara"));
        assert!(!lists.add_person("  Mara "));
        assert_eq!(lists.people().len(), 1);
    }

    #[test]
    fn test_add_person_rejects_blank_name() {
        let mut lists = Wishlists::new();
        assert!(!lists.add_person(""));
        assert!(!lists.add_person("   "));
        assert!(lists.is_empty());
    }

    #[test]
    fn test_add_wish_appends_in_order() {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        assert!(lists.add_wish("Mara", "Bicycle"));
        assert!(lists.add_wish("Mara", "Sled"));
        assert_eq!(
            lists.wishes_of("Mara"),
            Some(&["Bicycle".to_string(), "Sled".to_string()][..])
        );
    }

    #[test]
    fn test_add_wish_trims_text() {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        assert!(lists.add_wish("Mara", "  Bicycle "));
        assert_eq!(lists.wishes_of("Mara"), Some(&["Bicycle".to_string()][..]));
    }

    #[test]
    fn test_add_wish_rejects_whitespace() {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        assert!(!lists.add_wish("Mara", "   "));
        assert_eq!(lists.wishes_of("Mara").map(<[String]>::len), Some(0));
    }

    #[test]
    fn test_add_wish_unknown_person() {
        let mut lists = Wishlists::new();
        assert!(!lists.add_wish("Nobody", "Bicycle"));
        assert!(lists.is_empty());
    }

    #[test]
    fn test_remove_wish() {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        lists.add_wish("Mara", "Bicycle");
        assert!(lists.remove_wish("Mara", 0));
        assert_eq!(lists.wishes_of("Mara"), Some(&[][..]));
    }

    #[test]
    fn test_remove_wish_out_of_range() {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        lists.add_wish("Mara", "Bicycle");
        assert!(!lists.remove_wish("Mara", 1));
        assert!(!lists.remove_wish("Nobody", 0));
        assert_eq!(lists.wishes_of("Mara").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_remove_person_drops_all_wishes() {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        lists.add_wish("Mara", "Bicycle");
        lists.add_wish("Mara", "Sled");
        assert!(lists.remove_person("Mara"));
        assert!(lists.is_empty());
        assert_eq!(lists.wishes_of("Mara"), None);
    }

    #[test]
    fn test_serializes_as_object_in_insertion_order() {
        let mut lists = Wishlists::new();
        lists.add_person("Zoe");
        lists.add_person("Anna");
        lists.add_wish("Zoe", "Bicycle");
        let json = serde_json::to_string(&lists).unwrap();
        assert_eq!(json, r#"{"Zoe":["Bicycle"],"Anna":[]}"#);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        lists.add_wish("Mara", "Bicycle");
        let json = serde_json::to_string(&lists).unwrap();
        let parsed: Wishlists = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lists);
    }

    #[test]
    fn test_deserialize_normalizes_keys() {
        let parsed: Wishlists =
            serde_json::from_str(r#"{" Mara ":["Bicycle"],"Mara":["Sled"],"  ":["x"]}"#).unwrap();
        assert_eq!(parsed.people(), vec!["Mara"]);
        assert_eq!(parsed.wishes_of("Mara"), Some(&["Bicycle".to_string()][..]));
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<Wishlists>(r#"["Mara"]"#).is_err());
        assert!(serde_json::from_str::<Wishlists>("42").is_err());
        assert!(serde_json::from_str::<Wishlists>(r#"{"Mara":"Bicycle"}"#).is_err());
    }
}
