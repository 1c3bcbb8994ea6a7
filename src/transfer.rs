//! JSON Import / Export
//!
//! Export serializes the whole collection to pretty-printed JSON and hands
//! it to the browser as a download. Import reads a user-chosen file as
//! text and parses it into a full replacement collection. A file that does
//! not parse as a person-to-wishes map is rejected and the prior state is
//! left untouched.

use percent_encoding::utf8_percent_encode;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::Wishlists;
use crate::share::URI_COMPONENT;

pub const EXPORT_FILE_NAME: &str = "christmas-wishlist-2024.json";

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("not a wishlist file: {0}")]
    Parse(String),
    #[error("could not read the file: {0}")]
    Read(String),
    #[error("download could not be started: {0}")]
    Download(String),
}

/// Pretty-printed JSON for the export file.
pub fn to_export_json(lists: &Wishlists) -> Result<String, TransferError> {
    serde_json::to_string_pretty(lists).map_err(|err| TransferError::Download(err.to_string()))
}

/// Parse an imported document into a replacement collection.
pub fn parse_import(raw: &str) -> Result<Wishlists, TransferError> {
    serde_json::from_str(raw).map_err(|err| TransferError::Parse(err.to_string()))
}

/// Read a user-selected file as text.
pub async fn read_file_text(file: &web_sys::File) -> Result<String, TransferError> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|err| TransferError::Read(format!("{err:?}")))?;
    text.as_string()
        .ok_or_else(|| TransferError::Read("file did not decode as text".to_string()))
}

/// Trigger a browser download of the current collection.
///
/// Builds a percent-encoded `data:` URI and clicks a synthesized anchor,
/// so no Blob bookkeeping is needed for a document this small.
pub fn download_export(lists: &Wishlists) -> Result<(), TransferError> {
    let json = to_export_json(lists)?;
    let uri = format!(
        "data:application/json;charset=utf-8,{}",
        utf8_percent_encode(&json, URI_COMPONENT)
    );

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| TransferError::Download("no document".to_string()))?;
    let anchor = document
        .create_element("a")
        .map_err(|err| TransferError::Download(format!("{err:?}")))?;
    anchor
        .set_attribute("href", &uri)
        .map_err(|err| TransferError::Download(format!("{err:?}")))?;
    anchor
        .set_attribute("download", EXPORT_FILE_NAME)
        .map_err(|err| TransferError::Download(format!("{err:?}")))?;
    anchor
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or_else(|| TransferError::Download("anchor is not an element".to_string()))?
        .click();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Wishlists {
        let mut lists = Wishlists::new();
        lists.add_person("Mara");
        lists.add_wish("Mara", "Bicycle");
        lists.add_person("Finn");
        lists
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let json = to_export_json(&sample()).unwrap();
        assert!(json.contains("\n"));
        assert!(json.contains("  \"Mara\""));
    }

    #[test]
    fn test_export_import_round_trip() {
        let json = to_export_json(&sample()).unwrap();
        let imported = parse_import(&json).unwrap();
        assert_eq!(imported, sample());
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        assert!(parse_import("{oops").is_err());
        assert!(parse_import("").is_err());
    }

    #[test]
    fn test_import_rejects_wrong_shape() {
        assert!(parse_import(r#"["Mara"]"#).is_err());
        assert!(parse_import(r#"{"Mara": {"wishes": []}}"#).is_err());
        assert!(parse_import("null").is_err());
    }

    #[test]
    fn test_import_accepts_empty_object() {
        assert!(parse_import("{}").unwrap().is_empty());
    }
}
