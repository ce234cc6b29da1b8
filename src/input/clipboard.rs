use super::{LoadError, LoadedDocument};

/// Load the system clipboard's text content.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;
    LoadedDocument::non_empty(text, "clipboard".to_string())
}
