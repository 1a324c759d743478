use std::path::Path;

use super::error::FormError;

/// File extensions the form advertises as accepted. The filter is
/// advisory: the service contract does not enforce it, and neither does
/// the loader.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "md", "csv", "json", "html"];

/// A file picked for classification.
///
/// `bytes` is what actually gets uploaded; `preview` is the lossily
/// decoded content mirrored into the visible text field. The preview is
/// never the submission payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub preview: String,
}

impl DocumentFile {
    /// Builds a document from in-memory bytes, decoding the preview.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let preview = String::from_utf8_lossy(&bytes).into_owned();
        Self {
            name: name.into(),
            bytes,
            preview,
        }
    }

    /// Reads a file from disk asynchronously and decodes its preview.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();

        if !has_accepted_extension(path) {
            log::warn!(
                "File '{}' is outside the accepted extensions ({}); submitting anyway",
                path.display(),
                ACCEPTED_EXTENSIONS.join(", ")
            );
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| FormError::Unknown(format!("could not read {}: {}", path.display(), e)))?;
        log::info!("Read {} bytes from {}", bytes.len(), path.display());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::from_bytes(name, bytes))
    }
}

/// Checks a path against the advisory accept filter.
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// The currently held user input: free text or a selected file, never
/// both. Entering text discards the file; picking a file discards the
/// text. The variant switch is what enforces the exclusivity.
#[derive(Debug, Clone, PartialEq)]
pub enum InputState {
    Text(String),
    File(DocumentFile),
}

impl Default for InputState {
    fn default() -> Self {
        InputState::Text(String::new())
    }
}

impl InputState {
    /// True when there is nothing to submit.
    pub fn is_empty(&self) -> bool {
        match self {
            InputState::Text(text) => text.is_empty(),
            InputState::File(_) => false,
        }
    }

    /// The text shown in the input field: the entered text, or the
    /// decoded preview of the selected file.
    pub fn display_text(&self) -> &str {
        match self {
            InputState::Text(text) => text,
            InputState::File(file) => &file.preview,
        }
    }

    /// The selected file, when one is held.
    pub fn file(&self) -> Option<&DocumentFile> {
        match self {
            InputState::Text(_) => None,
            InputState::File(file) => Some(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let input = InputState::default();
        assert!(input.is_empty());
        assert_eq!(input.display_text(), "");
        assert!(input.file().is_none());
    }

    #[test]
    fn test_file_preview_is_decoded_content() {
        let doc = DocumentFile::from_bytes("hello.txt", b"hello".to_vec());
        assert_eq!(doc.preview, "hello");
        assert_eq!(doc.bytes, b"hello");

        let input = InputState::File(doc);
        assert_eq!(input.display_text(), "hello");
        assert!(!input.is_empty());
    }

    #[test]
    fn test_preview_decodes_lossily() {
        let doc = DocumentFile::from_bytes("raw.bin", vec![0x68, 0x69, 0xff]);
        assert!(doc.preview.starts_with("hi"));
        assert_eq!(doc.bytes.len(), 3);
    }

    #[test]
    fn test_accepted_extensions() {
        assert!(has_accepted_extension(Path::new("notes.txt")));
        assert!(has_accepted_extension(Path::new("REPORT.MD")));
        assert!(has_accepted_extension(Path::new("data.csv")));
        assert!(!has_accepted_extension(Path::new("archive.zip")));
        assert!(!has_accepted_extension(Path::new("no_extension")));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = DocumentFile::load("/definitely/not/here.txt").await;
        assert!(result.is_err());
    }
}
