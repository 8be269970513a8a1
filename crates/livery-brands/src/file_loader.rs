//! Structured document loading for brand and section files.
//!
//! Brand data lives in plain data files rather than code. A document is
//! looked up by its stem (`config`, `sections`) inside a directory, and the
//! first file found with a recognized extension wins:
//!
//! | Priority | Extension | Format |
//! |----------|-----------|--------|
//! | 1 (highest) | `.yaml` | YAML |
//! | 2 | `.yml` | YAML |
//! | 3 (lowest) | `.json` | JSON |
//!
//! ```text
//! brands/
//! ├── pmc/
//! │   ├── config.yaml      ← "pmc" entry point
//! │   └── sections.yaml    ← optional section overrides
//! └── chitti/
//!     └── config.json
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Recognized document extensions in priority order.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Serialization format of a document, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Determines the format from a file name's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(DocumentFormat::Yaml),
            Some("json") => Some(DocumentFormat::Json),
            _ => None,
        }
    }
}

/// Error type for document loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read \"{}\": {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The file was read but its content did not deserialize.
    #[error("failed to parse \"{}\": {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The file has no recognized extension.
    #[error("unsupported document format: \"{}\"", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Returns the extension priority for a filename (lower = higher priority).
///
/// ```rust
/// use livery_brands::file_loader::{extension_priority, DOCUMENT_EXTENSIONS};
///
/// assert_eq!(extension_priority("config.yaml", DOCUMENT_EXTENSIONS), 0);
/// assert_eq!(extension_priority("config.json", DOCUMENT_EXTENSIONS), 2);
/// assert_eq!(extension_priority("config.ts", DOCUMENT_EXTENSIONS), usize::MAX);
/// ```
pub fn extension_priority(name: &str, extensions: &[&str]) -> usize {
    extensions
        .iter()
        .position(|ext| name.ends_with(ext))
        .unwrap_or(usize::MAX)
}

/// Finds `<dir>/<stem><ext>` for the highest-priority extension that exists.
pub fn find_document(dir: &Path, stem: &str) -> Option<PathBuf> {
    DOCUMENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}{}", stem, ext)))
        .find(|path| path.is_file())
}

/// Deserializes document content in the given format.
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<T, LoadError> {
    let parsed = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Reads and deserializes a document, choosing the format by extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_document(&content, format, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/config.yml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("config.json")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("config.ts")), None);
    }

    #[test]
    fn test_find_document_prefers_yaml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "{}").unwrap();
        fs::write(dir.path().join("config.yaml"), "a: b").unwrap();

        let found = find_document(dir.path(), "config").unwrap();
        assert_eq!(found.file_name().unwrap(), "config.yaml");
    }

    #[test]
    fn test_find_document_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.ts"), "export default {}").unwrap();
        assert!(find_document(dir.path(), "config").is_none());
    }

    #[test]
    fn test_read_document_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        let json = dir.path().join("doc.json");
        let yaml = dir.path().join("doc.yml");
        fs::write(&json, r#"{"key": "value"}"#).unwrap();
        fs::write(&yaml, "key: value\n").unwrap();

        let a: BTreeMap<String, String> = read_document(&json).unwrap();
        let b: BTreeMap<String, String> = read_document(&yaml).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_read_document_errors() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "key: [unclosed").unwrap();

        let err = read_document::<BTreeMap<String, String>>(&broken).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        let missing = dir.path().join("missing.yaml");
        let err = read_document::<BTreeMap<String, String>>(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));

        let err = read_document::<BTreeMap<String, String>>(Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }
}
