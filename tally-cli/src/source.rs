//! Loading the document to analyze.

use std::fs;
use std::path::Path;

use tally_types::LoadError;

/// Reads the whole file at `path` as UTF-8 text.
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read and
/// `LoadError::InvalidUtf8` if its content is not UTF-8.
pub fn load(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = text.len(), "document loaded");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Hello, café.\r\n\r\nBye.").unwrap();

        let text = load(file.path()).unwrap();
        assert_eq!(text, "Hello, café.\r\n\r\nBye.");
    }

    #[test]
    fn loads_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(load(file.path()).unwrap(), "");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.txt");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn binary_file_is_utf8_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xff, 0xfe]).unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidUtf8 { .. }));
    }
}
