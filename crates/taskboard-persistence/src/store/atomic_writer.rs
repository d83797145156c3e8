use std::fs;
use std::io::Write;
use std::path::Path;
use taskboard_core::{BoardError, BoardResult};

/// Atomic file writer that prevents torn records.
/// Writes to a temporary file in the target directory, then renames it over the target.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating the parent directory if needed
    pub fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        // Same directory keeps the rename on one filesystem
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(path)
            .map_err(|e| BoardError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file as UTF-8, `None` when it does not exist
    pub fn read_to_string(path: &Path) -> BoardResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!("Read {} bytes from {}", text.len(), path.display());
                Ok(Some(text))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.json");

        AtomicWriter::write_atomic(&file_path, b"Hello, World!").unwrap();

        let read = AtomicWriter::read_to_string(&file_path).unwrap();
        assert_eq!(read.as_deref(), Some("Hello, World!"));
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.json");

        AtomicWriter::write_atomic(&file_path, b"First").unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").unwrap();

        let read = AtomicWriter::read_to_string(&file_path).unwrap();
        assert_eq!(read.as_deref(), Some("Second"));
    }

    #[test]
    fn test_creates_missing_parent() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested/deeper/test.json");

        AtomicWriter::write_atomic(&file_path, b"{}").unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempdir().unwrap();
        let read = AtomicWriter::read_to_string(&dir.path().join("absent.json")).unwrap();
        assert!(read.is_none());
    }
}
