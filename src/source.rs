//! The sender's file enumerator: produces `(name, size)` pairs and reads a
//! named file's full contents under a size cap (spec §6 "File enumerator").

use crate::constants::DEFAULT_FILE_SIZE_CAP;
use crate::error::FileSourceError;
use std::fs;
use std::path::{Path, PathBuf};

/// A source of candidate files for the sender to transmit.
pub trait FileSource {
    /// Returns the next candidate file, or `None` when exhausted for this
    /// enumeration pass.
    fn next_file(&mut self) -> Option<(String, u64)>;

    /// Reads the full contents of `name`, failing if it exceeds `cap` bytes.
    fn read_file(&mut self, name: &str, cap: u64) -> Result<Vec<u8>, FileSourceError>;
}

/// Directory-backed file source: enumerates files with a JPEG/WebP
/// extension under `dir`, oldest-enumerated-first by directory read order.
pub struct DirFileSource {
    dir: PathBuf,
    pending: Vec<PathBuf>,
}

impl DirFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirFileSource {
            dir: dir.into(),
            pending: Vec::new(),
        }
    }

    fn is_candidate(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref(),
            Some("jpg") | Some("jpeg") | Some("webp")
        )
    }

    /// Rescans the directory, replacing the pending queue.
    pub fn rescan(&mut self) -> std::io::Result<()> {
        let mut found = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && Self::is_candidate(&path) {
                found.push(path);
            }
        }
        found.sort();
        self.pending = found;
        Ok(())
    }
}

impl FileSource for DirFileSource {
    fn next_file(&mut self) -> Option<(String, u64)> {
        if self.pending.is_empty() {
            let _ = self.rescan();
        }
        while let Some(path) = self.pending.pop() {
            if let Ok(meta) = fs::metadata(&path) {
                let name = path.to_string_lossy().into_owned();
                return Some((name, meta.len()));
            }
        }
        None
    }

    fn read_file(&mut self, name: &str, cap: u64) -> Result<Vec<u8>, FileSourceError> {
        let meta = fs::metadata(name).map_err(|e| FileSourceError::ReadFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        if meta.len() > cap {
            return Err(FileSourceError::TooLarge {
                name: name.to_string(),
                size: meta.len(),
                cap,
            });
        }
        fs::read(name).map_err(|e| FileSourceError::ReadFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for DirFileSource {
    fn default() -> Self {
        DirFileSource::new(".")
    }
}

/// Default size cap applied by [`DirFileSource`] callers that don't
/// override it (spec §6: files larger than the cap are skipped).
pub fn default_size_cap() -> u64 {
    DEFAULT_FILE_SIZE_CAP
}

/// In-memory file source for tests: a fixed queue of `(name, bytes)` pairs.
#[derive(Debug, Default)]
pub struct MockFileSource {
    files: Vec<(String, Vec<u8>)>,
    cursor: usize,
}

impl MockFileSource {
    pub fn new(files: Vec<(String, Vec<u8>)>) -> Self {
        MockFileSource { files, cursor: 0 }
    }
}

impl FileSource for MockFileSource {
    fn next_file(&mut self) -> Option<(String, u64)> {
        let (name, bytes) = self.files.get(self.cursor)?;
        self.cursor += 1;
        Some((name.clone(), bytes.len() as u64))
    }

    fn read_file(&mut self, name: &str, cap: u64) -> Result<Vec<u8>, FileSourceError> {
        let (_, bytes) = self
            .files
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| FileSourceError::ReadFailed {
                name: name.to_string(),
                reason: "not found".to_string(),
            })?;
        if bytes.len() as u64 > cap {
            return Err(FileSourceError::TooLarge {
                name: name.to_string(),
                size: bytes.len() as u64,
                cap,
            });
        }
        Ok(bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_source_yields_files_in_order_then_none() {
        let mut src = MockFileSource::new(vec![
            ("a.jpg".into(), vec![1, 2, 3]),
            ("b.webp".into(), vec![4, 5]),
        ]);
        assert_eq!(src.next_file(), Some(("a.jpg".into(), 3)));
        assert_eq!(src.next_file(), Some(("b.webp".into(), 2)));
        assert_eq!(src.next_file(), None);
    }

    #[test]
    fn mock_source_rejects_oversize_read() {
        let mut src = MockFileSource::new(vec![("big.jpg".into(), vec![0u8; 100])]);
        let err = src.read_file("big.jpg", 10).unwrap_err();
        assert!(matches!(err, FileSourceError::TooLarge { .. }));
    }
}
