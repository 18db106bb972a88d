//! # Local Directory Backend

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::backend::DocumentBackend;
use super::errors::{PostError, PostResult};

/// Documents stored as files directly inside one directory
#[derive(Debug, Clone)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the backend, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> PostResult<Self> {
        let backend = Self::new(root);
        fs::create_dir_all(&backend.root).map_err(|e| {
            PostError::Storage(format!(
                "failed to create store directory {}: {}",
                backend.root.display(),
                e
            ))
        })?;
        Ok(backend)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    // Hidden and without the document extension, so listings skip it.
    fn temp_path(&self, name: &str) -> PathBuf {
        self.root.join(format!(".{}.tmp", name))
    }
}

impl DocumentBackend for LocalBackend {
    fn names(&self) -> PostResult<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            PostError::Storage(format!("failed to read {}: {}", self.root.display(), e))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the read
    fn read(&self, name: &str) -> PostResult<Option<String>> {
        match fs::read(self.full_path(name)) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PostError::Storage(format!("failed to read {}: {}", name, e))),
        }
    }

    /// Write to a temp file, fsync, then rename over the target
    fn write(&self, name: &str, contents: &str) -> PostResult<()> {
        let temp_path = self.temp_path(name);
        let storage_err = |what: &str, e: std::io::Error| {
            PostError::Storage(format!("failed to {} {}: {}", what, name, e))
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| storage_err("create temp file for", e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| storage_err("write", e))?;
        file.sync_all().map_err(|e| storage_err("fsync", e))?;

        if let Err(e) = fs::rename(&temp_path, self.full_path(name)) {
            let _ = fs::remove_file(&temp_path);
            return Err(storage_err("commit", e));
        }

        if let Ok(dir) = File::open(&self.root) {
            let _ = dir.sync_all();
        }
        Ok(())
    }

    fn remove(&self, name: &str) -> PostResult<bool> {
        match fs::remove_file(self.full_path(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PostError::Storage(format!("failed to remove {}: {}", name, e))),
        }
    }

    fn exists(&self, name: &str) -> PostResult<bool> {
        Ok(self.full_path(name).is_file())
    }
}
