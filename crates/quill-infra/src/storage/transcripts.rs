//! Transcript file store.
//!
//! Saved conversations live as `{name}.json` files under a single
//! directory (by default `<platform data dir>/quill/history`). The store
//! moves opaque transcript text; serializing and validating that text is
//! the core's job.

use std::path::{Path, PathBuf};

use tracing::info;

use quill_types::error::TranscriptError;

/// Named transcript files under one directory.
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default transcript directory under the platform data dir.
    ///
    /// `None` when the platform reports no data directory.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("quill").join("history"))
    }

    /// Directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names are plain file stems; anything that could resolve outside the
    /// store directory is rejected before the join.
    fn path_for(&self, name: &str) -> Result<PathBuf, TranscriptError> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(TranscriptError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Write a transcript under `name`, overwriting any previous save.
    /// Returns the path written.
    pub async fn save(&self, name: &str, transcript: &str) -> Result<PathBuf, TranscriptError> {
        let path = self.path_for(name)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, transcript).await?;
        info!(path = %path.display(), "transcript saved");
        Ok(path)
    }

    /// Read back the transcript saved under `name`.
    pub async fn load(&self, name: &str) -> Result<String, TranscriptError> {
        let path = self.path_for(name)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                info!(path = %path.display(), "transcript loaded");
                Ok(text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TranscriptError::NotFound(name.to_string()))
            }
            Err(e) => Err(TranscriptError::Io(e)),
        }
    }

    /// Names of all saved transcripts, sorted.
    pub async fn list(&self) -> Result<Vec<String>, TranscriptError> {
        let mut names = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            // A store that was never saved to has nothing to list.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(TranscriptError::Io(e)),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
