//! Transient-storage spool
//!
//! Each accepted upload is written to the spool directory under a
//! collision-resistant name and owned by a guard value. Dropping the guard
//! removes the file, so cleanup happens on every exit path - success, parse
//! fallback, upstream failure, or timeout. The directory should contain
//! nothing once a request completes.

use std::path::{Path, PathBuf};

use chrono::Utc;
use crashsight_core::AppError;
use uuid::Uuid;

/// A spooled upload, deleted when this value is dropped.
#[derive(Debug)]
pub struct SpooledImage {
    path: PathBuf,
    removed: bool,
}

impl SpooledImage {
    /// Write `data` into `dir` (created on demand) under
    /// `<unix-millis>-<uuid>.<ext>`, taking the extension from the original
    /// filename.
    pub async fn write(dir: &str, original_filename: &str, data: &[u8]) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(dir).await?;

        let extension = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg")
            .to_lowercase();
        let name = format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4(),
            extension
        );
        let path = Path::new(dir).join(name);

        tokio::fs::write(&path, data).await?;

        Ok(Self {
            path,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the spooled bytes back for encoding.
    pub async fn read(&self) -> Result<Vec<u8>, AppError> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    /// Delete the file now. A failed delete is logged, not surfaced - the
    /// analysis already completed and the response must not fail over a
    /// leftover scratch file.
    pub async fn remove(mut self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => self.removed = true,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to remove spooled file");
                // Leave `removed` false so the drop guard retries.
            }
        }
    }
}

impl Drop for SpooledImage {
    fn drop(&mut self) {
        if !self.removed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(error = %e, path = %self.path.display(), "Failed to remove spooled file on drop");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_entries(dir: &TempDir) -> usize {
        std::fs::read_dir(dir.path()).unwrap().count()
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrips() {
        let dir = TempDir::new().unwrap();
        let spooled = SpooledImage::write(dir.path().to_str().unwrap(), "crash.jpg", b"bytes")
            .await
            .unwrap();
        assert_eq!(spooled.read().await.unwrap(), b"bytes");
        assert!(spooled.path().to_string_lossy().ends_with(".jpg"));
    }

    #[tokio::test]
    async fn test_identical_uploads_get_distinct_files() {
        let dir = TempDir::new().unwrap();
        let a = SpooledImage::write(dir.path().to_str().unwrap(), "crash.jpg", b"same")
            .await
            .unwrap();
        let b = SpooledImage::write(dir.path().to_str().unwrap(), "crash.jpg", b"same")
            .await
            .unwrap();
        assert_ne!(a.path(), b.path());
        assert_eq!(dir_entries(&dir), 2);
    }

    #[tokio::test]
    async fn test_explicit_remove_deletes_the_file() {
        let dir = TempDir::new().unwrap();
        let spooled = SpooledImage::write(dir.path().to_str().unwrap(), "crash.png", b"bytes")
            .await
            .unwrap();
        assert_eq!(dir_entries(&dir), 1);
        spooled.remove().await;
        assert_eq!(dir_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_drop_deletes_the_file_on_error_paths() {
        let dir = TempDir::new().unwrap();
        {
            let _spooled =
                SpooledImage::write(dir.path().to_str().unwrap(), "crash.jpg", b"bytes")
                    .await
                    .unwrap();
            assert_eq!(dir_entries(&dir), 1);
        }
        assert_eq!(dir_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_missing_extension_defaults_to_jpg() {
        let dir = TempDir::new().unwrap();
        let spooled = SpooledImage::write(dir.path().to_str().unwrap(), "noext", b"bytes")
            .await
            .unwrap();
        assert!(spooled.path().to_string_lossy().ends_with(".jpg"));
    }
}
