//! Append-only log file writer on `tokio::fs`.

use async_trait::async_trait;
use daylog_application::LogAppender;
use std::io;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Appends text to files, creating them on first write.
///
/// Each append opens the file in append mode, writes the whole text and
/// flushes. Directories are never created.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileAppender;

#[async_trait]
impl LogAppender for TokioFileAppender {
    fn dir_exists(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    async fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(text.as_bytes()).await?;
        file.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_creates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("20240501.txt");

        TokioFileAppender.append(&path, "one\n").await.unwrap();
        TokioFileAppender.append(&path, "two\n").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[tokio::test]
    async fn test_append_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("20240501.txt");

        assert!(TokioFileAppender.append(&path, "x").await.is_err());
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_dir_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();

        assert!(TokioFileAppender.dir_exists(dir.path()));
        assert!(!TokioFileAppender.dir_exists(&file));
        assert!(!TokioFileAppender.dir_exists(&dir.path().join("nope")));
    }
}
