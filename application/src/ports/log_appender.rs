//! Port for the filesystem operations the logger performs.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Append-only access to log files.
///
/// The directory check is synchronous; the append may suspend while the
/// underlying I/O completes. No locking is implied: overlapping appends
/// to one file rely on the operating system's append semantics.
#[async_trait]
pub trait LogAppender: Send + Sync {
    /// Whether `dir` exists and is a directory. Never creates it.
    fn dir_exists(&self, dir: &Path) -> bool;

    /// Append `text` to `path`, creating the file if it is absent.
    async fn append(&self, path: &Path, text: &str) -> io::Result<()>;
}
