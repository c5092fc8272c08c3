//! Files queued for bulk import. Nothing is sent until [`ImportQueue::process`]
//! is called.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::remote::{RemoteClient, UploadFile};

/// Largest accepted file, 10 000 MB.
pub const MAX_FILE_SIZE: u64 = 10_000 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileStatus {
    Queued,
    Uploading,
    Done,
    Failed,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileStatus::Queued => "queued",
            FileStatus::Uploading => "uploading",
            FileStatus::Done => "done",
            FileStatus::Failed => "failed",
        })
    }
}

#[derive(Clone, Debug)]
pub struct QueuedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub status: FileStatus,
    /// Displayed progress, 0..=100. The batch goes out as one in-memory
    /// multipart body, so the bar has two steps: 50 once the file is part of
    /// the request, 100 when the server accepted it.
    pub progress: u8,
    pub error: Option<String>,
}

impl QueuedFile {
    /// Transfer progress only fills half the bar; the rest waits for the
    /// server to accept the file.
    pub fn record_progress(&mut self, transferred_percent: u8) {
        self.status = FileStatus::Uploading;
        self.progress = transferred_percent.min(100) / 2;
    }

    pub fn mark_done(&mut self) {
        self.status = FileStatus::Done;
        self.progress = 100;
        self.error = None;
    }

    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = FileStatus::Failed;
        self.error = Some(error.into());
    }

    fn is_pending(&self) -> bool {
        matches!(self.status, FileStatus::Queued | FileStatus::Failed)
    }
}

/// Result of one upload round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportReport {
    pub uploaded: usize,
    /// The server's summary line.
    pub summary: String,
}

#[derive(Clone, Debug, Default)]
pub struct ImportQueue {
    files: Vec<QueuedFile>,
}

impl ImportQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[QueuedFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.files.iter().filter(|f| f.is_pending()).count()
    }

    /// Queues a file. A file with the same name replaces the earlier one.
    pub fn add(&mut self, path: &Path) -> Result<&QueuedFile> {
        let meta = std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
        if meta.is_dir() {
            bail!("{} is a directory", path.display());
        }
        if meta.len() > MAX_FILE_SIZE {
            bail!(
                "{} is too big ({} MB, max {} MB)",
                path.display(),
                meta.len() / (1024 * 1024),
                MAX_FILE_SIZE / (1024 * 1024)
            );
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("no file name in {}", path.display()))?;

        self.files.retain(|f| f.name != name);
        let file = QueuedFile {
            path: path.to_path_buf(),
            name,
            size: meta.len(),
            status: FileStatus::Queued,
            progress: 0,
            error: None,
        };
        tracing::debug!(file = %file.name, size = file.size, "queued for import");
        self.files.push(file);
        Ok(&self.files[self.files.len() - 1])
    }

    pub fn remove(&mut self, name: &str) -> Option<QueuedFile> {
        let pos = self.files.iter().position(|f| f.name == name)?;
        Some(self.files.remove(pos))
    }

    /// Drops files the server already accepted.
    pub fn clear_done(&mut self) {
        self.files.retain(|f| f.status != FileStatus::Done);
    }

    /// Uploads every queued or previously failed file in one request.
    /// Returns `None` when there was nothing to send. On failure the files
    /// stay queued with status `Failed`.
    pub async fn process(&mut self, remote: &RemoteClient) -> Result<Option<ImportReport>> {
        let mut batch = Vec::new();
        let mut uploads = Vec::new();
        for (i, file) in self.files.iter_mut().enumerate() {
            if !file.is_pending() {
                continue;
            }
            match tokio::fs::read(&file.path).await {
                Ok(bytes) => {
                    // the whole file is in the request body from here on
                    file.record_progress(100);
                    uploads.push(UploadFile {
                        file_name: file.name.clone(),
                        bytes,
                    });
                    batch.push(i);
                }
                Err(err) => {
                    tracing::warn!(file = %file.name, error = %err, "cannot read import file");
                    file.mark_failed(format!("read {}: {}", file.path.display(), err));
                }
            }
        }
        if uploads.is_empty() {
            return Ok(None);
        }

        match remote.import_files(uploads).await {
            Ok(summary) => {
                for &i in &batch {
                    self.files[i].mark_done();
                }
                tracing::info!(files = batch.len(), %summary, "import accepted");
                Ok(Some(ImportReport {
                    uploaded: batch.len(),
                    summary,
                }))
            }
            Err(err) => {
                let message = err.to_string();
                for &i in &batch {
                    self.files[i].mark_failed(message.clone());
                }
                Err(err).context("import keys")
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/import_tests.rs"]
mod tests;
