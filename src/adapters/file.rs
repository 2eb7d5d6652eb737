use crate::domain::ports::Logger;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends each message as a line to a file. The file is opened per message, so
/// external rotation or deletion is picked up on the next write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_log(&self, message: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)?;
        Ok(())
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        if let Err(e) = self.try_log(message) {
            tracing::error!("Failed to log to file {}: {}", self.path.display(), e);
        }
    }
}
