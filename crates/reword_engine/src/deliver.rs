use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliverError {
    #[error("download directory missing or not writable: {0}")]
    DownloadDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the download directory exists; create it if missing.
pub fn ensure_download_dir(dir: &Path) -> Result<(), DeliverError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| DeliverError::DownloadDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(DeliverError::DownloadDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| DeliverError::DownloadDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| DeliverError::DownloadDir(e.to_string()))?;
    Ok(())
}

/// Saves a finished artifact as `{dir}/{file_name}` by materializing a temp
/// file and renaming it into place, so a failed write never leaves a partial
/// download behind.
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, DeliverError> {
        ensure_download_dir(&self.dir)?;

        let target = self.dir.join(file_name);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace an earlier download of the same name.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target)
            .map_err(|e| DeliverError::Io(e.error))?;
        Ok(target)
    }
}
