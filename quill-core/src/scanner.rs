use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("content directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("content path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub struct ContentScanner {
    source_dir: PathBuf,
}

impl ContentScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source_dir: path.as_ref().to_path_buf(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Every `.md` file under the source dir, depth first.
    ///
    /// Order follows the filesystem listing and is not sorted.
    pub fn scan(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.source_dir.exists() {
            return Err(ScanError::NotFound(self.source_dir.clone()));
        }
        if !self.source_dir.is_dir() {
            return Err(ScanError::NotADirectory(self.source_dir.clone()));
        }

        debug!("Scanning: {}", self.source_dir.display());

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.source_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            if entry.file_type().is_file() && is_markdown(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        debug!("Discovered {} markdown files", paths.len());
        Ok(paths)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map(|ext| ext == "md").unwrap_or(false)
}
