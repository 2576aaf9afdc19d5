use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::types::Result;

/// Append-only corpus file: one cleaned article per line, flushed per write
/// so a crash loses at most one in-flight record.
pub struct CorpusSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl CorpusSink {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    fn lock(&self) -> MutexGuard<'_, File> {
        self.file.lock().expect("corpus sink lock poisoned")
    }

    /// Marks the start of a harvest session in the corpus file.
    pub fn write_session_header(&self, target: Option<u64>, existing_valid: u64) -> Result<()> {
        let target_text = match target {
            Some(n) => n.to_string(),
            None => "unbounded".to_string(),
        };
        let header = format!(
            "\n\n# === New session started at {} ===\n# Target articles: {}\n# Existing valid articles: {}\n",
            Utc::now().to_rfc3339(),
            target_text,
            existing_valid
        );
        let mut file = self.lock();
        file.write_all(header.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Appends one article as a single newline-terminated line.
    pub fn append_article(&self, text: &str) -> Result<()> {
        let mut file = self.lock();
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }

    /// Current on-disk size of the corpus.
    pub fn size_bytes(&self) -> Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
