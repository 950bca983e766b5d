//! Append-only upload-history store
//!
//! JSON-lines file, one record per line. Appends are single atomic inserts;
//! the schema migration pass runs once at open, before any insert.

use crate::record::UploadRecord;
use reviewlens_core::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How many records history queries return by default
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// File-backed upload-history store.
pub struct HistoryStore {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl HistoryStore {
    /// Open (creating if needed) the store at `path` and run the one-shot
    /// schema migration over existing records.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::persistence(format!("failed to create history dir: {e}")))?;
            }
        }

        migrate_file(&path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                Error::persistence(format!("failed to open {}: {e}", path.display()))
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Append one record. Flushed immediately so each append lands as a
    /// single atomic insert.
    pub fn append(&mut self, record: &UploadRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .and_then(|_| self.writer.flush())
            .map_err(|e| Error::persistence(format!("failed to append history record: {e}")))?;
        debug!(id = %record.id, filename = %record.filename, "recorded upload");
        Ok(())
    }

    /// Most recent `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<UploadRecord>> {
        let mut records = read_all(&self.path)?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    /// Delete all history.
    pub fn clear(&mut self) -> Result<()> {
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::persistence(format!("failed to clear history: {e}")))?;
        self.writer = BufWriter::new(
            OpenOptions::new()
                .append(true)
                .open(&self.path)
                .map_err(|e| Error::persistence(format!("failed to reopen history: {e}")))?,
        );
        info!(path = %self.path.display(), "cleared upload history");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_all(path: &Path) -> Result<Vec<UploadRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(Error::persistence(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let mut records = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::persistence(format!("failed to read history: {e}")))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<UploadRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                // a torn or corrupt line must not take the whole store down
                warn!(line = lineno + 1, error = %e, "skipping unreadable history record");
            }
        }
    }
    Ok(records)
}

/// Upgrade any pre-current-schema records, rewriting the file once.
fn migrate_file(path: &Path) -> Result<()> {
    let mut records = read_all(path)?;
    let upgraded = records.iter_mut().map(|r| r.migrate()).filter(|&m| m).count();
    if upgraded == 0 {
        return Ok(());
    }

    let tmp_path = path.with_extension("jsonl.tmp");
    {
        let tmp = File::create(&tmp_path)
            .map_err(|e| Error::persistence(format!("failed to write migration file: {e}")))?;
        let mut writer = BufWriter::new(tmp);
        for record in &records {
            let line = serde_json::to_string(record)?;
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| Error::persistence(format!("failed to write migration file: {e}")))?;
        }
        writer
            .flush()
            .map_err(|e| Error::persistence(format!("failed to flush migration file: {e}")))?;
    }
    std::fs::rename(&tmp_path, path)
        .map_err(|e| Error::persistence(format!("failed to swap migrated history: {e}")))?;
    info!(upgraded, path = %path.display(), "migrated upload-history records");
    Ok(())
}
