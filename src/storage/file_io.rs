//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure, and a
//! lenient reader for data that must never stop the app from starting.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};

/// Outcome of a lenient JSON read
#[derive(Debug)]
pub enum JsonRead<T> {
    /// The file was parsed
    Loaded(T),
    /// No file, or a zero-length one
    Absent,
    /// The file exists but could not be read or parsed
    Corrupt(String),
}

/// Read JSON from a file without ever failing
///
/// Distinguishes "nothing stored yet" from "stored data is unusable" so the
/// caller can log the latter before falling back to a default.
pub fn read_json_lenient<T, P>(path: P) -> JsonRead<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return JsonRead::Absent,
        Err(e) => return JsonRead::Corrupt(format!("Failed to read {}: {}", path.display(), e)),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return JsonRead::Absent;
    }

    match serde_json::from_slice(&bytes) {
        Ok(value) => JsonRead::Loaded(value),
        Err(e) => JsonRead::Corrupt(format!("Failed to parse {}: {}", path.display(), e)),
    }
}

/// Read JSON from a file, falling back to `T::default()` on any problem
///
/// Unusable data is reported with a warning rather than discarded silently.
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    match read_json_lenient(path) {
        JsonRead::Loaded(value) => value,
        JsonRead::Absent => T::default(),
        JsonRead::Corrupt(reason) => {
            warn!(%reason, "discarding unreadable stored data");
            T::default()
        }
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> ExpenseResult<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
