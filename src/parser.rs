use crate::roster::{Record, Roster};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(unix)]
use std::os::unix::io::AsRawFd;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
    #[error("Lock error: {0}")]
    Lock(String),
}

/// RAII guard for file locks - automatically releases lock on drop
struct FileLock {
    #[cfg(unix)]
    file: File,
}

impl FileLock {
    /// Acquire an exclusive lock on a lock file
    #[cfg(unix)]
    fn acquire<P: AsRef<Path>>(lock_path: P) -> Result<Self, ParseError> {
        // Ensure the .orgledger directory exists
        if let Some(parent) = lock_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create the lock file
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        // Acquire exclusive lock (LOCK_EX) - blocks until available
        let fd = file.as_raw_fd();
        let ret = unsafe { libc::flock(fd, libc::LOCK_EX) };

        if ret != 0 {
            return Err(ParseError::Lock(format!(
                "Failed to acquire lock on {:?}: {}",
                lock_path.as_ref(),
                std::io::Error::last_os_error()
            )));
        }

        Ok(FileLock { file })
    }

    #[cfg(not(unix))]
    fn acquire<P: AsRef<Path>>(_lock_path: P) -> Result<Self, ParseError> {
        // On non-Unix systems, we can't use flock - return a no-op lock
        Ok(FileLock {})
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            // Release the lock (LOCK_UN) - best effort, ignore errors on drop
            let fd = self.file.as_raw_fd();
            unsafe {
                libc::flock(fd, libc::LOCK_UN);
            }
        }
    }
}

/// Get the lock file path for a given roster file
fn get_lock_path<P: AsRef<Path>>(roster_path: P) -> PathBuf {
    let roster_path = roster_path.as_ref();
    if let Some(parent) = roster_path.parent() {
        parent.join("roster.lock")
    } else {
        PathBuf::from("roster.lock")
    }
}

/// Load a roster from a JSONL file
/// Uses advisory file locking to prevent concurrent access corruption
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, ParseError> {
    let lock_path = get_lock_path(&path);
    let _lock = FileLock::acquire(&lock_path)?;

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut roster = Roster::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record: Record = serde_json::from_str(trimmed).map_err(|e| ParseError::Json {
            line: line_num + 1,
            source: e,
        })?;
        let duplicate = match &record {
            Record::Employee(e) => roster.get_employee(e.id).is_some(),
            Record::Team(t) => roster.get_team(t.id).is_some(),
            Record::Package(p) => roster.get_package(p.id).is_some(),
            Record::Vacation(v) => roster.get_vacation(v.id).is_some(),
        };
        if duplicate {
            eprintln!(
                "Warning: duplicate {:?} id {} at line {} (overwriting previous definition)",
                record.kind(),
                record.id(),
                line_num + 1
            );
        }
        roster.add_record(record);
    }

    Ok(roster)
    // Lock is automatically released when _lock goes out of scope
}

/// Save a roster to a JSONL file
/// Uses advisory file locking and atomic write (temp file + rename) to
/// prevent data loss on crash.
pub fn save_roster<P: AsRef<Path>>(roster: &Roster, path: P) -> Result<(), ParseError> {
    let path = path.as_ref();
    let lock_path = get_lock_path(path);
    let _lock = FileLock::acquire(&lock_path)?;

    // Write to a temporary file in the same directory, then atomically rename.
    // This ensures a crash mid-write leaves the original file intact.
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(".roster.tmp.{}", std::process::id()));

    let result = (|| -> Result<(), ParseError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;

        for record in roster.records() {
            let json = serde_json::to_string(&record)
                .map_err(|e| ParseError::Json { line: 0, source: e })?;
            writeln!(file, "{}", json)?;
        }

        file.flush()?;
        #[cfg(unix)]
        {
            // fsync to ensure data is on disk before rename
            let rc = unsafe { libc::fsync(file.as_raw_fd()) };
            if rc != 0 {
                return Err(ParseError::Io(std::io::Error::last_os_error()));
            }
        }

        Ok(())
    })();

    if result.is_ok() {
        std::fs::rename(&tmp_path, path)?;
    } else {
        // Clean up temp file on failure
        let _ = std::fs::remove_file(&tmp_path);
    }

    result
    // Lock is automatically released when _lock goes out of scope
}
