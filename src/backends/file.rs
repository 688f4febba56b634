//! Size-rotated file backend
//!
//! Entries are appended to `<directory>/<log_file_name>`. Once the current
//! file would grow past `max_log_file_size_kb`, it is shifted to
//! `<name>.1`, older backups move up by one, and at most
//! `max_log_files_count` files (current file included) are kept.
//!
//! Backups are discovered on disk rather than derived from the current
//! configuration, so lowering the file count or renaming the file never
//! strands older data: rotation prunes the excess and `purge` removes every
//! file this logger has written.
//!
//! Every file operation runs inside the logger's serialized gate.

use crate::core::{LogEntry, Logger, LoggerConfiguration, LoggerCore, LoggerError, Result};
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The file currently being appended to
struct ActiveFile {
    path: PathBuf,
    writer: BufWriter<File>,
    size: u64,
}

impl ActiveFile {
    fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("Failed to open '{}'", path.display()),
                    e,
                )
            })?;

        let size = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            size,
        })
    }
}

/// Backend persisting entries to rotated plain-text files.
///
/// # Examples
///
/// ```no_run
/// use rust_logger_base::backends::FileLogger;
/// use rust_logger_base::{Logger, LoggerConfiguration, LogLevel};
///
/// let logger = FileLogger::new("/var/log/myapp").unwrap();
/// logger.configure(
///     LoggerConfiguration::configure_defaults()
///         .with_log_file_name("myapp.log")
///         .with_max_log_files_count(5)
///         .with_level(LogLevel::Info),
/// );
/// logger.info("startup", "listening on :8080").unwrap();
/// ```
pub struct FileLogger {
    core: LoggerCore,
    directory: PathBuf,
    active: Mutex<Option<ActiveFile>>,
    written: Mutex<BTreeSet<PathBuf>>,
}

impl FileLogger {
    /// Create a file logger writing below `directory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        Self::with_configuration(directory, LoggerConfiguration::default())
    }

    /// Create a file logger with an explicit starting configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_configuration<P: AsRef<Path>>(
        directory: P,
        config: LoggerConfiguration,
    ) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();

        fs::create_dir_all(&directory).map_err(|e| {
            LoggerError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", directory.display()),
                e,
            )
        })?;

        Ok(Self {
            core: LoggerCore::with_configuration(config),
            directory,
            active: Mutex::new(None),
            written: Mutex::new(BTreeSet::new()),
        })
    }

    /// Path of the file currently written to
    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.directory.join(self.core.log_file_name())
    }

    /// Get backup file path for given index
    fn backup_path(base_path: &Path, index: u32) -> PathBuf {
        let mut path = base_path.to_path_buf();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.log")
            .to_string();
        path.set_file_name(format!("{}.{}", filename, index));
        path
    }

    /// Backups of `base_path` found on disk, oldest (highest index) first
    fn existing_backups(base_path: &Path) -> Result<Vec<(u32, PathBuf)>> {
        let (Some(directory), Some(file_name)) =
            (base_path.parent(), base_path.file_name().and_then(|n| n.to_str()))
        else {
            return Ok(Vec::new());
        };
        let prefix = format!("{}.", file_name);

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(LoggerError::io_operation(
                    "listing log directory",
                    format!("Failed to read '{}'", directory.display()),
                    e,
                ))
            }
        };

        let mut backups: Vec<(u32, PathBuf)> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name();
                let index = name.to_str()?.strip_prefix(&prefix)?.parse::<u32>().ok()?;
                (index > 0).then(|| (index, entry.path()))
            })
            .collect();
        backups.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(backups)
    }

    /// Shift backups and move the current file to `.1`.
    ///
    /// Backups that would land past `max_files` are removed. Caller holds
    /// the gate and has already closed the active writer.
    fn rotate(base_path: &Path, max_files: u32) -> Result<()> {
        let backups = Self::existing_backups(base_path)?;

        if max_files <= 1 {
            for (_, backup) in &backups {
                Self::remove_if_exists(backup)?;
            }
            return Self::remove_if_exists(base_path);
        }

        for (index, old_path) in backups {
            if index >= max_files - 1 {
                if let Err(e) = Self::remove_if_exists(&old_path) {
                    eprintln!(
                        "[LOGGER WARN] Failed to remove old backup {}: {}",
                        old_path.display(),
                        e
                    );
                }
                continue;
            }

            let new_path = Self::backup_path(base_path, index + 1);
            // On some platforms, rename fails if destination exists
            if fs::rename(&old_path, &new_path).is_err() {
                let _ = fs::remove_file(&new_path);
                fs::rename(&old_path, &new_path).map_err(|e| {
                    LoggerError::io_operation(
                        "rotating log files",
                        format!("Failed to rename '{}'", old_path.display()),
                        e,
                    )
                })?;
            }
        }

        if base_path.exists() {
            fs::rename(base_path, Self::backup_path(base_path, 1)).map_err(|e| {
                LoggerError::io_operation(
                    "rotating log files",
                    format!("Failed to rotate current log file '{}'", base_path.display()),
                    e,
                )
            })?;
        }

        Ok(())
    }

    /// Remove `base_path` and all of its backups
    fn remove_with_backups(base_path: &Path) -> Result<()> {
        for (_, backup) in Self::existing_backups(base_path)? {
            Self::remove_if_exists(&backup)?;
        }
        Self::remove_if_exists(base_path)
    }

    fn remove_if_exists(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LoggerError::io_operation(
                "removing log file",
                format!("Failed to remove '{}'", path.display()),
                e,
            )),
        }
    }

    fn read_lines(path: &Path, into: &mut Vec<String>) -> Result<()> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(LoggerError::io_operation(
                    "reading log file",
                    format!("Failed to open '{}'", path.display()),
                    e,
                ))
            }
        };

        for line in BufReader::new(file).lines() {
            let line = line?;
            if !line.is_empty() {
                into.push(line);
            }
        }
        Ok(())
    }

    /// Flush buffered entries to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn flush(&self) -> Result<()> {
        self.core.locked_invoke(|| {
            if let Some(active) = self.active.lock().as_mut() {
                active.writer.flush()?;
            }
            Ok(())
        })
    }
}

impl Logger for FileLogger {
    fn core(&self) -> &LoggerCore {
        &self.core
    }

    fn write_entry(&self, _entry: &LogEntry, formatted: &str) -> Result<()> {
        let config = self.core.configuration();
        let path = self.directory.join(&config.log_file_name);
        let max_bytes = config.max_log_file_size_bytes();
        let len = formatted.len() as u64;

        self.core.locked_invoke(|| {
            let mut active = self.active.lock();

            // Configuration may have renamed the file since the last write
            if active.as_ref().is_some_and(|a| a.path != path) {
                if let Some(mut old) = active.take() {
                    old.writer.flush()?;
                }
            }

            // A zero size limit disables rotation
            let current_size = match active.as_ref() {
                Some(a) => a.size,
                None => fs::metadata(&path).map(|m| m.len()).unwrap_or(0),
            };
            let needs_rotation =
                max_bytes > 0 && current_size > 0 && current_size + len > max_bytes;

            if needs_rotation {
                if let Some(mut old) = active.take() {
                    old.writer.flush()?;
                }
                Self::rotate(&path, config.max_log_files_count)?;
            }

            if active.is_none() {
                *active = Some(ActiveFile::open(&path)?);
                self.written.lock().insert(path.clone());
            }

            if let Some(file) = active.as_mut() {
                file.writer.write_all(formatted.as_bytes())?;
                file.writer.flush()?;
                file.size += len;
            }

            if config.log_to_console {
                let mut stdout = io::stdout().lock();
                stdout.write_all(formatted.as_bytes())?;
            }

            Ok(())
        })
    }

    fn local_storage_path(&self) -> Result<PathBuf> {
        Ok(self.directory.clone())
    }

    fn get_all(&self, in_descending_order: bool) -> Result<Vec<String>> {
        let config = self.core.configuration();
        let path = self.directory.join(&config.log_file_name);

        self.core.locked_invoke(|| {
            if let Some(active) = self.active.lock().as_mut() {
                active.writer.flush()?;
            }

            let mut lines = Vec::new();
            for (_, backup) in Self::existing_backups(&path)? {
                Self::read_lines(&backup, &mut lines)?;
            }
            Self::read_lines(&path, &mut lines)?;

            if in_descending_order {
                lines.reverse();
            }
            Ok(lines)
        })
    }

    fn purge(&self) -> Result<()> {
        let path = self.log_file_path();

        self.core.locked_invoke(|| {
            if let Some(mut active) = self.active.lock().take() {
                active.writer.flush()?;
            }

            let mut written = self.written.lock();
            written.insert(path.clone());
            for base_path in written.iter() {
                Self::remove_with_backups(base_path)?;
            }
            written.clear();
            Ok(())
        })
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        if let Some(active) = self.active.get_mut().as_mut() {
            let _ = active.writer.flush();
        }
    }
}
