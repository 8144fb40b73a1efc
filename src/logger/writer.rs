//! Request log writer
//!
//! A shared handle to the log file opened at startup. Handlers running on
//! different connections write through the same handle; the mutex keeps
//! each line intact (no interleaved partial lines).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;

use super::format;

pub struct LogWriter {
    file: Mutex<File>,
}

impl LogWriter {
    /// Create the log file, truncating any previous contents.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one timestamped line.
    ///
    /// Write failures are swallowed: a request log write must never fail
    /// the request that produced it.
    pub fn write_line(&self, message: &str) {
        let line = format::format_line(&Local::now(), message);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn temp_log_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("echod-{name}-{}.log", std::process::id()))
    }

    #[test]
    fn test_lines_are_timestamped() {
        let path = temp_log_path("timestamped");
        let writer = LogWriter::create(&path).expect("create log file");
        writer.write_line("hello ==> world");
        writer.write_line("Shutting down");

        let contents = std::fs::read_to_string(&path).expect("read log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            // "YYYY/MM/DD HH:MM:SS " prefix is 20 chars
            assert!(line.len() > 20, "line too short: {line}");
            assert_eq!(line.as_bytes()[4], b'/');
            assert_eq!(line.as_bytes()[10], b' ');
            assert_eq!(line.as_bytes()[13], b':');
        }
        assert!(lines[0].ends_with("hello ==> world"));
        assert!(lines[1].ends_with("Shutting down"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_create_truncates_previous_log() {
        let path = temp_log_path("truncate");
        {
            let writer = LogWriter::create(&path).expect("create log file");
            writer.write_line("old run");
        }
        let writer = LogWriter::create(&path).expect("recreate log file");
        writer.write_line("new run");
        drop(writer);

        let contents = std::fs::read_to_string(&path).expect("read log file");
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("new run"));
        assert!(!contents.contains("old run"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_concurrent_writes_do_not_interleave() {
        let path = temp_log_path("concurrent");
        let writer = Arc::new(LogWriter::create(&path).expect("create log file"));

        let mut handles = Vec::new();
        for t in 0..8 {
            let writer = Arc::clone(&writer);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    writer.write_line(&format!("thread-{t} line-{i} end"));
                }
            }));
        }
        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        let contents = std::fs::read_to_string(&path).expect("read log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 8 * 50);
        for line in lines {
            assert!(
                line.contains("thread-") && line.ends_with("end"),
                "corrupted line: {line}"
            );
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_create_fails_on_bad_path() {
        let result = LogWriter::create("/nonexistent-dir/echod/server.log");
        assert!(result.is_err());
    }
}
