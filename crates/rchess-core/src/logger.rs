//! Debug log sink.
//!
//! Mirrors protocol traffic into the file named by the `Debug Log File`
//! option. Every line is flushed as it is written so a crash loses nothing.

use std::fs::{File, OpenOptions};
use std::io::Write;

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot open debug log file '{path}': {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Default)]
pub struct DebugLog {
    file: Option<File>,
}

impl DebugLog {
    /// Start appending to `path`; an empty path stops logging.
    pub fn start(&mut self, path: &str) -> Result<(), LoggerError> {
        if path.is_empty() {
            if self.file.take().is_some() {
                info!("debug log stopped");
            }
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::Open {
                path: path.to_string(),
                source,
            })?;
        self.file = Some(file);
        info!("debug log started at '{path}'");
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    /// Engine-to-GUI line.
    pub fn write_sent(&mut self, line: &str) {
        self.write("<<", line);
    }

    /// GUI-to-engine line.
    pub fn write_received(&mut self, line: &str) {
        self.write(">>", line);
    }

    fn write(&mut self, prefix: &str, line: &str) {
        if let Some(file) = &mut self.file {
            let _ = writeln!(file, "{prefix} {line}");
            let _ = file.flush();
        }
    }
}
