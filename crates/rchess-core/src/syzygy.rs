//! Endgame tablebase path registry.
//!
//! Holds the directories named by the `SyzygyPath` option. Probing code
//! reads the registered paths; registration only checks that each entry is
//! an existing directory.

use std::path::PathBuf;

use log::{info, warn};

/// Path-list separator used on the wire, following the host convention.
#[cfg(windows)]
const LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const LIST_SEPARATOR: char = ':';

/// Placeholder a GUI sends for "no path configured".
const EMPTY_PLACEHOLDER: &str = "<empty>";

#[derive(Debug, Default)]
pub struct Tablebases {
    paths: Vec<PathBuf>,
}

impl Tablebases {
    /// Replace the registered directories with those listed in `spec`.
    pub fn init(&mut self, spec: &str) {
        self.paths.clear();
        if spec.is_empty() || spec == EMPTY_PLACEHOLDER {
            return;
        }

        for part in spec.split(LIST_SEPARATOR).filter(|p| !p.is_empty()) {
            let dir = PathBuf::from(part);
            if dir.is_dir() {
                self.paths.push(dir);
            } else {
                warn!("tablebase path '{part}' is not a directory, skipping");
            }
        }
        info!("{} tablebase directories registered", self.paths.len());
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
