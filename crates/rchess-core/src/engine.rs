//! Engine controller owning the resources that option change hooks drive.

use log::{debug, info};

use crate::logger::{DebugLog, LoggerError};
use crate::syzygy::Tablebases;
use crate::tt::TranspositionTable;

/// Default transposition table size in megabytes.
pub const DEFAULT_HASH_MB: usize = 16;

/// Hard cap on search threads, matching the advertised option bounds.
pub const MAX_THREADS: usize = 512;

/// The engine contains no internal synchronization; callers share it behind
/// a single `Arc<Mutex<_>>` boundary.
pub struct Engine {
    tt: TranspositionTable,
    tablebases: Tablebases,
    debug_log: DebugLog,
    threads: usize,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::new(DEFAULT_HASH_MB),
            tablebases: Tablebases::default(),
            debug_log: DebugLog::default(),
            threads: 1,
        }
    }

    /// Resize the worker pool. Requests are clamped to `1..=MAX_THREADS`.
    pub fn set_threads(&mut self, requested: usize) {
        self.threads = requested.clamp(1, MAX_THREADS);
        info!("search threads set to {}", self.threads);
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn set_hash_size(&mut self, mb: usize) {
        self.tt.resize(mb);
        info!("transposition table resized to {mb} MB");
    }

    pub fn clear_hash(&mut self) {
        self.tt.clear();
        debug!("transposition table cleared");
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn tt_mut(&mut self) -> &mut TranspositionTable {
        &mut self.tt
    }

    pub fn set_tablebase_paths(&mut self, spec: &str) {
        self.tablebases.init(spec);
    }

    pub fn tablebases(&self) -> &Tablebases {
        &self.tablebases
    }

    /// Start mirroring protocol traffic into `path`; an empty path stops
    /// the mirror.
    pub fn start_debug_log(&mut self, path: &str) -> Result<(), LoggerError> {
        self.debug_log.start(path)
    }

    pub fn debug_log_active(&self) -> bool {
        self.debug_log.is_active()
    }

    pub fn log_sent(&mut self, line: &str) {
        self.debug_log.write_sent(line);
    }

    pub fn log_received(&mut self, line: &str) {
        self.debug_log.write_received(line);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_requests_are_clamped() {
        let mut engine = Engine::new();
        engine.set_threads(0);
        assert_eq!(engine.threads(), 1);
        engine.set_threads(8);
        assert_eq!(engine.threads(), 8);
        engine.set_threads(10_000);
        assert_eq!(engine.threads(), MAX_THREADS);
    }

    #[test]
    fn hash_resize_reaches_the_table() {
        let mut engine = Engine::new();
        let before = engine.tt().cluster_count();
        engine.set_hash_size(DEFAULT_HASH_MB * 2);
        assert_eq!(engine.tt().cluster_count(), before * 2);
    }

    #[test]
    fn clear_hash_wipes_stored_entries() {
        let mut engine = Engine::new();
        engine.tt_mut().store(0xABCD, 7, 3);
        assert!(engine.tt().probe(0xABCD).is_some());
        engine.clear_hash();
        assert!(engine.tt().probe(0xABCD).is_none());
    }
}
