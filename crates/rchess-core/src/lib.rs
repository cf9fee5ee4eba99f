//! Core engine services for rchess.
//!
//! Everything the protocol layer's option hooks drive lives here: the
//! transposition table, the tablebase path registry, the debug log sink,
//! and the [`Engine`] controller that ties them together behind a single
//! lock.

pub mod engine;
pub mod logger;
pub mod syzygy;
pub mod tt;

pub use engine::Engine;
pub use logger::{DebugLog, LoggerError};
pub use syzygy::Tablebases;
pub use tt::TranspositionTable;
