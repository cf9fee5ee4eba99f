//! UCI/XBoard protocol layer for the rchess engine.
//!
//! [`options::OptionsMap`] is the heart of the crate: the registry of
//! named, typed, bounded settings a GUI can adjust over the session.
//! [`state::EngineState`] declares the standard option set and wires its
//! change hooks to the engine controller.

pub mod options;
pub mod state;

pub use options::{OptionsMap, UciOption};
pub use state::EngineState;
