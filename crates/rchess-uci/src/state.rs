//! Engine-side option wiring: the standard option set and its change hooks.

use std::sync::{Arc, Mutex, MutexGuard};

use rchess_core::Engine;

use crate::options::{OptionsMap, UciOption};

/// Upper bound for the `Hash` option, in megabytes.
#[cfg(target_pointer_width = "64")]
pub const MAX_HASH_MB: i64 = 131_072;
#[cfg(not(target_pointer_width = "64"))]
pub const MAX_HASH_MB: i64 = 2048;

pub struct EngineState {
    pub engine: Arc<Mutex<Engine>>,
    pub options: OptionsMap,
}

/// Lock the engine, recovering the guard if a previous holder panicked.
fn lock(engine: &Arc<Mutex<Engine>>) -> MutexGuard<'_, Engine> {
    match engine.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl EngineState {
    pub fn new() -> Self {
        let engine = Arc::new(Mutex::new(Engine::new()));
        let options = standard_options(&engine);
        Self { engine, options }
    }

    pub fn lock_engine(&self) -> MutexGuard<'_, Engine> {
        lock(&self.engine)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare every engine option with its default, bounds, and change hook.
/// Declaration order fixes the order the options are printed in.
pub fn standard_options(engine: &Arc<Mutex<Engine>>) -> OptionsMap {
    let mut o = OptionsMap::new();

    o.add("Protocol", UciOption::combo("uci", &["uci", "xboard"]));
    o.add("Debug Log File", {
        let engine = Arc::clone(engine);
        UciOption::string("").on_change(move |opt| {
            if let Err(err) = lock(&engine).start_debug_log(opt.as_str()) {
                panic!("{err}");
            }
        })
    });
    o.add("Contempt", UciOption::spin(21.0, -100, 100));
    o.add(
        "Analysis Contempt",
        UciOption::combo("Both", &["Both", "Off", "White", "Black"]),
    );
    o.add("Threads", {
        let engine = Arc::clone(engine);
        UciOption::spin(1.0, 1, 512)
            .on_change(move |opt| lock(&engine).set_threads(opt.as_f64() as usize))
    });
    o.add("Hash", {
        let engine = Arc::clone(engine);
        UciOption::spin(16.0, 1, MAX_HASH_MB)
            .on_change(move |opt| lock(&engine).set_hash_size(opt.as_f64() as usize))
    });
    o.add("Clear Hash", {
        let engine = Arc::clone(engine);
        UciOption::button().on_change(move |_| lock(&engine).clear_hash())
    });
    o.add("Ponder", UciOption::check(false));
    o.add("MultiPV", UciOption::spin(1.0, 1, 500));
    o.add("Skill Level", UciOption::spin(20.0, 0, 20));
    o.add("Move Overhead", UciOption::spin(30.0, 0, 5000));
    o.add("Minimum Thinking Time", UciOption::spin(20.0, 0, 5000));
    o.add("Slow Mover", UciOption::spin(84.0, 10, 1000));
    o.add("nodestime", UciOption::spin(0.0, 0, 10000));
    o.add("UCI_Chess960", UciOption::check(false));
    o.add("UCI_AnalyseMode", UciOption::check(false));
    o.add("SyzygyPath", {
        let engine = Arc::clone(engine);
        UciOption::string("<empty>")
            .on_change(move |opt| lock(&engine).set_tablebase_paths(opt.as_str()))
    });
    o.add("SyzygyProbeDepth", UciOption::spin(1.0, 1, 100));
    o.add("Syzygy50MoveRule", UciOption::check(true));
    o.add("SyzygyProbeLimit", UciOption::spin(6.0, 0, 6));

    o
}
