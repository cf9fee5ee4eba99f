//! Prints the engine's option registry in the selected protocol dialect.
//!
//! # Usage
//!
//! ```shell
//! cargo run -p rchess-uci -- --protocol xboard --set "Threads=8"
//! ```
//!
//! Assignments go through the registry's normal validation, so values a GUI
//! could not set (out-of-range spins, unknown combo choices) are dropped
//! silently and the advertised defaults are rendered unchanged.

use anyhow::{Context, Result, bail};
use clap::Parser as _;
use log::debug;

use rchess_uci::EngineState;

#[derive(clap::Parser, Debug)]
#[command(about = "print the rchess option registry in UCI or XBoard form")]
struct Cli {
    /// Protocol dialect to render ("uci" or "xboard")
    #[arg(long, default_value = "uci")]
    protocol: String,

    /// Apply a "Name=value" assignment before rendering (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", num_args = 1)]
    set: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = EngineState::new();
    debug!("declared {} options", state.options.len());

    state.options.set("Protocol", &cli.protocol);
    let accepted = state
        .options
        .get("Protocol")
        .context("Protocol option is not declared")?
        .matches(&cli.protocol);
    if !accepted {
        bail!("unknown protocol '{}'", cli.protocol);
    }

    for assignment in &cli.set {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("malformed --set '{assignment}', expected NAME=VALUE");
        };
        let name = name.trim();
        if !state.options.set(name, value) {
            bail!("unknown option '{name}'");
        }
    }

    let rendered = state.options.to_string();
    print!("{rendered}");
    println!();

    let mut engine = state.lock_engine();
    if engine.debug_log_active() {
        for line in rendered.lines().filter(|line| !line.is_empty()) {
            engine.log_sent(line);
        }
    }

    Ok(())
}
