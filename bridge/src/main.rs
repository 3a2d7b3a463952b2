//! Minimal standalone host for exercising the bridge from the command line.
//!
//! Usage: bridge <mod-library-path> [stage]
//!
//! Initializes the bridge with a null host handle (the sample mods ignore
//! it) and dispatches a single load, so a freshly built mod cdylib can be
//! smoke-tested without the real host.

use std::env;
use std::path::Path;
use std::process;

use bridge::Bridge;
use bridge_core::{HostHandle, LoadStage};
use liblog::{log_error, Logger};

fn main() {
    Logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <mod-library-path> [stage 0|1]", args[0]);
        process::exit(2);
    }

    let stage_arg = args.get(2).map(String::as_str).unwrap_or("0");
    let stage = match stage_arg.parse::<i32>().ok().and_then(LoadStage::from_index) {
        Some(stage) => stage,
        None => {
            eprintln!("stage must be 0 (before) or 1 (after), got '{}'", stage_arg);
            process::exit(2);
        }
    };

    let bridge = Bridge::new();
    bridge.host_init(HostHandle::new(std::ptr::null_mut()));

    match bridge.load_mod(Path::new(&args[1]), stage) {
        Ok(()) => println!("Dispatched {} for {}", stage.symbol_name(), args[1]),
        Err(e) => {
            log_error!(&e.to_string());
            process::exit(1);
        }
    }
}
