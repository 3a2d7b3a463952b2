pub mod host_env;
pub use host_env::HostEnv;

pub mod hooks;
pub use hooks::{ModLoadFn, LOAD_AFTER_SYMBOL, LOAD_BEFORE_SYMBOL};

pub mod probe;
pub use probe::ProbeCounters;

pub mod mod_macros;
