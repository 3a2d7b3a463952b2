//! Example mod: logs from both stage hooks.
//!
//! Built as a cdylib; the bridge resolves the exported hook names and calls
//! them with the opaque host handle. A real mod would use the handle to talk
//! back into the host and register itself here.

use liblog::log_info;
use mod_core::{declare_mod_hooks, HostEnv};

fn load_before(host: *mut HostEnv) {
    log_info!(&format!("mod_sample before stage, host handle {:?}", host));
}

fn load_after(host: *mut HostEnv) {
    log_info!(&format!("mod_sample after stage, host handle {:?}", host));
}

declare_mod_hooks!(before: load_before, after: load_after);
