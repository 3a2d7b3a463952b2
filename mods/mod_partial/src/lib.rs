//! Test fixture mod exporting only the before-stage hook.
//!
//! Requesting the after stage on this library must fail symbol resolution
//! without this hook ever running; the counter makes that observable.

use mod_core::{declare_mod_hooks, HostEnv, ProbeCounters};

fn partial_before(host: *mut HostEnv) {
    if let Some(counters) = unsafe { (host as *mut ProbeCounters).as_mut() } {
        counters.before_calls += 1;
    }
}

declare_mod_hooks!(before: partial_before);
