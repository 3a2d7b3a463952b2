//! Test fixture mod exporting both stage hooks.
//!
//! Interprets the host handle as a `ProbeCounters` block and increments the
//! counter for whichever stage hook actually ran, so the bridge's tests can
//! assert exact call counts and handle identity.

use mod_core::{declare_mod_hooks, HostEnv, ProbeCounters};

fn probe_before(host: *mut HostEnv) {
    if let Some(counters) = unsafe { (host as *mut ProbeCounters).as_mut() } {
        counters.before_calls += 1;
    }
}

fn probe_after(host: *mut HostEnv) {
    if let Some(counters) = unsafe { (host as *mut ProbeCounters).as_mut() } {
        counters.after_calls += 1;
    }
}

declare_mod_hooks!(before: probe_before, after: probe_after);
