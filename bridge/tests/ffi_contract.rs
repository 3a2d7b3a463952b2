//! Exercises the exported C entry points in their documented call order.
//!
//! The entry points share one process-wide bridge, so the whole sequence
//! lives in a single test: guard behavior before initialization, argument
//! rejection, the optimistic dispatch contract, and per-stage invocation.

mod common;

use std::ffi::CString;

use bridge::ffi;
use mod_core::{HostEnv, ProbeCounters};

#[test]
fn entry_point_contract() {
    common::ensure_fixtures();

    let probe = common::fixture_path("mod_probe");
    let probe_path = CString::new(probe.to_str().unwrap()).unwrap();

    // Before host init every call reports failure, valid input or not.
    assert!(!unsafe { ffi::modbridge_load_mod(probe_path.as_ptr(), 0) });
    assert!(!unsafe { ffi::modbridge_load_mod(std::ptr::null(), 5) });
    assert_eq!(ffi::modbridge_loaded_mods(), 0);

    let counters = Box::into_raw(Box::new(ProbeCounters::default()));
    ffi::modbridge_host_init(counters as *mut HostEnv);

    // Null, non-UTF-8 and out-of-range arguments are declined with nothing
    // opened.
    assert!(!unsafe { ffi::modbridge_load_mod(std::ptr::null(), 0) });
    let bad_utf8 = CString::new(vec![0x66, 0xff, 0xfe]).unwrap();
    assert!(!unsafe { ffi::modbridge_load_mod(bad_utf8.as_ptr(), 0) });
    assert!(!unsafe { ffi::modbridge_load_mod(probe_path.as_ptr(), 2) });
    assert!(!unsafe { ffi::modbridge_load_mod(probe_path.as_ptr(), -1) });
    assert_eq!(ffi::modbridge_loaded_mods(), 0);

    // Optimistic contract: an unopenable path still reports "dispatched".
    let missing = CString::new("/no/such/mod.so").unwrap();
    assert!(unsafe { ffi::modbridge_load_mod(missing.as_ptr(), 0) });
    assert_eq!(ffi::modbridge_loaded_mods(), 0);

    // Real loads, one per stage, each hook exactly once.
    assert!(unsafe { ffi::modbridge_load_mod(probe_path.as_ptr(), 0) });
    assert_eq!(unsafe { (*counters).before_calls }, 1);
    assert_eq!(unsafe { (*counters).after_calls }, 0);

    assert!(unsafe { ffi::modbridge_load_mod(probe_path.as_ptr(), 1) });
    assert_eq!(unsafe { (*counters).before_calls }, 1);
    assert_eq!(unsafe { (*counters).after_calls }, 1);
    assert_eq!(ffi::modbridge_loaded_mods(), 2);

    // A second init is ignored, the first handle stays captured.
    ffi::modbridge_host_init(std::ptr::null_mut());
    assert!(unsafe { ffi::modbridge_load_mod(probe_path.as_ptr(), 1) });
    assert_eq!(unsafe { (*counters).after_calls }, 2);

    ffi::modbridge_shutdown();
    assert_eq!(ffi::modbridge_loaded_mods(), 0);

    drop(unsafe { Box::from_raw(counters) });
}
