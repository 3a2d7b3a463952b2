//! Exported C entry points the managed host binds by name.
//!
//! `modbridge_host_init` is the analog of the platform module-load hook: the
//! host calls it once, right after loading the bridge library, to hand over
//! its environment handle. Everything else operates on that captured state.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::path::Path;

use bridge_core::{HostHandle, LoadStage};
use liblog::{log_error, log_info, log_warn, Logger};
use mod_core::HostEnv;

use crate::host_bridge::Bridge;

/// Process-wide bridge instance behind the exported entry points.
static BRIDGE: Bridge = Bridge::new();

/// Host initialization entry point. Captures the environment handle exactly
/// once; later calls are ignored. Never fails.
#[no_mangle]
pub extern "C" fn modbridge_host_init(host: *mut HostEnv) {
    Logger::init();
    if BRIDGE.host_init(HostHandle::new(host)) {
        log_info!("Host environment captured, bridge initialized");
    } else {
        log_warn!("modbridge_host_init called more than once, ignoring");
    }
}

/// Mod load entry point called by the managed host.
///
/// Returns `false` when the bridge is not initialized, the path is null or
/// not valid UTF-8, or the stage index is outside {0, 1} — all checked
/// before anything is opened. Once those checks pass the attempt is
/// dispatched and the call reports `true` even if the library fails to open
/// or lacks the stage symbol; those failures are logged, not returned, so
/// the host only ever learns "request went out".
///
/// # Safety
///
/// `path` must be null or point to a valid nul-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn modbridge_load_mod(path: *const c_char, stage: c_int) -> bool {
    if !BRIDGE.is_initialized() {
        log_warn!("modbridge_load_mod called before host initialization");
        return false;
    }
    if path.is_null() {
        log_warn!("modbridge_load_mod called with a null path");
        return false;
    }
    let path = match CStr::from_ptr(path).to_str() {
        Ok(s) => s.to_owned(),
        Err(_) => {
            log_warn!("modbridge_load_mod called with a non-UTF-8 path");
            return false;
        }
    };
    let stage = match LoadStage::try_from(stage) {
        Ok(stage) => stage,
        Err(e) => {
            log_warn!(&e.to_string());
            return false;
        }
    };

    if let Err(e) = BRIDGE.load_mod(Path::new(&path), stage) {
        // Swallowed by contract; the boolean only means "dispatched".
        log_error!(&format!("Load of '{}' failed: {}", path, e));
    }
    true
}

/// Number of mod libraries the bridge currently keeps resident.
#[no_mangle]
pub extern "C" fn modbridge_loaded_mods() -> usize {
    BRIDGE.loaded_mods()
}

/// Releases every retained mod library. Meant for host shutdown; the bridge
/// stays initialized.
#[no_mangle]
pub extern "C" fn modbridge_shutdown() {
    BRIDGE.shutdown();
    log_info!("Bridge shutdown, retained mod libraries released");
}
