use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use thiserror::Error;

use bridge_core::{HostHandle, LoadError, LoadStage, ModLoader};

/// Errors surfaced by the safe bridge API. The FFI layer flattens these to
/// the boolean contract the managed host expects.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bridge not initialized, host_init has not run")]
    NotInitialized,

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// State machine behind the exported entry points.
///
/// Two states: uninitialized until the host hands over its environment
/// handle, then initialized for the rest of the process lifetime. There is
/// no transition back. The loader sits behind a mutex; the original shim
/// left its flag/handle pair unsynchronized.
pub struct Bridge {
    loader: OnceCell<Mutex<ModLoader>>,
}

impl Bridge {
    pub const fn new() -> Self {
        Bridge {
            loader: OnceCell::new(),
        }
    }

    /// Captures the host handle and moves the bridge to the initialized
    /// state. The first call wins; repeated calls change nothing and report
    /// `false`.
    pub fn host_init(&self, host: HostHandle) -> bool {
        self.loader.set(Mutex::new(ModLoader::new(host))).is_ok()
    }

    pub fn is_initialized(&self) -> bool {
        self.loader.get().is_some()
    }

    /// Loads one mod at one stage. Unlike the boolean FFI contract this
    /// surfaces open and symbol-resolution failures to the caller.
    pub fn load_mod(&self, path: &Path, stage: LoadStage) -> Result<(), BridgeError> {
        let mut loader = self.lock().ok_or(BridgeError::NotInitialized)?;
        loader.load_mod(path, stage)?;
        Ok(())
    }

    /// Number of mod libraries currently retained across all loads.
    pub fn loaded_mods(&self) -> usize {
        self.lock().map(|loader| loader.loaded_count()).unwrap_or(0)
    }

    /// Releases every retained mod library. The initialized state is kept;
    /// further loads remain possible.
    pub fn shutdown(&self) {
        if let Some(mut loader) = self.lock() {
            loader.unload_all();
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, ModLoader>> {
        let loader = self.loader.get()?;
        Some(match loader.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        })
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    fn null_handle() -> HostHandle {
        HostHandle::new(ptr::null_mut())
    }

    #[test]
    fn load_before_init_fails_for_any_input() {
        let bridge = Bridge::new();
        for stage in [LoadStage::Before, LoadStage::After] {
            let err = bridge.load_mod(Path::new("whatever.so"), stage).unwrap_err();
            assert!(matches!(err, BridgeError::NotInitialized));
        }
        assert_eq!(bridge.loaded_mods(), 0);
    }

    #[test]
    fn first_init_wins() {
        let bridge = Bridge::new();
        assert!(!bridge.is_initialized());
        assert!(bridge.host_init(null_handle()));
        assert!(bridge.is_initialized());
        assert!(!bridge.host_init(null_handle()));
        assert!(bridge.is_initialized());
    }

    #[test]
    fn open_failure_surfaces_through_the_safe_api() {
        let bridge = Bridge::new();
        bridge.host_init(null_handle());
        let err = bridge
            .load_mod(Path::new("/no/such/mod.so"), LoadStage::Before)
            .unwrap_err();
        assert!(matches!(err, BridgeError::Load(LoadError::Open { .. })));
        assert_eq!(bridge.loaded_mods(), 0);
    }

    #[test]
    fn shutdown_without_loads_is_harmless() {
        let bridge = Bridge::new();
        bridge.shutdown();
        bridge.host_init(null_handle());
        bridge.shutdown();
        assert_eq!(bridge.loaded_mods(), 0);
    }
}
