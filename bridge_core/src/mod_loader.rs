use std::path::Path;

use libloading::{Library, Symbol};
use liblog::log_info;
use mod_core::{HostEnv, ModLoadFn};

use crate::{LoadError, LoadStage};

/// Non-owning reference to the host environment, captured once at
/// initialization and passed to every hook.
#[derive(Debug, Clone, Copy)]
pub struct HostHandle(*mut HostEnv);

impl HostHandle {
    pub fn new(raw: *mut HostEnv) -> Self {
        HostHandle(raw)
    }

    pub fn as_ptr(&self) -> *mut HostEnv {
        self.0
    }
}

// The handle is an opaque token the bridge never dereferences, and the host
// keeps it valid until process exit.
unsafe impl Send for HostHandle {}

/// Opens mod libraries, resolves their stage hooks and keeps every opened
/// library alive until the loader is shut down or dropped.
pub struct ModLoader {
    host: HostHandle,
    libraries: Vec<Library>,
}

impl ModLoader {
    pub fn new(host: HostHandle) -> Self {
        Self {
            host,
            libraries: Vec::new(),
        }
    }

    /// Opens the library at `path`, resolves the hook for `stage` and calls
    /// it with the host handle. The library is retained on success so the
    /// mod's code stays mapped; nothing is retained on failure. A mod that
    /// exports only one stage fails symbol resolution for the other without
    /// any hook running.
    pub fn load_mod(&mut self, path: &Path, stage: LoadStage) -> Result<(), LoadError> {
        let lib = open_library(path).map_err(|e| LoadError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        unsafe {
            let hook: Symbol<ModLoadFn> =
                lib.get(stage.symbol()).map_err(|e| LoadError::SymbolMissing {
                    path: path.display().to_string(),
                    symbol: stage.symbol_name(),
                    reason: e.to_string(),
                })?;
            hook(self.host.as_ptr());
        }

        log_info!(&format!(
            "Invoked {} in {}",
            stage.symbol_name(),
            path.display()
        ));
        self.libraries.push(lib);
        Ok(())
    }

    /// Number of mod libraries currently retained.
    pub fn loaded_count(&self) -> usize {
        self.libraries.len()
    }

    /// Drops every retained library. The original shim leaked its handles;
    /// owning them here gives the host an explicit release point at
    /// shutdown.
    pub fn unload_all(&mut self) {
        self.libraries.clear();
    }
}

/// Opens a shared library with immediate binding, matching the
/// `dlopen(path, RTLD_NOW)` semantics mods are written against.
#[cfg(unix)]
fn open_library(path: &Path) -> Result<Library, libloading::Error> {
    use libloading::os::unix::{Library as UnixLibrary, RTLD_LOCAL, RTLD_NOW};

    unsafe { UnixLibrary::open(Some(path), RTLD_NOW | RTLD_LOCAL).map(Library::from) }
}

#[cfg(not(unix))]
fn open_library(path: &Path) -> Result<Library, libloading::Error> {
    unsafe { Library::new(path) }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    fn loader() -> ModLoader {
        ModLoader::new(HostHandle::new(ptr::null_mut()))
    }

    #[test]
    fn open_failure_retains_nothing() {
        let mut loader = loader();
        let err = loader
            .load_mod(Path::new("/no/such/mod_library.so"), LoadStage::Before)
            .unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert_eq!(loader.loaded_count(), 0);
    }

    #[test]
    fn open_failure_mentions_the_path() {
        let mut loader = loader();
        let err = loader
            .load_mod(Path::new("/no/such/mod_library.so"), LoadStage::After)
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/mod_library.so"));
    }

    #[test]
    fn unload_all_on_empty_loader_is_a_no_op() {
        let mut loader = loader();
        loader.unload_all();
        assert_eq!(loader.loaded_count(), 0);
    }
}
