/// Macro to export the stage entry points under the symbol names the bridge
/// resolves. A mod that only cares about one stage declares only that hook.
///
/// ```ignore
/// fn before(host: *mut mod_core::HostEnv) { /* ... */ }
/// fn after(host: *mut mod_core::HostEnv) { /* ... */ }
///
/// mod_core::declare_mod_hooks!(before: before, after: after);
/// ```
#[macro_export]
macro_rules! declare_mod_hooks {
    (before: $before_fn:ident, after: $after_fn:ident) => {
        $crate::declare_mod_hooks!(before: $before_fn);
        $crate::declare_mod_hooks!(after: $after_fn);
    };
    (before: $before_fn:ident) => {
        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ModBridge_LoadBefore(host: *mut $crate::HostEnv) {
            $before_fn(host)
        }
    };
    (after: $after_fn:ident) => {
        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern "C" fn ModBridge_LoadAfter(host: *mut $crate::HostEnv) {
            $after_fn(host)
        }
    };
}
