/// Opaque reference to the managed host environment.
///
/// The host hands the bridge a `*mut HostEnv` once at initialization, and the
/// bridge passes it through to every mod hook. Only the host and the mods
/// agree on what it points to; the bridge never dereferences it. The host
/// owns the underlying resource and keeps it valid for the life of the
/// process.
#[repr(C)]
pub struct HostEnv {
    _private: [u8; 0],
}
