use crate::HostEnv;

/// Signature both stage hooks must have.
///
/// A hook returns nothing; the mod does its own registration and hook
/// installation inside the call. The bridge does not inspect or react to
/// what the mod does.
pub type ModLoadFn = unsafe extern "C" fn(host: *mut HostEnv);

/// Exported name resolved for the before stage, nul-terminated for the
/// dynamic loader. A mod need not export both stage symbols.
pub const LOAD_BEFORE_SYMBOL: &[u8] = b"ModBridge_LoadBefore\0";

/// Exported name resolved for the after stage.
pub const LOAD_AFTER_SYMBOL: &[u8] = b"ModBridge_LoadAfter\0";
