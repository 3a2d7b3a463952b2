//! Host-facing surface of the mod loading bridge.
//!
//! The managed host loads this crate's cdylib, calls `modbridge_host_init`
//! once with its environment handle, and then dispatches individual mod
//! loads through `modbridge_load_mod`. The `Bridge` type carries the same
//! state machine behind a safe API for in-process hosts and tests.

pub mod host_bridge;
pub use host_bridge::{Bridge, BridgeError};

pub mod ffi;
