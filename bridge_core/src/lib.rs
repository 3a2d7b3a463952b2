pub mod load_stage;
pub use load_stage::LoadStage;

pub mod load_error;
pub use load_error::LoadError;

pub mod mod_loader;
pub use mod_loader::{HostHandle, ModLoader};
