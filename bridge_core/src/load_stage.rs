use mod_core::{LOAD_AFTER_SYMBOL, LOAD_BEFORE_SYMBOL};

use crate::LoadError;

/// The two extension points a mod may hook into, in load order.
///
/// The stage table is closed: an invalid index from the host call boundary
/// is rejected in `from_index` and can never reach the symbol lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    /// Runs before the host brings the game up.
    Before,
    /// Runs once the host is up.
    After,
}

impl LoadStage {
    /// Maps the raw stage index used at the host call boundary. Anything
    /// outside {0, 1} is rejected.
    pub fn from_index(index: i32) -> Option<LoadStage> {
        match index {
            0 => Some(LoadStage::Before),
            1 => Some(LoadStage::After),
            _ => None,
        }
    }

    pub fn index(&self) -> i32 {
        match self {
            LoadStage::Before => 0,
            LoadStage::After => 1,
        }
    }

    /// Nul-terminated symbol resolved in the mod library for this stage.
    pub fn symbol(&self) -> &'static [u8] {
        match self {
            LoadStage::Before => LOAD_BEFORE_SYMBOL,
            LoadStage::After => LOAD_AFTER_SYMBOL,
        }
    }

    /// Printable symbol name for log lines and errors.
    pub fn symbol_name(&self) -> &'static str {
        match self {
            LoadStage::Before => "ModBridge_LoadBefore",
            LoadStage::After => "ModBridge_LoadAfter",
        }
    }
}

impl TryFrom<i32> for LoadStage {
    type Error = LoadError;

    fn try_from(index: i32) -> Result<Self, LoadError> {
        LoadStage::from_index(index).ok_or(LoadError::InvalidStage(index))
    }
}
