use thiserror::Error;

/// Failure modes of a single mod load attempt.
///
/// The not-initialized guard lives a layer up in the `bridge` crate, which
/// owns the initialization state; these cover everything from the stage
/// check down.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid load stage index {0}, expected 0 or 1")]
    InvalidStage(i32),

    #[error("failed to open mod library '{path}': {reason}")]
    Open { path: String, reason: String },

    #[error("mod library '{path}' does not export {symbol}: {reason}")]
    SymbolMissing {
        path: String,
        symbol: &'static str,
        reason: String,
    },
}
