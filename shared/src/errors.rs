//! Error types for the MacroLog core

use thiserror::Error;

/// Failures the pure core can signal.
///
/// The core has exactly two failure modes, both input-validation errors.
/// Storage and network failures belong to the calling layer and never
/// appear here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot build a summary from an empty selection")]
    EmptySelection,
}
