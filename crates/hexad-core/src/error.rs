//! Error types for Hexad

use thiserror::Error;

/// Core Hexad errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexadError {
    #[error("Atom value out of range: {0} (expected 0..=63)")]
    AtomOutOfRange(u8),

    #[error("Realm id out of range: {0} (expected 0..=10)")]
    RealmOutOfRange(u8),

    #[error("Degenerate vector: {0}")]
    DegenerateVector(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for Hexad operations
pub type HexadResult<T> = Result<T, HexadError>;
