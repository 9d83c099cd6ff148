//! Error types for the simulation kernel.
//!
//! Three kinds, mirroring the three failure classes the kernel distinguishes:
//! configuration errors (refused synchronously, previous config stays live),
//! pattern-loader errors (malformed seed data), and resource errors (resize
//! allocation failure). Programming errors (bad `write_back` index, concurrent
//! `commit_step`) are not represented here — they panic, per contract.

use thiserror::Error;

/// Configuration errors: refused synchronously, the caller keeps whatever was
/// valid before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("numStates must be in [2, 1024], got {0}")]
    InvalidNumStates(u32),

    #[error("unrecognized neighborhood token '{0}'")]
    UnknownNeighborhood(String),

    #[error("unrecognized boundary token '{0}'")]
    UnknownBoundary(String),

    #[error("vitality anchors must be strictly increasing in x, starting at 0 and ending at 1")]
    NonMonotoneAnchors,

    #[error("failed to allocate a {width}x{height} grid")]
    Resize { width: usize, height: usize },
}

/// Errors from parsing pattern data (RLE, plaintext `.lif`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid character in pattern: {0:?}")]
    InvalidChar(char),
    #[error("run-length overflow or zero")]
    InvalidRun,
    #[error("pattern exceeds grid bounds")]
    OutOfBounds,
    #[error("unknown named pattern '{0}'")]
    UnknownName(String),
}
