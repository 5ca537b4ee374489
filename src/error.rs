//! # Error Handling
//!
//! Defines the error types used across the FEC framing and coding pipeline.
//! The core never panics on caller-reachable input: every fallible operation
//! returns one of these through a `Result`.

use thiserror::Error;

/// Errors that can occur while building or interpreting the Reed-Solomon
/// FEC pipeline (group planning, packet assembly, packet parsing).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FecError {
    /// A FEC ratio with `num == 0`, `den == 0`, or `num > den` was supplied.
    #[error("invalid FEC ratio {num}/{den}")]
    InvalidRatio { num: u32, den: u32 },

    /// `nsym` for the RS encoder must be in `1..=127`.
    #[error("invalid parity symbol count: {0}")]
    InvalidNsym(u32),

    /// The group planner could not satisfy `GS + M <= 255` for the given K.
    #[error("group plan overflow for K={k}, ratio={num}/{den}")]
    GroupPlanOverflow { k: u32, num: u32, den: u32 },

    /// A byte slice handed to `FecPacket::parse` was shorter than 256 bytes.
    #[error("packet too short: expected 256 bytes, got {0}")]
    PacketTooShort(usize),

    /// The receiver ring buffer capacity must be a nonzero power of two.
    #[error("ring capacity {0} is not a nonzero power of two")]
    InvalidRingCapacity(usize),
}

/// Errors surfaced by a [`crate::transport::RadioTransport`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The radio did not signal ready within the caller's timeout.
    #[error("radio not ready within timeout")]
    Timeout,

    /// The underlying transport returned an I/O error.
    #[error("transport I/O error: {0}")]
    Io(String),
}

/// Errors surfaced by a [`crate::source::FileSource`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileSourceError {
    /// The candidate file exceeds the configured size cap.
    #[error("file {name} is {size} bytes, exceeding cap of {cap} bytes")]
    TooLarge { name: String, size: u64, cap: u64 },

    /// The file could not be read (missing, permissions, truncated read).
    #[error("failed to read file {name}: {reason}")]
    ReadFailed { name: String, reason: String },
}

/// Top-level error returned by the sender and receiver pipelines.
///
/// Transport timeouts and file errors are generally *not* fatal to the
/// pipeline (per spec, the sender logs and skips); this type exists for the
/// cases an operation must abort and report back to its caller rather than
/// silently continuing.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fec(#[from] FecError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    FileSource(#[from] FileSourceError),

    #[error("radio configuration was refused by the driver: {0}")]
    ConfigMismatch(String),
}
