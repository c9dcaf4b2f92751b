//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or dispatching values.
///
/// The taxonomy is closed: every failure in the codec and the RPC layer
/// surfaces as exactly one of these kinds. Programs should branch on the
/// kind; the `Display` rendering exists for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NopError {
    /// The underlying reader or writer failed, including end of stream.
    #[error("I/O error in the underlying stream")]
    Io,

    /// A bounded reader would exceed its byte budget.
    #[error("no buffer space remaining in bounded stream")]
    NoBuffer,

    /// The prefix byte read from the stream does not match the target type.
    #[error("unexpected encoding type")]
    UnexpectedEncodingType,

    /// An integer payload uses a size class wider than the target type.
    #[error("invalid integer size class for target type")]
    InvalidIntegerClass,

    /// A container length is malformed or exceeds the receiving capacity.
    #[error("invalid container length")]
    InvalidContainerLength,

    /// A structure's member count does not match its declaration.
    #[error("invalid structure member count")]
    InvalidMemberCount,

    /// A request frame names a selector with no bound handler.
    #[error("unknown interface method selector")]
    InvalidInterfaceMethod,

    /// Two methods of one interface hash to the same selector.
    #[error("duplicate method selector hash")]
    DuplicateMethodHash,

    /// Transport setup failed.
    #[error("system error during transport setup")]
    SystemError,
}

/// Result type for all codec and RPC operations.
pub type Status<T> = Result<T, NopError>;
