use thiserror::Error;

/// Errors that can occur while packing or unpacking batched streams
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// Payload too large for the length-prefixed framing
    #[error("Payload of {size} bytes exceeds the batch framing limit of {limit} bytes. Send it unbatched or fragment it")]
    FrameTooLarge { size: usize, limit: usize },

    /// Stream ended inside a frame header
    #[error("Batched stream truncated at offset {offset}: expected a 2-byte frame header. The stream was cut or corrupted in transit")]
    TruncatedHeader { offset: usize },

    /// Stream ended inside a frame body
    #[error("Batched stream truncated: frame claims {expected} bytes but only {available} remain. The stream was cut or corrupted in transit")]
    TruncatedFrame { expected: usize, available: usize },
}
