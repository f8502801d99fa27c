use thiserror::Error;

/// Errors a message handler may return. The processor logs the failure with
/// the message kind and continues the drain; a bad record never aborts the
/// phase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Payload bytes did not decode to what the handler expected
    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    /// Handler understood the message but refused it
    #[error("Message rejected: {reason}")]
    Rejected { reason: String },
}
