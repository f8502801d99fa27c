use thiserror::Error;

/// Errors a transport implementation may report from `send`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No open connection to the destination
    #[error("No open connection to endpoint {destination}. The peer disconnected or was never connected")]
    ConnectionClosed { destination: u64 },

    /// The underlying socket rejected the send
    #[error("Transport send to endpoint {destination} failed: {reason}")]
    SendFailed { destination: u64, reason: String },
}
