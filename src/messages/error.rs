use thiserror::Error;

/// Errors that can occur while decoding or queueing messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Wire id does not map to a known message kind
    #[error("Wire id {wire_id} does not name a known message kind. The peer is speaking a newer or corrupted protocol; the record is dropped")]
    UnknownKind { wire_id: u8 },
}
