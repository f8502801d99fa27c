use crate::messages::error::MessageError;

/// The closed set of message kinds the dispatch loop understands.
/// End-of-queue is expressed by the drain cursor returning `None`; there is
/// no reserved sentinel member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Server-originated remote call executed on clients
    ClientCall,
    /// Client-originated remote call executed on the server
    ServerCall,
    /// A client asking the server to accept it
    ConnectionRequest,
    /// The server telling a client it was accepted
    ConnectionApproved,
    /// Spawn a replicated object on clients
    CreateObject,
    /// Despawn a replicated object on clients
    DestroyObject,
    /// Transfer authority over a replicated object
    ChangeOwner,
    /// Clock synchronization ping from the server
    TimeSync,
}

impl MessageKind {
    pub fn to_wire(self) -> u8 {
        match self {
            MessageKind::ClientCall => 0,
            MessageKind::ServerCall => 1,
            MessageKind::ConnectionRequest => 2,
            MessageKind::ConnectionApproved => 3,
            MessageKind::CreateObject => 4,
            MessageKind::DestroyObject => 5,
            MessageKind::ChangeOwner => 6,
            MessageKind::TimeSync => 7,
        }
    }

    pub fn from_wire(wire_id: u8) -> Result<Self, MessageError> {
        match wire_id {
            0 => Ok(MessageKind::ClientCall),
            1 => Ok(MessageKind::ServerCall),
            2 => Ok(MessageKind::ConnectionRequest),
            3 => Ok(MessageKind::ConnectionApproved),
            4 => Ok(MessageKind::CreateObject),
            5 => Ok(MessageKind::DestroyObject),
            6 => Ok(MessageKind::ChangeOwner),
            7 => Ok(MessageKind::TimeSync),
            _ => Err(MessageError::UnknownKind { wire_id }),
        }
    }
}
