use crate::types::EndpointId;

use super::error::HandlerError;

/// The dispatch table the receive pass resolves message kinds against: one
/// method per kind, bound at construction of the caller's handler value.
///
/// Each method receives the originating endpoint and the raw payload bytes
/// (plus the producer timestamp for the kinds that carry one) and returns a
/// result; an `Err` is contained at the single-record boundary by the
/// processor. Implementations own all object/avatar lifecycle and RPC
/// execution semantics.
pub trait MessageHandlers {
    /// Server-originated remote call, executed while acting as a client
    fn client_call(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError>;

    /// Client-originated remote call, executed while acting as the server
    fn server_call(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError>;

    /// A client asks to join; only the server handles this
    fn connection_request(
        &mut self,
        sender: EndpointId,
        payload: &[u8],
    ) -> Result<(), HandlerError>;

    /// The server accepted the local client
    fn connection_approved(
        &mut self,
        sender: EndpointId,
        payload: &[u8],
        timestamp: f64,
    ) -> Result<(), HandlerError>;

    fn create_object(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError>;

    fn destroy_object(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError>;

    fn change_owner(&mut self, sender: EndpointId, payload: &[u8]) -> Result<(), HandlerError>;

    fn time_sync(
        &mut self,
        sender: EndpointId,
        payload: &[u8],
        timestamp: f64,
    ) -> Result<(), HandlerError>;
}
